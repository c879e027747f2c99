use crate::engine::fit::FitTier;

fn clean(value: &str) -> String {
    let stripped = value.replace(['\u{feff}', '\u{200b}'], "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn normalize_school_name(value: &str) -> Option<String> {
    let cleaned = clean(value);
    (!cleaned.is_empty()).then_some(cleaned)
}

pub(crate) fn normalize_tier(value: &str) -> Option<FitTier> {
    FitTier::parse(&clean(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_names_keep_case_but_lose_stray_whitespace() {
        assert_eq!(
            normalize_school_name("\u{feff}  Lakeside   College "),
            Some("Lakeside College".to_string())
        );
        assert_eq!(normalize_school_name(" \u{200b} "), None);
    }

    #[test]
    fn tiers_ignore_case_and_invisible_characters() {
        assert_eq!(normalize_tier("\u{200b}MATCH"), Some(FitTier::Match));
        assert_eq!(normalize_tier("long shot"), None);
    }
}
