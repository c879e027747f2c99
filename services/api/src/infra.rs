use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use recruit_scoring::engine::phase::Phase;
use recruit_scoring::error::AppError;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_phase(raw: &str) -> Result<Phase, String> {
    Phase::ordered()
        .into_iter()
        .find(|phase| phase.label().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| {
            format!("unknown phase '{raw}' (expected freshman, sophomore, junior or senior)")
        })
}

/// An explicit phase wins; otherwise the phase is derived from the graduation
/// year as of `today` (defaults to the local date).
pub(crate) fn resolve_phase(
    phase: Option<Phase>,
    graduation_year: Option<i32>,
    today: Option<NaiveDate>,
) -> Result<Phase, AppError> {
    if let Some(phase) = phase {
        return Ok(phase);
    }

    let graduation_year = graduation_year.ok_or_else(|| {
        AppError::InvalidInput("either phase or graduation_year is required".to_string())
    })?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    Ok(Phase::for_graduation_year(graduation_year, today))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_phase_names_case_insensitively() {
        assert_eq!(parse_phase("junior"), Ok(Phase::Junior));
        assert_eq!(parse_phase(" Senior "), Ok(Phase::Senior));
        assert!(parse_phase("grad").is_err());
    }

    #[test]
    fn explicit_phase_wins_over_graduation_year() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
        let phase = resolve_phase(Some(Phase::Freshman), Some(2027), Some(today))
            .expect("phase resolves");
        assert_eq!(phase, Phase::Freshman);

        let derived = resolve_phase(None, Some(2027), Some(today)).expect("phase resolves");
        assert_eq!(derived, Phase::Senior);

        assert!(matches!(
            resolve_phase(None, None, Some(today)),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn out_of_range_graduation_years_still_resolve() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
        assert_eq!(
            resolve_phase(None, Some(i32::MIN), Some(today)).expect("phase resolves"),
            Phase::Senior
        );
        assert_eq!(
            resolve_phase(None, Some(i32::MAX), Some(today)).expect("phase resolves"),
            Phase::Freshman
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(
            parse_date("2026-08-01"),
            Ok(NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date"))
        );
        assert!(parse_date("08/01/2026").is_err());
    }
}
