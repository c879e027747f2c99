use super::normalizer::{normalize_school_name, normalize_tier};
use crate::engine::fit::FitTier;
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct SchoolRow {
    pub(crate) name: Option<String>,
    pub(crate) fit_score: f64,
    pub(crate) fit_tier: Option<FitTier>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<SchoolRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<RawSchoolRow>() {
        let raw = record?;
        rows.push(SchoolRow {
            name: raw.school.as_deref().and_then(normalize_school_name),
            fit_score: raw.fit_score.unwrap_or(0.0),
            fit_tier: raw.fit_tier.as_deref().and_then(normalize_tier),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawSchoolRow {
    #[serde(rename = "School", default, deserialize_with = "empty_string_as_none")]
    school: Option<String>,
    #[serde(rename = "Fit Score", default)]
    fit_score: Option<f64>,
    #[serde(rename = "Fit Tier", default, deserialize_with = "empty_string_as_none")]
    fit_tier: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
