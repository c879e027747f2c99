mod normalizer;
mod parser;

use super::health::SchoolEntry;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SchoolImportError {
    #[error("failed to read school list: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid school list CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads a school list exported as CSV with `School`, `Fit Score` and
/// `Fit Tier` columns. A blank score counts as zero; a blank or unrecognized
/// tier is left for the analyzer to derive.
pub struct SchoolListImporter;

impl SchoolListImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SchoolEntry>, SchoolImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<SchoolEntry>, SchoolImportError> {
        let entries = parser::parse_rows(reader)?
            .into_iter()
            .map(|row| SchoolEntry {
                name: row.name,
                fit_score: row.fit_score,
                fit_tier: row.fit_tier,
            })
            .collect();
        Ok(entries)
    }
}
