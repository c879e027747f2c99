//! Dimension calculators. Each sums fixed point allotments from independent
//! sub-factors and holds the total to the dimension ceiling. A missing input
//! earns nothing for its sub-factor and never affects the others.

pub mod academic;
pub mod athletic;
pub mod opportunity;
pub mod personal;

pub use academic::{academic_fit, AcademicFactors, ACADEMIC_MAX, ACADEMIC_SUPPORT_POINTS};
pub use athletic::{athletic_fit, AthleticFactors, Sport, ATHLETIC_MAX};
pub use opportunity::{opportunity_fit, OpportunityFactors, OPPORTUNITY_MAX};
pub use personal::{personal_fit, CampusSize, CostSensitivity, PersonalFactors, PERSONAL_MAX};

use serde::{Deserialize, Serialize};

/// Three-step rating used for coach interest and scholarship availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Medium,
    Low,
}

/// Points for the first `(floor, points)` entry whose floor `value` reaches,
/// else `fallback`. Tables are ordered highest floor first.
pub(crate) fn points_at_or_above(value: f64, table: &[(f64, u32)], fallback: u32) -> u32 {
    table
        .iter()
        .find(|(floor, _)| value >= *floor)
        .map(|(_, points)| *points)
        .unwrap_or(fallback)
}

/// Points for the first `(ceiling, points)` entry `value` does not exceed,
/// else `fallback`. Tables are ordered lowest ceiling first.
pub(crate) fn points_at_or_below(value: f64, table: &[(f64, u32)], fallback: u32) -> u32 {
    table
        .iter()
        .find(|(ceiling, _)| value <= *ceiling)
        .map(|(_, points)| *points)
        .unwrap_or(fallback)
}

/// `value - reference` rounded to hundredths, so one-decimal inputs land on
/// the tier floor they name instead of just under it.
pub(crate) fn rounded_gap(value: f64, reference: f64) -> f64 {
    ((value - reference) * 100.0).round() / 100.0
}

/// Finite, strictly positive measurement or `None`.
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite() && *value > 0.0)
}

pub(crate) fn normalize_text(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_tables_pick_first_matching_band() {
        let table = [(90.0, 7), (85.0, 5), (80.0, 3)];
        assert_eq!(points_at_or_above(92.0, &table, 1), 7);
        assert_eq!(points_at_or_above(85.0, &table, 1), 5);
        assert_eq!(points_at_or_above(79.9, &table, 1), 1);

        let table = [(1.0, 6), (2.0, 4), (3.0, 2)];
        assert_eq!(points_at_or_below(0.0, &table, 1), 6);
        assert_eq!(points_at_or_below(3.0, &table, 1), 2);
        assert_eq!(points_at_or_below(7.0, &table, 1), 1);
    }

    #[test]
    fn rounded_gap_removes_subtraction_noise() {
        assert!(3.3 - 3.5 < -0.2);
        assert_eq!(rounded_gap(3.3, 3.5), -0.2);
        assert_eq!(rounded_gap(3.0, 3.5), -0.5);
        assert_eq!(rounded_gap(1150.0, 1200.0), -50.0);
    }

    #[test]
    fn positive_filters_unusable_measurements() {
        assert_eq!(positive(Some(3.5)), Some(3.5));
        assert_eq!(positive(Some(0.0)), None);
        assert_eq!(positive(Some(f64::NAN)), None);
        assert_eq!(positive(None), None);
    }

    #[test]
    fn normalize_text_collapses_case_and_whitespace() {
        assert_eq!(normalize_text("  Computer   Science "), "computer science");
    }
}
