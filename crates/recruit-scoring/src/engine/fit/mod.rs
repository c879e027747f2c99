//! School fit scoring: four bounded dimension calculators feeding one
//! weighted 0..=100 score and tier.

pub mod dimensions;
pub mod domain;
mod engine;

pub use domain::{
    FitBreakdown, FitDimension, FitScoreInputs, FitScoreResult, FitTier, DIMENSION_MAXIMUMS,
    FIT_TIER_THRESHOLDS,
};
pub use engine::{
    assess, calculate_fit_score, fit_score_recommendation, get_fit_tier, FitAssessment,
};
