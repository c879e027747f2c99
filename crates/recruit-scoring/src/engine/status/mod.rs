mod classifier;
pub mod domain;

pub use classifier::{
    detailed_breakdown, overall_score, score_description, status_report, strongest_areas,
    weakest_areas,
};
pub use domain::{
    AreaStatus, BreakdownItem, ComponentRubric, ScoreBreakdown, StatusComponent, StatusLabel,
    StatusReport, SCORE_BANDS, STATUS_RUBRIC,
};
