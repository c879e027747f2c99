mod blueprint;
pub mod domain;
mod progression;

pub use blueprint::{MilestoneTemplate, PhaseBlueprint};
pub use domain::{MilestoneProgress, Phase};
pub use progression::{
    advancement, can_advance, completion_percentage, next_phase, progress_label,
    remaining_milestones, PhaseAdvancement,
};
