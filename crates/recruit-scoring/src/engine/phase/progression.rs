use super::domain::{MilestoneProgress, Phase};
use serde::Serialize;
use tracing::debug;

pub fn next_phase(current: Phase) -> Option<Phase> {
    current.next()
}

/// True only when progress is known and nothing remains.
pub fn can_advance(progress: Option<&MilestoneProgress>) -> bool {
    progress
        .map(|progress| progress.remaining.is_empty())
        .unwrap_or(false)
}

pub fn remaining_milestones(progress: Option<&MilestoneProgress>) -> Vec<String> {
    progress
        .map(|progress| progress.remaining.clone())
        .unwrap_or_default()
}

pub fn completion_percentage(progress: Option<&MilestoneProgress>) -> u8 {
    progress
        .map(|progress| progress.percent_complete)
        .unwrap_or(0)
}

/// `"{completed}/{required} milestones complete"`, or empty when unknown.
pub fn progress_label(progress: Option<&MilestoneProgress>) -> String {
    progress
        .map(|progress| {
            format!(
                "{}/{} milestones complete",
                progress.completed.len(),
                progress.required.len()
            )
        })
        .unwrap_or_default()
}

/// Display projection of where an athlete stands in their current phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseAdvancement {
    pub current: Phase,
    pub current_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Phase>,
    pub can_advance: bool,
    pub remaining: Vec<String>,
    pub percent_complete: u8,
    pub progress_label: String,
}

/// `can_advance` additionally requires a successor phase, so the terminal
/// phase never reports itself as advanceable.
pub fn advancement(current: Phase, progress: Option<&MilestoneProgress>) -> PhaseAdvancement {
    let next = next_phase(current);
    let ready = next.is_some() && can_advance(progress);

    debug!(
        phase = current.label(),
        ready,
        percent_complete = completion_percentage(progress),
        "evaluated phase advancement"
    );

    PhaseAdvancement {
        current,
        current_label: current.label(),
        next,
        can_advance: ready,
        remaining: remaining_milestones(progress),
        percent_complete: completion_percentage(progress),
        progress_label: progress_label(progress),
    }
}
