use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Month on which a new academic year begins.
const ACADEMIC_YEAR_START_MONTH: u32 = 8;

/// Recruiting phases, strictly linear. [`Phase::Senior`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl Phase {
    pub const fn ordered() -> [Self; 4] {
        [Self::Freshman, Self::Sophomore, Self::Junior, Self::Senior]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Freshman => "Freshman",
            Self::Sophomore => "Sophomore",
            Self::Junior => "Junior",
            Self::Senior => "Senior",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Freshman => Some(Self::Sophomore),
            Self::Sophomore => Some(Self::Junior),
            Self::Junior => Some(Self::Senior),
            Self::Senior => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Calendar year in which the academic year containing `today` ends.
    /// Academic years roll over on August 1.
    pub fn academic_year_end(today: NaiveDate) -> i32 {
        if today.month() >= ACADEMIC_YEAR_START_MONTH {
            today.year() + 1
        } else {
            today.year()
        }
    }

    /// Phase an athlete graduating in `graduation_year` is in on `today`.
    /// Graduates stay in the terminal phase and anyone three or more years
    /// out is a freshman. Any `i32` year is accepted.
    pub fn for_graduation_year(graduation_year: i32, today: NaiveDate) -> Self {
        let years_out =
            i64::from(graduation_year) - i64::from(Self::academic_year_end(today));

        match years_out {
            years if years <= 0 => Self::Senior,
            1 => Self::Junior,
            2 => Self::Sophomore,
            _ => Self::Freshman,
        }
    }
}

/// Milestone completion for one phase.
///
/// Records built through [`MilestoneProgress::new`] keep `remaining` equal to
/// `required - completed` and `percent_complete` equal to
/// `100 * |completed| / |required|` (0 when nothing is required). Records
/// deserialized from callers are taken as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneProgress {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(default)]
    pub remaining: Vec<String>,
    #[serde(default)]
    pub percent_complete: u8,
}

impl MilestoneProgress {
    /// Completed ids that are not required are ignored and duplicates collapse,
    /// so `completed` is always a subset of `required` in required order.
    pub fn new<R, C>(required: R, completed: C) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut required_ids: Vec<String> = Vec::new();
        for id in required {
            let id = id.into();
            if !required_ids.contains(&id) {
                required_ids.push(id);
            }
        }

        let done: Vec<String> = completed.into_iter().map(Into::into).collect();
        let (completed, remaining): (Vec<String>, Vec<String>) = required_ids
            .iter()
            .cloned()
            .partition(|id| done.contains(id));

        let percent_complete = if required_ids.is_empty() {
            0
        } else {
            (100.0 * completed.len() as f64 / required_ids.len() as f64).round() as u8
        };

        Self {
            required: required_ids,
            completed,
            remaining,
            percent_complete,
        }
    }

    /// Progress against the standard milestones for `phase`.
    pub fn for_phase<C>(phase: Phase, completed: C) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let blueprint = super::PhaseBlueprint::standard();
        let required = blueprint
            .milestones_for_phase(phase)
            .into_iter()
            .map(|milestone| milestone.key);
        Self::new(required, completed)
    }
}
