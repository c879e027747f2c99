use serde::{Deserialize, Serialize};

/// Four-part activity breakdown behind the overall recruiting health score.
/// Absent components count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub task_completion_rate: Option<f64>,
    #[serde(default)]
    pub interaction_frequency_score: Option<f64>,
    #[serde(default)]
    pub coach_interest_score: Option<f64>,
    #[serde(default)]
    pub academic_standing_score: Option<f64>,
}

impl ScoreBreakdown {
    pub fn new(
        task_completion_rate: f64,
        interaction_frequency_score: f64,
        coach_interest_score: f64,
        academic_standing_score: f64,
    ) -> Self {
        Self {
            task_completion_rate: Some(task_completion_rate),
            interaction_frequency_score: Some(interaction_frequency_score),
            coach_interest_score: Some(coach_interest_score),
            academic_standing_score: Some(academic_standing_score),
        }
    }

    pub fn value(&self, component: StatusComponent) -> f64 {
        let raw = match component {
            StatusComponent::TaskCompletion => self.task_completion_rate,
            StatusComponent::InteractionFrequency => self.interaction_frequency_score,
            StatusComponent::CoachInterest => self.coach_interest_score,
            StatusComponent::AcademicStanding => self.academic_standing_score,
        };
        crate::engine::finite_or_zero(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusComponent {
    TaskCompletion,
    InteractionFrequency,
    CoachInterest,
    AcademicStanding,
}

impl StatusComponent {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::TaskCompletion,
            Self::InteractionFrequency,
            Self::CoachInterest,
            Self::AcademicStanding,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TaskCompletion => "Task Completion",
            Self::InteractionFrequency => "Interaction Frequency",
            Self::CoachInterest => "Coach Interest",
            Self::AcademicStanding => "Academic Standing",
        }
    }

    /// Entries in [`STATUS_RUBRIC`] follow declaration order.
    pub fn rubric(self) -> &'static ComponentRubric {
        &STATUS_RUBRIC[self as usize]
    }
}

/// Weight (percent of the overall score) and the value a component needs to
/// count as a strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentRubric {
    pub component: StatusComponent,
    pub weight: u8,
    pub good_threshold: i64,
}

/// Weights sum to 100.
pub const STATUS_RUBRIC: [ComponentRubric; 4] = [
    ComponentRubric {
        component: StatusComponent::TaskCompletion,
        weight: 35,
        good_threshold: 70,
    },
    ComponentRubric {
        component: StatusComponent::InteractionFrequency,
        weight: 25,
        good_threshold: 70,
    },
    ComponentRubric {
        component: StatusComponent::CoachInterest,
        weight: 25,
        good_threshold: 60,
    },
    ComponentRubric {
        component: StatusComponent::AcademicStanding,
        weight: 15,
        good_threshold: 60,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl StatusLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Excellent => "Your recruiting is on track. Keep up the momentum with coaches.",
            Self::Good => "Solid progress. A few areas could use more attention.",
            Self::Fair => "Recruiting is moving, but several areas need work.",
            Self::Poor => "Recruiting activity is falling behind. Focus on the weakest areas first.",
            Self::Critical => "Recruiting needs immediate attention across most areas.",
        }
    }
}

/// Inclusive lower bounds, highest first. Anything below the last band is
/// [`StatusLabel::Critical`].
pub const SCORE_BANDS: [(f64, StatusLabel); 4] = [
    (75.0, StatusLabel::Excellent),
    (60.0, StatusLabel::Good),
    (50.0, StatusLabel::Fair),
    (40.0, StatusLabel::Poor),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaStatus {
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "needs-work")]
    NeedsWork,
}

impl AreaStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::NeedsWork => "needs-work",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownItem {
    pub component: StatusComponent,
    pub label: &'static str,
    pub value: i64,
    pub weight: u8,
    pub status: AreaStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub score: i64,
    pub label: StatusLabel,
    pub summary: &'static str,
    pub breakdown: Vec<BreakdownItem>,
    pub strongest_areas: Vec<&'static str>,
    pub weakest_areas: Vec<&'static str>,
}
