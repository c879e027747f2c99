use super::{normalize_text, points_at_or_above, points_at_or_below, positive};
use serde::{Deserialize, Serialize};

pub const PERSONAL_MAX: u32 = 15;

pub const SAME_STATE_POINTS: u32 = 3;

pub const CAMPUS_SIZE_EXACT_POINTS: u32 = 3;
pub const CAMPUS_SIZE_ADJACENT_POINTS: u32 = 1;

pub const PRIORITY_SCHOOL_POINTS: u32 = 2;

/// 1-10 rating of the school's program in the athlete's intended major.
pub const MAJOR_STRENGTH_TIERS: [(f64, u32); 2] = [(7.0, 4), (4.0, 2)];

/// Annual cost ceilings per sensitivity band, lowest first.
pub const HIGH_SENSITIVITY_COST_TIERS: [(f64, u32); 3] =
    [(20_000.0, 3), (35_000.0, 2), (50_000.0, 1)];
pub const MEDIUM_SENSITIVITY_COST_TIERS: [(f64, u32); 3] =
    [(35_000.0, 3), (55_000.0, 2), (75_000.0, 1)];
pub const LOW_SENSITIVITY_COST_TIERS: [(f64, u32); 2] = [(60_000.0, 3), (90_000.0, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampusSize {
    Small,
    Medium,
    Large,
}

impl CampusSize {
    pub const fn ordered() -> [Self; 3] {
        [Self::Small, Self::Medium, Self::Large]
    }

    /// Reference enrollment for the band.
    pub const fn centroid(self) -> f64 {
        match self {
            Self::Small => 2_500.0,
            Self::Medium => 10_000.0,
            Self::Large => 30_000.0,
        }
    }

    /// Band whose centroid sits closest to `enrollment`; ties go to the
    /// smaller band.
    pub fn nearest(enrollment: f64) -> Self {
        let mut best = Self::Small;
        for size in Self::ordered() {
            if (enrollment - size.centroid()).abs() < (enrollment - best.centroid()).abs() {
                best = size;
            }
        }
        best
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSensitivity {
    High,
    Medium,
    Low,
}

impl CostSensitivity {
    fn points(self, annual_cost: f64) -> u32 {
        match self {
            Self::High => points_at_or_below(annual_cost, &HIGH_SENSITIVITY_COST_TIERS, 0),
            Self::Medium => points_at_or_below(annual_cost, &MEDIUM_SENSITIVITY_COST_TIERS, 0),
            Self::Low => points_at_or_below(annual_cost, &LOW_SENSITIVITY_COST_TIERS, 1),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalFactors {
    #[serde(default)]
    pub home_state: Option<String>,
    #[serde(default)]
    pub school_state: Option<String>,
    #[serde(default)]
    pub campus_size_preference: Option<CampusSize>,
    #[serde(default)]
    pub enrollment: Option<f64>,
    #[serde(default)]
    pub cost_sensitivity: Option<CostSensitivity>,
    #[serde(default)]
    pub annual_cost: Option<f64>,
    #[serde(default)]
    pub is_priority: bool,
    #[serde(default)]
    pub major_strength: Option<f64>,
}

pub fn personal_fit(factors: &PersonalFactors) -> u32 {
    let priority = if factors.is_priority {
        PRIORITY_SCHOOL_POINTS
    } else {
        0
    };
    let total = same_state_points(factors)
        + campus_size_points(factors)
        + cost_points(factors)
        + priority
        + major_strength_points(factors.major_strength);
    total.min(PERSONAL_MAX)
}

fn same_state_points(factors: &PersonalFactors) -> u32 {
    match (factors.home_state.as_deref(), factors.school_state.as_deref()) {
        (Some(home), Some(school)) => {
            let home = normalize_text(home);
            if !home.is_empty() && home == normalize_text(school) {
                SAME_STATE_POINTS
            } else {
                0
            }
        }
        _ => 0,
    }
}

fn campus_size_points(factors: &PersonalFactors) -> u32 {
    let (Some(preference), Some(enrollment)) =
        (factors.campus_size_preference, positive(factors.enrollment))
    else {
        return 0;
    };

    let nearest = CampusSize::nearest(enrollment);
    match (preference as i8 - nearest as i8).abs() {
        0 => CAMPUS_SIZE_EXACT_POINTS,
        1 => CAMPUS_SIZE_ADJACENT_POINTS,
        _ => 0,
    }
}

fn cost_points(factors: &PersonalFactors) -> u32 {
    let Some(sensitivity) = factors.cost_sensitivity else {
        return 0;
    };
    // A zero cost is a real figure (full ride), so only negatives are rejected.
    factors
        .annual_cost
        .filter(|cost| cost.is_finite() && *cost >= 0.0)
        .map(|cost| sensitivity.points(cost))
        .unwrap_or(0)
}

fn major_strength_points(rating: Option<f64>) -> u32 {
    positive(rating)
        .map(|rating| points_at_or_above(rating, &MAJOR_STRENGTH_TIERS, 0))
        .unwrap_or(0)
}
