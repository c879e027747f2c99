use super::{points_at_or_below, Level};
use serde::{Deserialize, Serialize};

pub const OPPORTUNITY_MAX: u32 = 20;

/// Players already rostered at the athlete's position.
pub const ROSTER_DEPTH_TIERS: [(f64, u32); 3] = [(1.0, 6), (2.0, 4), (3.0, 2)];
pub const ROSTER_DEPTH_FLOOR_POINTS: u32 = 1;

/// Years until the incumbent starters at the position graduate.
pub const STARTER_TURNOVER_TIERS: [(f64, u32); 3] = [(1.0, 5), (2.0, 4), (3.0, 2)];
pub const STARTER_TURNOVER_FLOOR_POINTS: u32 = 1;

pub const SCHOLARSHIP_POINTS: [(Level, u32); 3] =
    [(Level::High, 5), (Level::Medium, 3), (Level::Low, 1)];

pub const WALK_ON_HISTORY_POINTS: u32 = 4;
pub const NO_WALK_ON_HISTORY_POINTS: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityFactors {
    #[serde(default)]
    pub roster_depth: Option<u32>,
    #[serde(default)]
    pub years_until_starters_graduate: Option<u32>,
    #[serde(default)]
    pub scholarship_availability: Option<Level>,
    #[serde(default)]
    pub accepts_walk_ons: Option<bool>,
}

pub fn opportunity_fit(factors: &OpportunityFactors) -> u32 {
    let depth = factors
        .roster_depth
        .map(|depth| {
            points_at_or_below(
                f64::from(depth),
                &ROSTER_DEPTH_TIERS,
                ROSTER_DEPTH_FLOOR_POINTS,
            )
        })
        .unwrap_or(0);

    let turnover = factors
        .years_until_starters_graduate
        .map(|years| {
            points_at_or_below(
                f64::from(years),
                &STARTER_TURNOVER_TIERS,
                STARTER_TURNOVER_FLOOR_POINTS,
            )
        })
        .unwrap_or(0);

    let scholarships = factors
        .scholarship_availability
        .and_then(|availability| {
            SCHOLARSHIP_POINTS
                .iter()
                .find(|(level, _)| *level == availability)
                .map(|(_, points)| *points)
        })
        .unwrap_or(0);

    let walk_ons = match factors.accepts_walk_ons {
        Some(true) => WALK_ON_HISTORY_POINTS,
        Some(false) => NO_WALK_ON_HISTORY_POINTS,
        None => 0,
    };

    (depth + turnover + scholarships + walk_ons).min(OPPORTUNITY_MAX)
}
