use super::{normalize_text, points_at_or_above, positive, Level};
use serde::{Deserialize, Serialize};

pub const ATHLETIC_MAX: u32 = 40;

pub const POSITION_EXACT_POINTS: u32 = 15;
pub const POSITION_GROUP_POINTS: u32 = 8;
pub const POSITION_NO_MATCH_POINTS: u32 = 3;

pub const COACH_INTEREST_POINTS: [(Level, u32); 3] =
    [(Level::High, 10), (Level::Medium, 6), (Level::Low, 2)];

pub const MEASUREMENT_IN_RANGE_POINTS: u32 = 8;
pub const MEASUREMENT_BORDERLINE_POINTS: u32 = 4;
/// Fraction of a range bound a measurement may miss by and still count as
/// borderline.
pub const MEASUREMENT_BORDERLINE_TOLERANCE: f64 = 0.05;

/// Throwing or exit velocity (mph) floors; anything slower earns
/// [`VELOCITY_FLOOR_POINTS`].
pub const VELOCITY_TIERS: [(f64, u32); 3] = [(90.0, 7), (85.0, 5), (80.0, 3)];
pub const VELOCITY_FLOOR_POINTS: u32 = 1;

/// Position codes that share a depth chart group.
const POSITION_GROUPS: &[&[&str]] = &[
    &["p", "rhp", "lhp", "sp", "rp", "pitcher"],
    &["c", "catcher"],
    &["1b", "2b", "3b", "ss", "if", "inf", "mif", "cif", "infield"],
    &["lf", "cf", "rf", "of", "outfield"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Baseball,
    Softball,
    Football,
    Basketball,
    Soccer,
    Volleyball,
}

/// Typical college roster ranges: (sport, height inches, weight lbs).
const MEASUREMENT_RANGES: [(Sport, (f64, f64), (f64, f64)); 6] = [
    (Sport::Baseball, (68.0, 77.0), (160.0, 230.0)),
    (Sport::Softball, (62.0, 72.0), (120.0, 190.0)),
    (Sport::Football, (68.0, 79.0), (170.0, 320.0)),
    (Sport::Basketball, (70.0, 84.0), (160.0, 260.0)),
    (Sport::Soccer, (64.0, 75.0), (130.0, 190.0)),
    (Sport::Volleyball, (66.0, 80.0), (130.0, 200.0)),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthleticFactors {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub positions_needed: Vec<String>,
    #[serde(default)]
    pub coach_interest: Option<Level>,
    #[serde(default)]
    pub sport: Option<Sport>,
    #[serde(default)]
    pub height_inches: Option<f64>,
    #[serde(default)]
    pub weight_lbs: Option<f64>,
    #[serde(default)]
    pub velocity_mph: Option<f64>,
}

pub fn athletic_fit(factors: &AthleticFactors) -> u32 {
    let total = position_points(factors)
        + coach_interest_points(factors.coach_interest)
        + measurement_points(factors)
        + velocity_points(factors.velocity_mph);
    total.min(ATHLETIC_MAX)
}

fn position_points(factors: &AthleticFactors) -> u32 {
    let Some(position) = factors
        .position
        .as_deref()
        .map(normalize_text)
        .filter(|position| !position.is_empty())
    else {
        return 0;
    };

    let needed: Vec<String> = factors
        .positions_needed
        .iter()
        .map(|needed| normalize_text(needed))
        .filter(|needed| !needed.is_empty())
        .collect();
    if needed.is_empty() {
        return 0;
    }

    if needed.iter().any(|needed| *needed == position) {
        return POSITION_EXACT_POINTS;
    }

    let group = position_group(&position);
    if group.is_some() && needed.iter().any(|needed| position_group(needed) == group) {
        POSITION_GROUP_POINTS
    } else {
        POSITION_NO_MATCH_POINTS
    }
}

fn position_group(position: &str) -> Option<usize> {
    POSITION_GROUPS
        .iter()
        .position(|group| group.contains(&position))
}

fn coach_interest_points(interest: Option<Level>) -> u32 {
    interest
        .and_then(|interest| {
            COACH_INTEREST_POINTS
                .iter()
                .find(|(level, _)| *level == interest)
                .map(|(_, points)| *points)
        })
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Plausibility {
    InRange,
    Borderline,
    OutOfRange,
}

fn measurement_points(factors: &AthleticFactors) -> u32 {
    let Some(sport) = factors.sport else {
        return 0;
    };
    let Some((_, height_range, weight_range)) = MEASUREMENT_RANGES
        .iter()
        .find(|(candidate, _, _)| *candidate == sport)
    else {
        return 0;
    };

    // The least plausible measurement decides the tier.
    let worst = [
        positive(factors.height_inches).map(|height| plausibility(height, *height_range)),
        positive(factors.weight_lbs).map(|weight| plausibility(weight, *weight_range)),
    ]
    .into_iter()
    .flatten()
    .max();

    match worst {
        Some(Plausibility::InRange) => MEASUREMENT_IN_RANGE_POINTS,
        Some(Plausibility::Borderline) => MEASUREMENT_BORDERLINE_POINTS,
        Some(Plausibility::OutOfRange) | None => 0,
    }
}

fn plausibility(value: f64, (low, high): (f64, f64)) -> Plausibility {
    if (low..=high).contains(&value) {
        Plausibility::InRange
    } else if value >= low * (1.0 - MEASUREMENT_BORDERLINE_TOLERANCE)
        && value <= high * (1.0 + MEASUREMENT_BORDERLINE_TOLERANCE)
    {
        Plausibility::Borderline
    } else {
        Plausibility::OutOfRange
    }
}

fn velocity_points(velocity: Option<f64>) -> u32 {
    positive(velocity)
        .map(|mph| points_at_or_above(mph, &VELOCITY_TIERS, VELOCITY_FLOOR_POINTS))
        .unwrap_or(0)
}
