use super::{normalize_text, points_at_or_above, positive, rounded_gap};
use serde::{Deserialize, Serialize};

pub const ACADEMIC_MAX: u32 = 25;

/// Athlete GPA minus school average GPA.
pub const GPA_GAP_TIERS: [(f64, u32); 3] = [(0.0, 10), (-0.2, 8), (-0.5, 5)];
/// Absolute GPA, used when the school average is unknown.
pub const GPA_ABSOLUTE_TIERS: [(f64, u32); 3] = [(3.7, 10), (3.3, 8), (3.0, 5)];
pub const GPA_FLOOR_POINTS: u32 = 2;

pub const SAT_GAP_TIERS: [(f64, u32); 3] = [(0.0, 7), (-50.0, 5), (-100.0, 3)];
pub const ACT_GAP_TIERS: [(f64, u32); 3] = [(0.0, 7), (-2.0, 5), (-4.0, 3)];
pub const TEST_FLOOR_POINTS: u32 = 1;

pub const MAJOR_OFFERED_POINTS: u32 = 5;
pub const MAJOR_NOT_OFFERED_POINTS: u32 = 2;

/// Credited unconditionally: every program is assumed to offer academic
/// support to athletes.
pub const ACADEMIC_SUPPORT_POINTS: u32 = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicFactors {
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub school_avg_gpa: Option<f64>,
    #[serde(default)]
    pub sat: Option<f64>,
    #[serde(default)]
    pub school_avg_sat: Option<f64>,
    #[serde(default)]
    pub act: Option<f64>,
    #[serde(default)]
    pub school_avg_act: Option<f64>,
    #[serde(default)]
    pub target_major: Option<String>,
    #[serde(default)]
    pub offered_majors: Vec<String>,
}

pub fn academic_fit(factors: &AcademicFactors) -> u32 {
    let total = gpa_points(factors)
        + test_points(factors)
        + major_points(factors)
        + ACADEMIC_SUPPORT_POINTS;
    total.min(ACADEMIC_MAX)
}

fn gpa_points(factors: &AcademicFactors) -> u32 {
    let Some(gpa) = positive(factors.gpa) else {
        return 0;
    };

    match positive(factors.school_avg_gpa) {
        Some(average) => points_at_or_above(
            rounded_gap(gpa, average),
            &GPA_GAP_TIERS,
            GPA_FLOOR_POINTS,
        ),
        None => points_at_or_above(gpa, &GPA_ABSOLUTE_TIERS, GPA_FLOOR_POINTS),
    }
}

/// SAT wins when both SAT figures are known; ACT is only consulted otherwise.
fn test_points(factors: &AcademicFactors) -> u32 {
    if let (Some(sat), Some(average)) = (positive(factors.sat), positive(factors.school_avg_sat))
    {
        let gap = rounded_gap(sat, average);
        return points_at_or_above(gap, &SAT_GAP_TIERS, TEST_FLOOR_POINTS);
    }

    if let (Some(act), Some(average)) = (positive(factors.act), positive(factors.school_avg_act))
    {
        let gap = rounded_gap(act, average);
        return points_at_or_above(gap, &ACT_GAP_TIERS, TEST_FLOOR_POINTS);
    }

    0
}

fn major_points(factors: &AcademicFactors) -> u32 {
    let Some(target) = factors
        .target_major
        .as_deref()
        .map(normalize_text)
        .filter(|target| !target.is_empty())
    else {
        return 0;
    };

    let offered: Vec<String> = factors
        .offered_majors
        .iter()
        .map(|major| normalize_text(major))
        .filter(|major| !major.is_empty())
        .collect();
    if offered.is_empty() {
        return 0;
    }

    let available = offered.iter().any(|major| {
        *major == target || major.contains(target.as_str()) || target.contains(major.as_str())
    });

    if available {
        MAJOR_OFFERED_POINTS
    } else {
        MAJOR_NOT_OFFERED_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allotments_sum_to_ceiling() {
        let top = GPA_GAP_TIERS[0].1
            + SAT_GAP_TIERS[0].1
            + MAJOR_OFFERED_POINTS
            + ACADEMIC_SUPPORT_POINTS;
        assert_eq!(top, ACADEMIC_MAX);

        let factors = AcademicFactors {
            gpa: Some(3.9),
            school_avg_gpa: Some(3.6),
            sat: Some(1400.0),
            school_avg_sat: Some(1300.0),
            target_major: Some("Biology".to_string()),
            offered_majors: vec!["Biology".to_string(), "History".to_string()],
            ..AcademicFactors::default()
        };
        assert_eq!(academic_fit(&factors), ACADEMIC_MAX);
    }

    #[test]
    fn support_baseline_is_always_credited() {
        assert_eq!(academic_fit(&AcademicFactors::default()), ACADEMIC_SUPPORT_POINTS);
    }

    #[test]
    fn gpa_gap_tiers_against_school_average() {
        let cases = [
            (3.5, 3.5, 10),
            (3.35, 3.5, 8),
            (3.3, 3.5, 8),
            (3.0, 3.2, 8),
            (3.5, 3.7, 8),
            (3.6, 3.8, 8),
            (3.29, 3.5, 5),
            (3.0, 3.5, 5),
            (3.1, 3.5, 5),
            (2.8, 3.5, 2),
        ];
        for (gpa, average, expected) in cases {
            let factors = AcademicFactors {
                gpa: Some(gpa),
                school_avg_gpa: Some(average),
                ..AcademicFactors::default()
            };
            assert_eq!(
                academic_fit(&factors) - ACADEMIC_SUPPORT_POINTS,
                expected,
                "gpa {gpa} against {average}"
            );
        }
    }

    #[test]
    fn test_score_gaps_include_their_floor() {
        let sat_cases = [(1200.0, 7), (1150.0, 5), (1149.0, 3), (1100.0, 3), (1099.0, 1)];
        for (sat, expected) in sat_cases {
            let factors = AcademicFactors {
                sat: Some(sat),
                school_avg_sat: Some(1200.0),
                ..AcademicFactors::default()
            };
            assert_eq!(
                academic_fit(&factors) - ACADEMIC_SUPPORT_POINTS,
                expected,
                "sat {sat}"
            );
        }

        let act_cases = [(25.0, 7), (23.0, 5), (21.0, 3), (20.9, 1)];
        for (act, expected) in act_cases {
            let factors = AcademicFactors {
                act: Some(act),
                school_avg_act: Some(25.0),
                ..AcademicFactors::default()
            };
            assert_eq!(
                academic_fit(&factors) - ACADEMIC_SUPPORT_POINTS,
                expected,
                "act {act}"
            );
        }
    }

    #[test]
    fn gpa_falls_back_to_absolute_table() {
        let cases = [(3.8, 10), (3.4, 8), (3.0, 5), (2.5, 2)];
        for (gpa, expected) in cases {
            let factors = AcademicFactors {
                gpa: Some(gpa),
                ..AcademicFactors::default()
            };
            assert_eq!(academic_fit(&factors) - ACADEMIC_SUPPORT_POINTS, expected);
        }
    }

    #[test]
    fn sat_is_preferred_over_act() {
        let factors = AcademicFactors {
            sat: Some(1120.0),
            school_avg_sat: Some(1200.0),
            act: Some(34.0),
            school_avg_act: Some(25.0),
            ..AcademicFactors::default()
        };
        assert_eq!(academic_fit(&factors) - ACADEMIC_SUPPORT_POINTS, 3);
    }

    #[test]
    fn act_used_when_sat_pair_incomplete() {
        let factors = AcademicFactors {
            sat: Some(1350.0),
            act: Some(24.0),
            school_avg_act: Some(27.0),
            ..AcademicFactors::default()
        };
        assert_eq!(academic_fit(&factors) - ACADEMIC_SUPPORT_POINTS, 3);

        let far_below = AcademicFactors {
            act: Some(18.0),
            school_avg_act: Some(27.0),
            ..AcademicFactors::default()
        };
        assert_eq!(academic_fit(&far_below) - ACADEMIC_SUPPORT_POINTS, TEST_FLOOR_POINTS);
    }

    #[test]
    fn major_substring_matches_earn_full_credit() {
        let mut factors = AcademicFactors {
            target_major: Some("computer science".to_string()),
            offered_majors: vec!["Computer Science and Engineering".to_string()],
            ..AcademicFactors::default()
        };
        assert_eq!(
            academic_fit(&factors) - ACADEMIC_SUPPORT_POINTS,
            MAJOR_OFFERED_POINTS
        );

        factors.offered_majors = vec!["Nursing".to_string()];
        assert_eq!(
            academic_fit(&factors) - ACADEMIC_SUPPORT_POINTS,
            MAJOR_NOT_OFFERED_POINTS
        );

        factors.offered_majors.clear();
        assert_eq!(academic_fit(&factors), ACADEMIC_SUPPORT_POINTS);
    }
}
