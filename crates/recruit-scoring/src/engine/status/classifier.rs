use super::domain::{
    AreaStatus, BreakdownItem, ScoreBreakdown, StatusComponent, StatusLabel, StatusReport,
    SCORE_BANDS, STATUS_RUBRIC,
};

/// Maps an overall score onto its band. Non-finite scores classify as zero.
pub fn score_description(score: f64) -> StatusLabel {
    let score = crate::engine::finite_or_zero(Some(score));
    SCORE_BANDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, label)| *label)
        .unwrap_or(StatusLabel::Critical)
}

/// One entry per component, in rubric order.
pub fn detailed_breakdown(breakdown: &ScoreBreakdown) -> Vec<BreakdownItem> {
    STATUS_RUBRIC
        .iter()
        .map(|rubric| {
            let value = breakdown.value(rubric.component).round() as i64;
            let status = if value >= rubric.good_threshold {
                AreaStatus::Good
            } else {
                AreaStatus::NeedsWork
            };

            BreakdownItem {
                component: rubric.component,
                label: rubric.component.label(),
                value,
                weight: rubric.weight,
                status,
            }
        })
        .collect()
}

/// Up to two "needs-work" components, lowest value first.
pub fn weakest_areas(breakdown: &ScoreBreakdown) -> Vec<&'static str> {
    let mut items: Vec<BreakdownItem> = detailed_breakdown(breakdown)
        .into_iter()
        .filter(|item| item.status == AreaStatus::NeedsWork)
        .collect();
    // sort_by_key is stable, so ties keep rubric order.
    items.sort_by_key(|item| item.value);
    items.into_iter().take(2).map(|item| item.label).collect()
}

/// Up to two "good" components, highest value first.
pub fn strongest_areas(breakdown: &ScoreBreakdown) -> Vec<&'static str> {
    let mut items: Vec<BreakdownItem> = detailed_breakdown(breakdown)
        .into_iter()
        .filter(|item| item.status == AreaStatus::Good)
        .collect();
    items.sort_by_key(|item| std::cmp::Reverse(item.value));
    items.into_iter().take(2).map(|item| item.label).collect()
}

/// Weighted overall score from the breakdown, each component held to 0..=100.
pub fn overall_score(breakdown: &ScoreBreakdown) -> i64 {
    let weighted: f64 = STATUS_RUBRIC
        .iter()
        .map(|rubric| {
            breakdown.value(rubric.component).clamp(0.0, 100.0) * f64::from(rubric.weight)
        })
        .sum();
    (weighted / 100.0).round() as i64
}

/// Bundles every projection for display. When `score` is absent the weighted
/// overall score stands in for it.
pub fn status_report(score: Option<f64>, breakdown: &ScoreBreakdown) -> StatusReport {
    let score = match score.filter(|value| value.is_finite()) {
        Some(score) => score,
        None => overall_score(breakdown) as f64,
    };
    let label = score_description(score);

    StatusReport {
        score: score.round() as i64,
        label,
        summary: label.summary(),
        breakdown: detailed_breakdown(breakdown),
        strongest_areas: strongest_areas(breakdown),
        weakest_areas: weakest_areas(breakdown),
    }
}
