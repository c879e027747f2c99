use recruit_scoring::engine::phase::{
    advancement, can_advance, progress_label, MilestoneProgress, Phase, PhaseBlueprint,
};
use recruit_scoring::engine::status::{
    detailed_breakdown, score_description, status_report, ScoreBreakdown, StatusLabel,
};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn breakdown_weights_always_total_one_hundred() {
    for breakdown in [
        ScoreBreakdown::default(),
        ScoreBreakdown::new(100.0, 100.0, 100.0, 100.0),
        ScoreBreakdown::new(-5.0, 250.0, f64::NAN, 12.0),
    ] {
        let total: u32 = detailed_breakdown(&breakdown)
            .iter()
            .map(|item| u32::from(item.weight))
            .sum();
        assert_eq!(total, 100);
    }
}

#[test]
fn description_bands() {
    let expectations = [
        (0.0, StatusLabel::Critical),
        (39.0, StatusLabel::Critical),
        (40.0, StatusLabel::Poor),
        (50.0, StatusLabel::Fair),
        (60.0, StatusLabel::Good),
        (75.0, StatusLabel::Excellent),
        (100.0, StatusLabel::Excellent),
    ];
    for (score, label) in expectations {
        assert_eq!(score_description(score), label, "score {score}");
    }
}

#[test]
fn status_report_from_partial_json() {
    let breakdown: ScoreBreakdown = serde_json::from_value(serde_json::json!({
        "task_completion_rate": 92,
        "coach_interest_score": 64.4
    }))
    .expect("partial breakdown deserializes");

    let report = status_report(Some(61.0), &breakdown);
    assert_eq!(report.label, StatusLabel::Good);
    assert_eq!(report.strongest_areas, vec!["Task Completion", "Coach Interest"]);
    assert_eq!(
        report.weakest_areas,
        vec!["Interaction Frequency", "Academic Standing"]
    );

    let json = serde_json::to_value(&report).expect("serializes");
    assert_eq!(json["breakdown"][1]["status"], "needs-work");
    assert_eq!(json["label"], "good");
}

#[test]
fn advancement_gated_on_remaining_milestones() {
    let complete = MilestoneProgress {
        required: ids(&["a", "b"]),
        completed: ids(&["a", "b"]),
        remaining: vec![],
        percent_complete: 100,
    };
    let pending = MilestoneProgress {
        required: ids(&["a", "b"]),
        completed: ids(&["a"]),
        remaining: ids(&["b"]),
        percent_complete: 50,
    };
    assert!(can_advance(Some(&complete)));
    assert!(!can_advance(Some(&pending)));
    assert!(!can_advance(None));
}

#[test]
fn progress_label_format() {
    let progress = MilestoneProgress {
        required: ids(&["a", "b", "c"]),
        completed: ids(&["a"]),
        remaining: ids(&["b", "c"]),
        percent_complete: 33,
    };
    assert_eq!(progress_label(Some(&progress)), "1/3 milestones complete");
}

#[test]
fn walking_the_blueprint_reaches_the_terminal_phase() {
    let blueprint = PhaseBlueprint::standard();
    let mut phase = Phase::Freshman;
    let mut steps = 0;

    loop {
        let keys: Vec<&str> = blueprint
            .milestones_for_phase(phase)
            .iter()
            .map(|milestone| milestone.key)
            .collect();

        let halfway = MilestoneProgress::for_phase(phase, keys.iter().take(2).copied());
        assert!(!advancement(phase, Some(&halfway)).can_advance);
        assert_eq!(halfway.percent_complete, 50);

        let done = MilestoneProgress::for_phase(phase, keys.iter().copied());
        let view = advancement(phase, Some(&done));
        match view.next {
            Some(next) => {
                assert!(view.can_advance);
                phase = next;
                steps += 1;
            }
            None => {
                assert!(!view.can_advance);
                break;
            }
        }
    }

    assert_eq!(phase, Phase::Senior);
    assert_eq!(steps, 3);
}
