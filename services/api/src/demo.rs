use crate::infra::parse_date;
use crate::reports::{render_fit_result, render_phase, render_portfolio, render_status};
use chrono::{Local, NaiveDate};
use clap::Args;
use recruit_scoring::engine::fit::dimensions::{
    AcademicFactors, AthleticFactors, CampusSize, CostSensitivity, Level, OpportunityFactors,
    PersonalFactors, Sport,
};
use recruit_scoring::engine::fit::{assess, FitAssessment, FitTier};
use recruit_scoring::engine::phase::{advancement, MilestoneProgress, Phase};
use recruit_scoring::engine::portfolio::{calculate_portfolio_health, SchoolEntry};
use recruit_scoring::engine::status::{status_report, ScoreBreakdown};
use recruit_scoring::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Graduation year of the sample athlete. Defaults to two years out.
    #[arg(long)]
    pub(crate) graduation_year: Option<i32>,
    /// Override the reporting date (defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the per-school fit breakdowns and only print the portfolio summary.
    #[arg(long)]
    pub(crate) summary_only: bool,
}

struct DemoSchool {
    name: &'static str,
    assessment: FitAssessment,
    /// Tier the family has already settled on, overriding the computed one.
    tier_override: Option<FitTier>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let graduation_year = args
        .graduation_year
        .unwrap_or_else(|| default_graduation_year(today));
    let phase = Phase::for_graduation_year(graduation_year, today);

    println!("Recruit scoring demo (as of {today})");
    println!("Sample athlete: right-handed pitcher, 3.5 GPA, 1240 SAT, Ohio\n");

    let mut entries = Vec::new();
    for school in demo_schools() {
        let result = assess(&school.assessment);
        if !args.summary_only {
            render_fit_result(Some(school.name), &result);
            println!();
        }
        entries.push(SchoolEntry {
            name: Some(school.name.to_string()),
            fit_score: f64::from(result.score),
            fit_tier: school.tier_override,
        });
    }

    println!("Portfolio health");
    render_portfolio(&calculate_portfolio_health(&entries));

    println!();
    let breakdown = ScoreBreakdown::new(82.0, 55.0, 68.0, 74.0);
    render_status(&status_report(None, &breakdown));

    println!();
    let completed = demo_completed_milestones(phase);
    let progress = MilestoneProgress::for_phase(phase, completed.iter().copied());
    render_phase(&advancement(phase, Some(&progress)), &progress);

    Ok(())
}

/// Two academic years out, so the demo lands in a mid-recruiting phase.
fn default_graduation_year(today: NaiveDate) -> i32 {
    Phase::academic_year_end(today) + 2
}

fn demo_completed_milestones(phase: Phase) -> &'static [&'static str] {
    match phase {
        Phase::Freshman => &["create_athlete_profile", "set_academic_baseline"],
        Phase::Sophomore => &["record_highlight_video", "build_target_list", "email_coaches"],
        Phase::Junior => &["register_eligibility_center"],
        Phase::Senior => &["take_official_visits", "submit_applications"],
    }
}

fn pitcher(coach_interest: Level, positions_needed: &[&str]) -> AthleticFactors {
    AthleticFactors {
        position: Some("RHP".to_string()),
        positions_needed: positions_needed.iter().map(|p| p.to_string()).collect(),
        coach_interest: Some(coach_interest),
        sport: Some(Sport::Baseball),
        height_inches: Some(74.0),
        weight_lbs: Some(190.0),
        velocity_mph: Some(86.0),
    }
}

fn academics(school_avg_gpa: f64, school_avg_sat: f64, offers_major: bool) -> AcademicFactors {
    let offered = if offers_major {
        vec!["Exercise Science".to_string(), "Business".to_string()]
    } else {
        vec!["Engineering".to_string()]
    };
    AcademicFactors {
        gpa: Some(3.5),
        school_avg_gpa: Some(school_avg_gpa),
        sat: Some(1240.0),
        school_avg_sat: Some(school_avg_sat),
        target_major: Some("Exercise Science".to_string()),
        offered_majors: offered,
        ..AcademicFactors::default()
    }
}

fn personal(school_state: &str, enrollment: f64, annual_cost: f64) -> PersonalFactors {
    PersonalFactors {
        home_state: Some("OH".to_string()),
        school_state: Some(school_state.to_string()),
        campus_size_preference: Some(CampusSize::Medium),
        enrollment: Some(enrollment),
        cost_sensitivity: Some(CostSensitivity::Medium),
        annual_cost: Some(annual_cost),
        is_priority: false,
        major_strength: Some(6.0),
    }
}

fn demo_schools() -> Vec<DemoSchool> {
    vec![
        DemoSchool {
            name: "Buckeye State",
            assessment: FitAssessment {
                athletic: Some(pitcher(Level::High, &["RHP", "C"])),
                academic: Some(academics(3.4, 1200.0, true)),
                opportunity: Some(OpportunityFactors {
                    roster_depth: Some(2),
                    years_until_starters_graduate: Some(1),
                    scholarship_availability: Some(Level::Medium),
                    accepts_walk_ons: Some(true),
                }),
                personal: Some(personal("OH", 12_000.0, 28_000.0)),
            },
            tier_override: None,
        },
        DemoSchool {
            name: "Lakeshore College",
            assessment: FitAssessment {
                athletic: Some(pitcher(Level::Medium, &["LHP"])),
                academic: Some(academics(3.3, 1150.0, true)),
                opportunity: Some(OpportunityFactors {
                    roster_depth: Some(1),
                    years_until_starters_graduate: Some(2),
                    scholarship_availability: Some(Level::Low),
                    accepts_walk_ons: Some(true),
                }),
                personal: Some(personal("MI", 3_200.0, 24_000.0)),
            },
            tier_override: Some(FitTier::Safety),
        },
        DemoSchool {
            name: "Pacific Tech",
            assessment: FitAssessment {
                athletic: Some(pitcher(Level::Low, &["SS", "CF"])),
                academic: Some(academics(3.9, 1420.0, false)),
                opportunity: Some(OpportunityFactors {
                    roster_depth: Some(5),
                    years_until_starters_graduate: Some(3),
                    scholarship_availability: Some(Level::Low),
                    accepts_walk_ons: Some(false),
                }),
                personal: Some(personal("CA", 31_000.0, 68_000.0)),
            },
            tier_override: None,
        },
        DemoSchool {
            name: "Riverside University",
            assessment: FitAssessment {
                athletic: Some(pitcher(Level::Medium, &["RHP"])),
                academic: Some(academics(3.6, 1300.0, true)),
                opportunity: None,
                personal: Some(personal("IN", 9_000.0, 46_000.0)),
            },
            tier_override: None,
        },
    ]
}
