use crate::infra::{parse_date, parse_phase, resolve_phase};
use chrono::NaiveDate;
use clap::Args;
use recruit_scoring::engine::fit::{
    assess, calculate_fit_score, fit_score_recommendation, FitAssessment, FitScoreInputs,
    FitScoreResult,
};
use recruit_scoring::engine::phase::{
    advancement, MilestoneProgress, Phase, PhaseAdvancement, PhaseBlueprint,
};
use recruit_scoring::engine::portfolio::{
    calculate_portfolio_health, PortfolioHealth, SchoolListImporter,
};
use recruit_scoring::engine::status::{status_report, ScoreBreakdown, StatusReport};
use recruit_scoring::error::AppError;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct FitArgs {
    /// JSON file holding a full fit assessment (athletic/academic/opportunity/personal factors)
    #[arg(long, conflicts_with_all = ["athletic", "academic", "opportunity", "personal"])]
    pub(crate) input: Option<PathBuf>,
    /// Athletic fit points (0-40)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) athletic: Option<f64>,
    /// Academic fit points (0-25)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) academic: Option<f64>,
    /// Opportunity fit points (0-20)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) opportunity: Option<f64>,
    /// Personal fit points (0-15)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) personal: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct PortfolioArgs {
    /// CSV export with School, Fit Score and Fit Tier columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StatusArgs {
    /// Overall recruiting score (0-100). Derived from the breakdown when omitted.
    #[arg(long)]
    pub(crate) score: Option<f64>,
    #[arg(long)]
    pub(crate) task_completion: Option<f64>,
    #[arg(long)]
    pub(crate) interaction_frequency: Option<f64>,
    #[arg(long)]
    pub(crate) coach_interest: Option<f64>,
    #[arg(long)]
    pub(crate) academic_standing: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct PhaseArgs {
    /// Current phase (freshman, sophomore, junior, senior)
    #[arg(long, value_parser = parse_phase)]
    pub(crate) phase: Option<Phase>,
    /// Derive the phase from the athlete's graduation year instead
    #[arg(long)]
    pub(crate) graduation_year: Option<i32>,
    /// Reference date for graduation-year lookups (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Completed milestone key; repeat for each milestone
    #[arg(long)]
    pub(crate) completed: Vec<String>,
}

pub(crate) fn run_fit_report(args: FitArgs) -> Result<(), AppError> {
    let result = match &args.input {
        Some(path) => assess(&load_assessment(path)?),
        None => calculate_fit_score(&fit_inputs(&args)),
    };
    render_fit_result(None, &result);
    Ok(())
}

pub(crate) fn run_portfolio_report(args: PortfolioArgs) -> Result<(), AppError> {
    let schools = SchoolListImporter::from_path(&args.csv)?;
    let health = calculate_portfolio_health(&schools);
    println!("Portfolio health ({})", args.csv.display());
    render_portfolio(&health);
    Ok(())
}

pub(crate) fn run_status_report(args: StatusArgs) -> Result<(), AppError> {
    let breakdown = ScoreBreakdown {
        task_completion_rate: args.task_completion,
        interaction_frequency_score: args.interaction_frequency,
        coach_interest_score: args.coach_interest,
        academic_standing_score: args.academic_standing,
    };
    render_status(&status_report(args.score, &breakdown));
    Ok(())
}

pub(crate) fn run_phase_report(args: PhaseArgs) -> Result<(), AppError> {
    let phase = resolve_phase(args.phase, args.graduation_year, args.today)?;
    let progress = MilestoneProgress::for_phase(phase, args.completed);
    render_phase(&advancement(phase, Some(&progress)), &progress);
    Ok(())
}

fn fit_inputs(args: &FitArgs) -> FitScoreInputs {
    FitScoreInputs {
        athletic_fit: args.athletic,
        academic_fit: args.academic,
        opportunity_fit: args.opportunity,
        personal_fit: args.personal,
    }
}

pub(crate) fn load_assessment(path: &Path) -> Result<FitAssessment, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::InvalidInput(format!("{} is not a valid fit assessment: {err}", path.display()))
    })
}

pub(crate) fn render_fit_result(school: Option<&str>, result: &FitScoreResult) {
    match school {
        Some(name) => println!("{name}: fit score {}/100 ({})", result.score, result.tier.label()),
        None => println!("Fit score {}/100 ({})", result.score, result.tier.label()),
    }
    println!(
        "  athletic {:.0}/40 | academic {:.0}/25 | opportunity {:.0}/20 | personal {:.0}/15",
        result.breakdown.athletic_fit,
        result.breakdown.academic_fit,
        result.breakdown.opportunity_fit,
        result.breakdown.personal_fit
    );
    if !result.missing_dimensions.is_empty() {
        let missing: Vec<&str> = result
            .missing_dimensions
            .iter()
            .map(|dimension| dimension.label())
            .collect();
        println!("  missing data: {}", missing.join(", "));
    }
    println!("  {}", fit_score_recommendation(result.score, result.tier));
}

pub(crate) fn render_portfolio(health: &PortfolioHealth) {
    println!("  Status: {}", health.status.label());
    println!(
        "  {} schools: {} safety, {} match, {} reach, {} unlikely",
        health.total, health.safeties, health.matches, health.reaches, health.unlikelies
    );
    for warning in &health.warnings {
        println!("  ! {warning}");
    }
}

pub(crate) fn render_status(report: &StatusReport) {
    println!(
        "Recruiting status {}/100: {}",
        report.score,
        report.label.label()
    );
    println!("  {}", report.summary);
    for item in &report.breakdown {
        println!(
            "  - {:<22} {:>3} (weight {}%, {})",
            item.label,
            item.value,
            item.weight,
            item.status.label()
        );
    }
    if !report.strongest_areas.is_empty() {
        println!("  Strongest: {}", report.strongest_areas.join(", "));
    }
    if !report.weakest_areas.is_empty() {
        println!("  Focus on: {}", report.weakest_areas.join(", "));
    }
}

pub(crate) fn render_phase(view: &PhaseAdvancement, progress: &MilestoneProgress) {
    println!("{} phase: {}", view.current_label, view.progress_label);

    let blueprint = PhaseBlueprint::standard();
    for milestone in blueprint.milestones_for_phase(view.current) {
        let mark = if progress.completed.iter().any(|key| key == milestone.key) {
            "x"
        } else {
            " "
        };
        println!("  [{mark}] {} - {}", milestone.name, milestone.guidance);
    }

    match view.next {
        Some(next) if view.can_advance => println!("  Ready to advance to {}.", next.label()),
        Some(next) => println!(
            "  {} milestone(s) left before {}.",
            view.remaining.len(),
            next.label()
        ),
        None => println!("  Final phase; no further advancement."),
    }
}
