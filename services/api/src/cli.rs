use crate::demo::{run_demo, DemoArgs};
use crate::reports::{
    run_fit_report, run_phase_report, run_portfolio_report, run_status_report, FitArgs,
    PhaseArgs, PortfolioArgs, StatusArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruit_scoring::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruit Scoring",
    about = "Score school fit, portfolio balance and recruiting progress from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one school from dimension points or a JSON assessment file
    Fit(FitArgs),
    /// Analyze the balance of a school list exported as CSV
    Portfolio(PortfolioArgs),
    /// Classify an overall recruiting score and its component breakdown
    Status(StatusArgs),
    /// Show milestone progress and advancement for a recruiting phase
    Phase(PhaseArgs),
    /// Walk a sample athlete through every scoring component
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Fit(args) => run_fit_report(args),
        Command::Portfolio(args) => run_portfolio_report(args),
        Command::Status(args) => run_status_report(args),
        Command::Phase(args) => run_phase_report(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruit_scoring::engine::phase::Phase;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["recruit-scoring"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn phase_command_collects_repeated_milestones() {
        let cli = Cli::try_parse_from([
            "recruit-scoring",
            "phase",
            "--phase",
            "Junior",
            "--completed",
            "take_standardized_test",
            "--completed",
            "register_eligibility_center",
        ])
        .expect("parses");

        let Some(Command::Phase(args)) = cli.command else {
            panic!("expected phase command");
        };
        assert_eq!(args.phase, Some(Phase::Junior));
        assert_eq!(args.completed.len(), 2);
    }

    #[test]
    fn fit_command_accepts_dimension_points() {
        let cli = Cli::try_parse_from([
            "recruit-scoring",
            "fit",
            "--athletic",
            "30",
            "--academic",
            "20",
        ])
        .expect("parses");

        let Some(Command::Fit(args)) = cli.command else {
            panic!("expected fit command");
        };
        assert_eq!(args.athletic, Some(30.0));
        assert_eq!(args.personal, None);
        assert!(args.input.is_none());
    }

    #[test]
    fn rejects_unknown_phase() {
        assert!(Cli::try_parse_from(["recruit-scoring", "phase", "--phase", "grad"]).is_err());
    }
}
