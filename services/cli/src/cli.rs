use crate::demo::{run_demo, DemoArgs};
use crate::score::{run_score, ScoreArgs};
use clap::{Parser, Subcommand};
use tracing::info;
use wellness_score::config::AppConfig;
use wellness_score::error::AppError;
use wellness_score::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "wellness-score",
    about = "Compute the financial wellness Smart Score from spending, budget and goal data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a JSON request file, optionally with spending imported from CSV
    Score(ScoreArgs),
    /// Score the sample dashboard data (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));
    info!(environment = ?config.environment, ?command, "wellness score starting");

    match command {
        Command::Score(args) => run_score(args, config.scoring),
        Command::Demo(args) => run_demo(args, config.scoring),
    }
}
