use crate::infra::today_or;
use crate::report::{print_report, ScoreReport};
use chrono::NaiveDate;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;
use wellness_score::error::AppError;
use wellness_score::import::SpendingImporter;
use wellness_score::validation::{ScoreRequest, ValidatedRequest};
use wellness_score::{ScoringConfig, ScoringEngine};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON score request (spending, monthly_budget, goals, weekly, optional weights)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// CSV of transactions (Category, Amount) replacing the request's spending
    #[arg(long)]
    pub(crate) spending_csv: Option<PathBuf>,
    /// Override the evaluation date used for goal projections (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs, config: ScoringConfig) -> Result<(), AppError> {
    let report = score_report(&args, config)?;
    print_report(&report, args.json)?;
    Ok(())
}

fn score_report(args: &ScoreArgs, mut config: ScoringConfig) -> Result<ScoreReport, AppError> {
    let ValidatedRequest {
        mut input,
        plans,
        weights,
        insights,
    } = load_request(&args.input)?;

    if let Some(path) = &args.spending_csv {
        input.spending = SpendingImporter::from_path(path)?;
        info!(
            path = %path.display(),
            categories = input.spending.len(),
            "spending replaced from CSV"
        );
    }

    if let Some(weights) = weights {
        config.weights = weights;
    }

    let engine = ScoringEngine::new(config);
    Ok(ScoreReport::build(
        &engine,
        &input,
        &plans,
        &insights,
        today_or(args.today),
    ))
}

fn load_request(path: &Path) -> Result<ValidatedRequest, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let request: ScoreRequest = serde_json::from_str(&raw)?;
    Ok(request.validate()?)
}
