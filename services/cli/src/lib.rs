mod cli;
mod demo;
mod infra;
mod report;
mod score;

use wellness_score::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
