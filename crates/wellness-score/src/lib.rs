//! Financial wellness Smart Score.
//!
//! The [`scoring`] engine is pure and synchronous; the remaining modules
//! cover the edges around it: request validation, spending import, goal
//! projection, spending insights, configuration and telemetry.

pub mod config;
pub mod domain;
pub mod error;
pub mod goals;
pub mod import;
pub mod insights;
mod normalize;
pub mod scoring;
pub mod telemetry;
pub mod validation;

pub use domain::{SavingsGoal, ScoreInput, SpendingEntry, WeeklySpending};
pub use scoring::{compute_score, rank, ScoreOutcome, ScoreWeights, ScoringConfig, ScoringEngine};
