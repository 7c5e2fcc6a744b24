//! Smart Score: a 0-100 financial wellness score blending budget adherence,
//! risky-category concentration, savings-goal progress and the weekly
//! spending trend, plus the rank label for that score.

mod config;
mod ranking;
mod rules;

#[cfg(test)]
mod tests;

pub use config::{
    ScoreWeights, ScoringConfig, ScoringConfigError, DEFAULT_IDEAL_BUFFER, DEFAULT_RISK_CATEGORIES,
};
pub use ranking::{RankTable, RankTableError, RankThreshold, UNAVAILABLE_RANK};
pub use rules::{budget_score, distribution_score, savings_score, trend_score};

use crate::domain::{SavingsGoal, ScoreInput, SpendingEntry, WeeklySpending};
use serde::{Deserialize, Serialize};
use tracing::debug;

const MIN_SCORE: f64 = 0.0;
const MAX_SCORE: f64 = 100.0;

/// Stateless scorer that applies a [`ScoringConfig`] to caller-supplied data.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, input: &ScoreInput) -> ScoreOutcome {
        let (components, raw_total) = rules::score_input(input, &self.config);
        let score = finalize(raw_total);
        let rank = match score {
            Some(value) => self.config.ranks.rank(f64::from(value)),
            None => UNAVAILABLE_RANK,
        }
        .to_string();

        debug!(raw_total, ?score, %rank, "smart score computed");

        ScoreOutcome {
            score,
            rank,
            raw_total,
            components,
        }
    }

    /// Rank label for an arbitrary score using this engine's table.
    pub fn rank(&self, score: f64) -> &str {
        self.config.ranks.rank(score)
    }
}

/// Clamp to 0..=100 and round; `None` when the total is NaN.
fn finalize(raw_total: f64) -> Option<u8> {
    if raw_total.is_nan() {
        return None;
    }
    Some(raw_total.clamp(MIN_SCORE, MAX_SCORE).round() as u8)
}

/// Scores one set of inputs with the given weights and the default buffer,
/// risk categories and rank table.
///
/// Returns `None` only when a non-finite input leaves the total undefined.
pub fn compute_score(
    spending: &[SpendingEntry],
    monthly_budget: f64,
    goals: &[SavingsGoal],
    weekly: &WeeklySpending,
    weights: &ScoreWeights,
) -> Option<u8> {
    let input = ScoreInput {
        spending: spending.to_vec(),
        monthly_budget,
        goals: goals.to_vec(),
        weekly: *weekly,
    };
    let config = ScoringConfig::with_weights(*weights);
    let (_, raw_total) = rules::score_input(&input, &config);
    finalize(raw_total)
}

/// Label for `score` under the default rank table.
pub fn rank(score: f64) -> String {
    RankTable::default().rank(score).to_string()
}

/// Which part of the composite a component accounts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    BudgetAdherence,
    SpendingDistribution,
    SavingsProgress,
    WeeklyTrend,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::BudgetAdherence => "Budget adherence",
            ScoreFactor::SpendingDistribution => "Spending distribution",
            ScoreFactor::SavingsProgress => "Savings progress",
            ScoreFactor::WeeklyTrend => "Weekly trend",
        }
    }
}

/// Discrete contribution to the Smart Score, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    /// Sub-score before weighting, normally 0..=100.
    pub raw: f64,
    pub weight: f64,
    pub weighted: f64,
    pub notes: String,
}

impl ScoreComponent {
    pub(crate) fn new(factor: ScoreFactor, raw: f64, weight: f64, notes: String) -> Self {
        Self {
            factor,
            raw,
            weight,
            weighted: raw * weight,
            notes,
        }
    }
}

/// Scoring output: the rounded score, its rank and the per-factor trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub score: Option<u8>,
    pub rank: String,
    /// Weighted sum before clamping and rounding.
    pub raw_total: f64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreOutcome {
    pub fn component(&self, factor: ScoreFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }

    pub fn summary(&self) -> String {
        match self.score {
            Some(score) => format!("Smart Score {score} ({})", self.rank),
            None => format!("Smart Score unavailable ({})", self.rank),
        }
    }
}
