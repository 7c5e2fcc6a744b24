use crate::domain::{SavingsGoal, ScoreInput, SpendingEntry, WeeklySpending};
use crate::scoring::{ScoreWeights, ScoringConfig, ScoringEngine};

pub(super) fn dashboard_spending() -> Vec<SpendingEntry> {
    vec![
        SpendingEntry::new("Food", 750.0),
        SpendingEntry::new("Transport", 320.0),
        SpendingEntry::new("Shopping", 360.0),
        SpendingEntry::new("Entertainment", 180.0),
        SpendingEntry::new("Bills", 820.0),
        SpendingEntry::new("Other", 350.0),
    ]
}

pub(super) fn dashboard_goals() -> Vec<SavingsGoal> {
    vec![
        SavingsGoal::new(3500.0, 5000.0),
        SavingsGoal::new(1200.0, 2500.0),
        SavingsGoal::new(8500.0, 15000.0),
    ]
}

pub(super) fn dashboard_week() -> WeeklySpending {
    WeeklySpending::new([45.0, 67.0, 23.0, 89.0, 156.0, 234.0, 78.0])
}

pub(super) fn dashboard_weights() -> ScoreWeights {
    ScoreWeights {
        budget: 0.55,
        risk: 0.05,
        savings: 0.2,
        trend: 0.7,
    }
}

pub(super) fn dashboard_input() -> ScoreInput {
    ScoreInput {
        spending: dashboard_spending(),
        monthly_budget: 4300.0,
        goals: dashboard_goals(),
        weekly: dashboard_week(),
    }
}

/// Weights that keep totals below 100 so clamping does not hide guard behavior.
pub(super) fn light_weights() -> ScoreWeights {
    ScoreWeights {
        budget: 0.3,
        risk: 0.2,
        savings: 0.2,
        trend: 0.1,
    }
}

pub(super) fn engine_with(weights: ScoreWeights) -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::with_weights(weights))
}

pub(super) fn flat_week(amount: f64) -> WeeklySpending {
    WeeklySpending::new([amount; 7])
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
