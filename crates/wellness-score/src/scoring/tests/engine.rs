use super::common::*;
use crate::domain::{SavingsGoal, ScoreInput, SpendingEntry, WeeklySpending};
use crate::scoring::{
    compute_score, ScoreFactor, ScoreWeights, ScoringConfig, ScoringEngine, UNAVAILABLE_RANK,
};

#[test]
fn dashboard_sample_reproduces_weighted_sum() {
    let engine = engine_with(dashboard_weights());

    let outcome = engine.score(&dashboard_input());

    let budget = outcome
        .component(ScoreFactor::BudgetAdherence)
        .expect("budget component");
    assert_close(budget.raw, 100.0 * (1.0 - (2780.0 / 4300.0) / 1.25));
    assert_close(budget.weighted, budget.raw * 0.55);

    let distribution = outcome
        .component(ScoreFactor::SpendingDistribution)
        .expect("distribution component");
    assert_close(distribution.raw, (1.0 - 540.0 / 2780.0) * 100.0);

    let savings = outcome
        .component(ScoreFactor::SavingsProgress)
        .expect("savings component");
    assert_close(savings.raw, (0.7 + 0.48 + 8500.0 / 15000.0) / 3.0 * 100.0);

    let trend = outcome
        .component(ScoreFactor::WeeklyTrend)
        .expect("trend component");
    assert_close(trend.raw, 67.0);
    assert_close(trend.weighted, 67.0 * 0.7);

    assert!((outcome.raw_total - 89.1267).abs() < 1e-3);
    assert_eq!(outcome.score, Some(89));
    assert_eq!(outcome.rank, "Excellent");
}

#[test]
fn free_function_matches_engine() {
    let score = compute_score(
        &dashboard_spending(),
        4300.0,
        &dashboard_goals(),
        &dashboard_week(),
        &dashboard_weights(),
    );

    assert_eq!(score, Some(89));
}

#[test]
fn repeated_scoring_is_identical() {
    let engine = engine_with(dashboard_weights());
    let input = dashboard_input();

    let first = engine.score(&input);
    let second = engine.score(&input);

    assert_eq!(first, second);
}

#[test]
fn weights_are_not_normalized() {
    let engine = engine_with(dashboard_weights());

    let outcome = engine.score(&dashboard_input());

    let weights: Vec<f64> = outcome.components.iter().map(|c| c.weight).collect();
    assert_eq!(weights, vec![0.55, 0.05, 0.2, 0.7]);
    assert_close(dashboard_weights().total(), 1.5);
}

#[test]
fn empty_spending_counts_as_perfect_adherence_and_no_risk() {
    let engine = engine_with(light_weights());
    let input = ScoreInput {
        spending: Vec::new(),
        monthly_budget: 2500.0,
        goals: Vec::new(),
        weekly: flat_week(0.0),
    };

    let outcome = engine.score(&input);

    assert_close(
        outcome
            .component(ScoreFactor::BudgetAdherence)
            .expect("budget")
            .raw,
        100.0,
    );
    assert_close(
        outcome
            .component(ScoreFactor::SpendingDistribution)
            .expect("distribution")
            .raw,
        100.0,
    );
    assert_eq!(outcome.score, Some(60));
}

#[test]
fn non_positive_budget_short_circuits_usage() {
    let engine = engine_with(light_weights());
    for budget in [0.0, -150.0] {
        let input = ScoreInput {
            spending: vec![SpendingEntry::new("Food", 500.0)],
            monthly_budget: budget,
            goals: vec![SavingsGoal::new(50.0, 100.0)],
            weekly: flat_week(20.0),
        };

        let outcome = engine.score(&input);

        assert_eq!(outcome.score, Some(70), "budget {budget}");
    }
}

#[test]
fn empty_goal_list_scores_zero_savings() {
    let engine = engine_with(dashboard_weights());
    let mut input = dashboard_input();
    input.goals.clear();

    let outcome = engine.score(&input);

    let savings = outcome
        .component(ScoreFactor::SavingsProgress)
        .expect("savings component");
    assert_eq!(savings.raw, 0.0);
    assert_eq!(savings.weighted, 0.0);
    assert!(outcome.score.is_some());
}

#[test]
fn overrun_applies_penalty_branch() {
    let engine = engine_with(light_weights());
    let input = ScoreInput {
        spending: vec![SpendingEntry::new("Bills", 3000.0)],
        monthly_budget: 2000.0,
        goals: Vec::new(),
        weekly: flat_week(10.0),
    };

    let outcome = engine.score(&input);

    let budget = outcome
        .component(ScoreFactor::BudgetAdherence)
        .expect("budget component");
    assert_close(budget.raw, 55.0);
    assert!(budget.notes.contains("past the 125% buffer"));
}

#[test]
fn total_is_clamped_to_one_hundred() {
    let engine = ScoringEngine::default();
    let input = ScoreInput {
        spending: Vec::new(),
        monthly_budget: 3000.0,
        goals: vec![SavingsGoal::new(900.0, 500.0)],
        weekly: WeeklySpending::new([90.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0]),
    };

    let outcome = engine.score(&input);

    assert!(outcome.raw_total > 100.0);
    assert_eq!(outcome.score, Some(100));
}

#[test]
fn nan_budget_reports_unavailable() {
    let engine = ScoringEngine::default();
    let mut input = dashboard_input();
    input.monthly_budget = f64::NAN;

    let outcome = engine.score(&input);

    assert_eq!(outcome.score, None);
    assert_eq!(outcome.rank, UNAVAILABLE_RANK);
    assert!(outcome.summary().contains("unavailable"));
}

#[test]
fn nan_goal_balance_reports_unavailable() {
    let engine = ScoringEngine::default();
    let mut input = dashboard_input();
    input.goals = vec![SavingsGoal::new(f64::NAN, 5000.0)];

    let outcome = engine.score(&input);

    assert!(outcome
        .component(ScoreFactor::SavingsProgress)
        .expect("savings component")
        .raw
        .is_nan());
    assert_eq!(outcome.score, None);
    assert_eq!(outcome.rank, UNAVAILABLE_RANK);
}

#[test]
fn nan_weekly_amount_reports_unavailable() {
    let engine = ScoringEngine::default();
    let mut input = dashboard_input();
    input.weekly = WeeklySpending::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, f64::NAN]);

    let outcome = engine.score(&input);

    assert_eq!(outcome.score, None);
    assert_eq!(outcome.rank, UNAVAILABLE_RANK);

    let score = compute_score(
        &dashboard_spending(),
        4300.0,
        &dashboard_goals(),
        &input.weekly,
        &dashboard_weights(),
    );
    assert_eq!(score, None);
}

#[test]
fn risk_categories_match_normalized_names() {
    let engine = engine_with(light_weights());
    let input = ScoreInput {
        spending: vec![
            SpendingEntry::new("  shopping ", 250.0),
            SpendingEntry::new("ENTERTAINMENT", 250.0),
            SpendingEntry::new("Rent", 500.0),
        ],
        monthly_budget: 2000.0,
        goals: Vec::new(),
        weekly: flat_week(10.0),
    };

    let outcome = engine.score(&input);

    assert_close(
        outcome
            .component(ScoreFactor::SpendingDistribution)
            .expect("distribution")
            .raw,
        50.0,
    );
}

#[test]
fn custom_risk_categories_replace_defaults() {
    let config = ScoringConfig {
        risk_categories: vec!["Gambling".to_string()],
        ..ScoringConfig::with_weights(ScoreWeights {
            budget: 0.0,
            risk: 1.0,
            savings: 0.0,
            trend: 0.0,
        })
    };
    let engine = ScoringEngine::new(config);
    let input = ScoreInput {
        spending: vec![
            SpendingEntry::new("Shopping", 600.0),
            SpendingEntry::new("Gambling", 400.0),
        ],
        monthly_budget: 2000.0,
        goals: Vec::new(),
        weekly: flat_week(10.0),
    };

    let outcome = engine.score(&input);

    assert_eq!(outcome.score, Some(60));
}
