use std::collections::HashSet;

use tracing::debug;

use super::config::ScoringConfig;
use super::{ScoreComponent, ScoreFactor};
use crate::domain::{SavingsGoal, ScoreInput, SpendingEntry};
use crate::normalize::category_key;

/// Budget score where the penalty branch starts, before clamping.
const OVERRUN_BASE: f64 = 80.0;
/// Points lost per 1.0 of budget usage beyond the ideal buffer.
const OVERRUN_PENALTY: f64 = 100.0;
/// Lowest trend score a spending increase can produce.
const TREND_FLOOR: f64 = 60.0;
const MAX_SUB_SCORE: f64 = 100.0;

/// `numerator / denominator`, or 0 when the denominator is zero or negative.
/// A NaN denominator still divides so the NaN surfaces in the outcome.
pub(crate) fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Unweighted budget adherence for a given usage ratio, clamped to 0..=100.
///
/// The two branches do not meet: at `usage == ideal_buffer` the first yields 0
/// while the overrun branch would start at 80. Usage just past the buffer
/// therefore scores higher than usage exactly at it.
pub fn budget_score(budget_usage: f64, ideal_buffer: f64) -> f64 {
    let raw = if budget_usage <= ideal_buffer {
        MAX_SUB_SCORE * (1.0 - budget_usage / ideal_buffer)
    } else {
        OVERRUN_BASE - (budget_usage - ideal_buffer) * OVERRUN_PENALTY
    };
    raw.clamp(0.0, MAX_SUB_SCORE)
}

/// Unweighted distribution score for the share of spend in risk categories.
pub fn distribution_score(risk_ratio: f64) -> f64 {
    (1.0 - risk_ratio) * MAX_SUB_SCORE
}

/// Unweighted savings score: mean funded ratio across goals, 0 with no goals.
pub fn savings_score(goals: &[SavingsGoal]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    let sum: f64 = goals.iter().map(SavingsGoal::funded_ratio).sum();
    sum / goals.len() as f64 * MAX_SUB_SCORE
}

/// Unweighted trend score from the end-minus-start change of the week.
/// NaN passes through; the floor would otherwise hide it.
pub fn trend_score(week_change: f64) -> f64 {
    if week_change.is_nan() {
        return week_change;
    }
    if week_change < 0.0 {
        MAX_SUB_SCORE
    } else {
        (MAX_SUB_SCORE - week_change).max(TREND_FLOOR)
    }
}

pub(crate) fn risk_spend(spending: &[SpendingEntry], risk_categories: &[String]) -> f64 {
    let risky: HashSet<String> = risk_categories
        .iter()
        .map(|name| category_key(name))
        .collect();

    spending
        .iter()
        .filter(|entry| risky.contains(&category_key(&entry.category)))
        .map(|entry| entry.amount)
        .sum()
}

pub(crate) fn score_input(
    input: &ScoreInput,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, f64) {
    let weights = &config.weights;
    let total_spending = input.total_spending();

    if input.monthly_budget <= 0.0 {
        debug!(
            monthly_budget = input.monthly_budget,
            "non-positive monthly budget, treating budget usage as 0"
        );
    }
    if total_spending == 0.0 {
        debug!("no spending recorded, treating risk ratio as 0");
    }
    if input.goals.is_empty() {
        debug!("no savings goals supplied, savings sub-score is 0");
    }

    let budget_usage = guarded_ratio(total_spending, input.monthly_budget);
    let budget_raw = budget_score(budget_usage, config.ideal_buffer);
    let budget = ScoreComponent::new(
        ScoreFactor::BudgetAdherence,
        budget_raw,
        weights.budget,
        if budget_usage <= config.ideal_buffer {
            format!(
                "spent {:.0}% of budget, within the {:.0}% buffer",
                budget_usage * 100.0,
                config.ideal_buffer * 100.0
            )
        } else {
            format!(
                "spent {:.0}% of budget, past the {:.0}% buffer",
                budget_usage * 100.0,
                config.ideal_buffer * 100.0
            )
        },
    );

    let risky = risk_spend(&input.spending, &config.risk_categories);
    let risk_ratio = guarded_ratio(risky, total_spending);
    let distribution = ScoreComponent::new(
        ScoreFactor::SpendingDistribution,
        distribution_score(risk_ratio),
        weights.risk,
        format!(
            "{:.1}% of spending in {}",
            risk_ratio * 100.0,
            config.risk_categories.join(", ")
        ),
    );

    let savings_raw = savings_score(&input.goals);
    let funded = input.goals.iter().filter(|goal| goal.is_funded()).count();
    let savings = ScoreComponent::new(
        ScoreFactor::SavingsProgress,
        savings_raw,
        weights.savings,
        format!(
            "average goal progress {:.1}% ({funded}/{} funded)",
            savings_raw,
            input.goals.len()
        ),
    );

    let week_change = input.weekly.week_change();
    let trend = ScoreComponent::new(
        ScoreFactor::WeeklyTrend,
        trend_score(week_change),
        weights.trend,
        if week_change < 0.0 {
            format!("spending fell by {:.2} across the week", -week_change)
        } else {
            format!("spending rose by {:.2} across the week", week_change)
        },
    );

    let components = vec![budget, distribution, savings, trend];
    let total = components.iter().map(|component| component.weighted).sum();

    (components, total)
}
