use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CategoryBudget, CategoryHistory};
use crate::domain::SpendingEntry;
use crate::normalize::{category_key, display_name};

/// Earlier months averaged for the unusual-spend baseline.
pub const TRAILING_MONTHS: usize = 3;
/// Increase over the trailing average, in percent, that raises an alert.
pub const UNUSUAL_INCREASE_PCT: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Overspending,
    Unusual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
        }
    }

    fn for_overspend(over_pct: f64) -> Self {
        if over_pct >= 50.0 {
            AlertSeverity::High
        } else if over_pct >= 20.0 {
            AlertSeverity::Medium
        } else {
            AlertSeverity::Low
        }
    }

    fn for_increase(increase_pct: f64) -> Self {
        if increase_pct >= 100.0 {
            AlertSeverity::High
        } else if increase_pct >= 50.0 {
            AlertSeverity::Medium
        } else {
            AlertSeverity::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingAlert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub category: String,
    pub amount: f64,
    /// Category budget for overspending, trailing average for unusual spend.
    pub reference: f64,
    pub message: String,
}

fn spending_by_key(spending: &[SpendingEntry]) -> HashMap<String, &SpendingEntry> {
    spending
        .iter()
        .map(|entry| (category_key(&entry.category), entry))
        .collect()
}

pub(super) fn overspending(
    spending: &[SpendingEntry],
    budgets: &[CategoryBudget],
) -> Vec<SpendingAlert> {
    let by_key = spending_by_key(spending);

    budgets
        .iter()
        .filter_map(|limit| {
            if limit.budget <= 0.0 {
                debug!(category = %limit.category, "skipping category without a positive budget");
                return None;
            }
            let entry = by_key.get(&category_key(&limit.category))?;
            let over = entry.amount - limit.budget;
            if over <= 0.0 {
                return None;
            }

            let over_pct = over / limit.budget * 100.0;
            let category = display_name(&entry.category);
            Some(SpendingAlert {
                kind: AlertKind::Overspending,
                severity: AlertSeverity::for_overspend(over_pct),
                message: format!(
                    "{category} is {over:.2} over its {:.2} budget this month ({over_pct:.0}% over)",
                    limit.budget
                ),
                category,
                amount: entry.amount,
                reference: limit.budget,
            })
        })
        .collect()
}

pub(super) fn unusual(
    spending: &[SpendingEntry],
    history: &[CategoryHistory],
) -> Vec<SpendingAlert> {
    let by_key = spending_by_key(spending);

    history
        .iter()
        .filter_map(|series| {
            let entry = by_key.get(&category_key(&series.category))?;
            let window = &series.previous[series.previous.len().saturating_sub(TRAILING_MONTHS)..];
            if window.is_empty() {
                return None;
            }

            let average = window.iter().sum::<f64>() / window.len() as f64;
            if average <= 0.0 {
                return None;
            }
            let increase_pct = (entry.amount - average) / average * 100.0;
            if increase_pct < UNUSUAL_INCREASE_PCT {
                return None;
            }

            let category = display_name(&entry.category);
            Some(SpendingAlert {
                kind: AlertKind::Unusual,
                severity: AlertSeverity::for_increase(increase_pct),
                message: format!(
                    "{category} spending is {increase_pct:.0}% higher than your {}-month average of {average:.2}",
                    window.len()
                ),
                category,
                amount: entry.amount,
                reference: average,
            })
        })
        .collect()
}
