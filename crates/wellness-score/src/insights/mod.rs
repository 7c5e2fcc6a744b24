//! Spending insights beside the Smart Score: category overspend alerts,
//! spend that jumps above its trailing monthly average, and the monthly
//! spending-vs-budget trend.

mod alerts;
mod trend;

pub use alerts::{
    AlertKind, AlertSeverity, SpendingAlert, TRAILING_MONTHS, UNUSUAL_INCREASE_PCT,
};
pub use trend::{monthly_trend, MonthlySpending, MonthlyTrend, MonthlyTrendPoint};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::SpendingEntry;

/// Spending limit for one category this month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub category: String,
    pub budget: f64,
}

impl CategoryBudget {
    pub fn new(category: impl Into<String>, budget: f64) -> Self {
        Self {
            category: category.into(),
            budget,
        }
    }
}

/// Earlier monthly amounts for a category, oldest first. The current month
/// comes from the scored spending entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryHistory {
    pub category: String,
    pub previous: Vec<f64>,
}

impl CategoryHistory {
    pub fn new(category: impl Into<String>, previous: Vec<f64>) -> Self {
        Self {
            category: category.into(),
            previous,
        }
    }
}

/// Optional data behind the insights section of a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsInput {
    #[serde(default)]
    pub category_budgets: Vec<CategoryBudget>,
    #[serde(default)]
    pub category_history: Vec<CategoryHistory>,
    #[serde(default)]
    pub months: Vec<MonthlySpending>,
}

impl InsightsInput {
    pub fn is_empty(&self) -> bool {
        self.category_budgets.is_empty()
            && self.category_history.is_empty()
            && self.months.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    /// Most severe first.
    pub alerts: Vec<SpendingAlert>,
    pub trend: Option<MonthlyTrend>,
}

pub fn generate_insights(spending: &[SpendingEntry], input: &InsightsInput) -> InsightsReport {
    let mut alerts = alerts::overspending(spending, &input.category_budgets);
    alerts.extend(alerts::unusual(spending, &input.category_history));
    alerts.sort_by(|a, b| b.severity.cmp(&a.severity).then(a.kind.cmp(&b.kind)));

    let trend = monthly_trend(&input.months);

    debug!(
        alerts = alerts.len(),
        months = input.months.len(),
        "spending insights generated"
    );

    InsightsReport { alerts, trend }
}
