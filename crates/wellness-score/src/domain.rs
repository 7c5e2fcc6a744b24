use serde::{Deserialize, Serialize};

/// Number of daily samples in a weekly spending series.
pub const DAYS_PER_WEEK: usize = 7;

/// One category's spend for the scoring period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingEntry {
    pub category: String,
    pub amount: f64,
}

impl SpendingEntry {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Current balance against a savings target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub current: f64,
    pub target: f64,
}

impl SavingsGoal {
    pub fn new(current: f64, target: f64) -> Self {
        Self { current, target }
    }

    /// Funded share of the target, capped at 1.0. Non-positive targets count as unfunded.
    /// A NaN ratio is returned as is so the score it feeds stays undefined.
    pub fn funded_ratio(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        let ratio = self.current / self.target;
        if ratio.is_nan() {
            return ratio;
        }
        ratio.min(1.0)
    }

    pub fn is_funded(&self) -> bool {
        self.target > 0.0 && self.current >= self.target
    }
}

/// Daily spend for the trailing week, first day first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeeklySpending([f64; DAYS_PER_WEEK]);

impl WeeklySpending {
    pub const fn new(days: [f64; DAYS_PER_WEEK]) -> Self {
        Self(days)
    }

    pub fn days(&self) -> &[f64; DAYS_PER_WEEK] {
        &self.0
    }

    pub fn first(&self) -> f64 {
        self.0[0]
    }

    pub fn last(&self) -> f64 {
        self.0[DAYS_PER_WEEK - 1]
    }

    /// End-of-week spend minus start-of-week spend.
    pub fn week_change(&self) -> f64 {
        self.last() - self.first()
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn daily_average(&self) -> f64 {
        self.total() / DAYS_PER_WEEK as f64
    }
}

impl TryFrom<Vec<f64>> for WeeklySpending {
    type Error = WeeklyLengthError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let found = values.len();
        let days: [f64; DAYS_PER_WEEK] = values
            .try_into()
            .map_err(|_| WeeklyLengthError { found })?;
        Ok(Self(days))
    }
}

impl From<WeeklySpending> for Vec<f64> {
    fn from(value: WeeklySpending) -> Self {
        value.0.to_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("weekly spending must contain exactly 7 daily amounts, found {found}")]
pub struct WeeklyLengthError {
    pub found: usize,
}

/// Everything the engine needs for one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub spending: Vec<SpendingEntry>,
    pub monthly_budget: f64,
    pub goals: Vec<SavingsGoal>,
    pub weekly: WeeklySpending,
}

impl ScoreInput {
    pub fn total_spending(&self) -> f64 {
        total_spending(&self.spending)
    }
}

pub fn total_spending(spending: &[SpendingEntry]) -> f64 {
    spending.iter().map(|entry| entry.amount).sum()
}
