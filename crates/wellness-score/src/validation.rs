//! Boundary checks that turn loosely-typed requests (JSON files, CLI input)
//! into a [`ScoreInput`] the engine can trust.
//!
//! Degenerate but well-formed numbers (a zero budget, no spending, no goals)
//! pass through; the engine handles them. Malformed data fails here.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{SavingsGoal, ScoreInput, SpendingEntry, WeeklySpending, DAYS_PER_WEEK};
use crate::goals::GoalPlan;
use crate::insights::InsightsInput;
use crate::normalize::{category_key, display_name};
use crate::scoring::ScoreWeights;

/// Validation errors raised before scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("spending entry {index} has an empty category")]
    EmptyCategory { index: usize },
    #[error("category '{category}' appears more than once")]
    DuplicateCategory { category: String },
    #[error("{field} must be a finite number, found {value}")]
    NonFinite { field: String, value: f64 },
    #[error("{field} must not be negative, found {value}")]
    Negative { field: String, value: f64 },
    #[error("weekly spending must contain exactly {expected} daily amounts, found {found}")]
    WeeklyLength { expected: usize, found: usize },
}

/// Untrusted scoring request as supplied at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub spending: Vec<SpendingRow>,
    pub monthly_budget: f64,
    #[serde(default)]
    pub goals: Vec<GoalRow>,
    pub weekly: Vec<f64>,
    #[serde(default)]
    pub weights: Option<ScoreWeights>,
    #[serde(default)]
    pub insights: InsightsInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingRow {
    pub category: String,
    pub amount: f64,
}

/// A goal as described by the caller; projection fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRow {
    #[serde(default)]
    pub name: Option<String>,
    pub current: f64,
    pub target: f64,
    #[serde(default)]
    pub monthly_contribution: Option<f64>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// Request after validation: scoring input plus the goal plans used for projections.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub input: ScoreInput,
    pub plans: Vec<GoalPlan>,
    pub weights: Option<ScoreWeights>,
    pub insights: InsightsInput,
}

impl ScoreRequest {
    pub fn validate(self) -> Result<ValidatedRequest, ValidationError> {
        let spending = validate_spending(self.spending)?;
        finite("monthly_budget", self.monthly_budget)?;

        let mut goals = Vec::with_capacity(self.goals.len());
        let mut plans = Vec::with_capacity(self.goals.len());
        for (index, row) in self.goals.into_iter().enumerate() {
            let plan = validate_goal(index, row)?;
            goals.push(plan.goal);
            plans.push(plan);
        }

        let weekly = validate_weekly(self.weekly)?;

        if let Some(weights) = &self.weights {
            for (name, value) in weights.named() {
                non_negative(&format!("weights.{name}"), value)?;
            }
        }

        let insights = validate_insights(self.insights)?;

        Ok(ValidatedRequest {
            input: ScoreInput {
                spending,
                monthly_budget: self.monthly_budget,
                goals,
                weekly,
            },
            plans,
            weights: self.weights,
            insights,
        })
    }
}

pub(crate) fn validate_spending(
    rows: Vec<SpendingRow>,
) -> Result<Vec<SpendingEntry>, ValidationError> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut entries = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let category = display_name(&row.category);
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory { index });
        }
        if seen.insert(category_key(&category), category.clone()).is_some() {
            return Err(ValidationError::DuplicateCategory { category });
        }
        non_negative(&format!("spending.{category}"), row.amount)?;
        entries.push(SpendingEntry::new(category, row.amount));
    }

    Ok(entries)
}

fn validate_goal(index: usize, row: GoalRow) -> Result<GoalPlan, ValidationError> {
    let label = row
        .name
        .as_deref()
        .map(display_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("goal {}", index + 1));

    non_negative(&format!("goals.{label}.current"), row.current)?;
    finite(&format!("goals.{label}.target"), row.target)?;
    let monthly_contribution = match row.monthly_contribution {
        Some(amount) => {
            non_negative(&format!("goals.{label}.monthly_contribution"), amount)?;
            amount
        }
        None => 0.0,
    };

    Ok(GoalPlan {
        name: label,
        goal: SavingsGoal::new(row.current, row.target),
        monthly_contribution,
        deadline: row.deadline,
    })
}

fn validate_weekly(days: Vec<f64>) -> Result<WeeklySpending, ValidationError> {
    for (day, amount) in days.iter().enumerate() {
        non_negative(&format!("weekly[{day}]"), *amount)?;
    }
    WeeklySpending::try_from(days).map_err(|err| ValidationError::WeeklyLength {
        expected: DAYS_PER_WEEK,
        found: err.found,
    })
}

fn validate_insights(mut insights: InsightsInput) -> Result<InsightsInput, ValidationError> {
    for (index, limit) in insights.category_budgets.iter_mut().enumerate() {
        limit.category = display_name(&limit.category);
        if limit.category.is_empty() {
            return Err(ValidationError::EmptyCategory { index });
        }
        non_negative(&format!("insights.category_budgets.{}", limit.category), limit.budget)?;
    }
    for (index, series) in insights.category_history.iter_mut().enumerate() {
        series.category = display_name(&series.category);
        if series.category.is_empty() {
            return Err(ValidationError::EmptyCategory { index });
        }
        for (month, amount) in series.previous.iter().enumerate() {
            non_negative(
                &format!("insights.category_history.{}[{month}]", series.category),
                *amount,
            )?;
        }
    }
    for month in &insights.months {
        non_negative(&format!("insights.months.{}.spending", month.month), month.spending)?;
        non_negative(&format!("insights.months.{}.budget", month.month), month.budget)?;
    }
    Ok(insights)
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite {
            field: field.to_string(),
            value,
        })
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::CategoryBudget;

    fn request() -> ScoreRequest {
        serde_json::from_str(
            r#"{
                "spending": [
                    {"category": "Food", "amount": 750},
                    {"category": " Shopping ", "amount": 360}
                ],
                "monthly_budget": 4300,
                "goals": [
                    {"name": "Emergency Fund", "current": 3500, "target": 5000,
                     "monthly_contribution": 300, "deadline": "2026-12-31"},
                    {"current": 1200, "target": 2500}
                ],
                "weekly": [45, 67, 23, 89, 156, 234, 78]
            }"#,
        )
        .expect("request parses")
    }

    #[test]
    fn valid_request_produces_input_and_plans() {
        let validated = request().validate().expect("valid");

        assert_eq!(validated.input.spending[1].category, "Shopping");
        assert_eq!(validated.input.goals.len(), 2);
        assert_eq!(validated.plans[0].name, "Emergency Fund");
        assert_eq!(validated.plans[1].name, "goal 2");
        assert_eq!(validated.plans[1].monthly_contribution, 0.0);
        assert_eq!(validated.input.weekly.last(), 78.0);
        assert!(validated.weights.is_none());
    }

    #[test]
    fn duplicate_categories_are_rejected_case_insensitively() {
        let mut req = request();
        req.spending.push(SpendingRow {
            category: "food".to_string(),
            amount: 10.0,
        });

        let err = req.validate().expect_err("duplicate");
        assert_eq!(
            err,
            ValidationError::DuplicateCategory {
                category: "food".to_string()
            }
        );
    }

    #[test]
    fn blank_category_is_rejected() {
        let mut req = request();
        req.spending[0].category = "   ".to_string();

        assert_eq!(
            req.validate(),
            Err(ValidationError::EmptyCategory { index: 0 })
        );
    }

    #[test]
    fn negative_amount_is_rejected() {
        let mut req = request();
        req.spending[0].amount = -5.0;

        let err = req.validate().expect_err("negative");
        assert!(err.to_string().contains("spending.Food must not be negative"));
    }

    #[test]
    fn non_finite_budget_is_rejected() {
        let mut req = request();
        req.monthly_budget = f64::INFINITY;

        assert!(matches!(
            req.validate(),
            Err(ValidationError::NonFinite { .. })
        ));
    }

    #[test]
    fn zero_budget_and_empty_lists_pass_through() {
        let mut req = request();
        req.monthly_budget = 0.0;
        req.spending.clear();
        req.goals.clear();

        let validated = req.validate().expect("degenerate but well formed");
        assert_eq!(validated.input.monthly_budget, 0.0);
        assert!(validated.input.spending.is_empty());
    }

    #[test]
    fn short_week_is_rejected() {
        let mut req = request();
        req.weekly.truncate(5);

        assert_eq!(
            req.validate(),
            Err(ValidationError::WeeklyLength {
                expected: 7,
                found: 5
            })
        );
    }

    #[test]
    fn negative_weights_are_rejected() {
        let mut req = request();
        req.weights = Some(ScoreWeights {
            budget: 0.5,
            risk: -0.1,
            savings: 0.2,
            trend: 0.7,
        });

        let err = req.validate().expect_err("negative weight");
        assert!(err.to_string().starts_with("weights.risk"));
    }

    #[test]
    fn insights_section_is_optional_and_checked() {
        let validated = request().validate().expect("valid");
        assert!(validated.insights.is_empty());

        let mut req = request();
        req.insights = serde_json::from_str(
            r#"{
                "category_budgets": [{"category": " Shopping ", "budget": 300}],
                "months": [{"month": "Jun", "spending": 2400, "budget": -1}]
            }"#,
        )
        .expect("insights parse");

        let err = req.validate().expect_err("negative month budget");
        assert!(err
            .to_string()
            .starts_with("insights.months.Jun.budget must not be negative"));
    }

    #[test]
    fn insight_categories_are_trimmed() {
        let mut req = request();
        req.insights.category_budgets = vec![CategoryBudget::new(" Shopping ", 300.0)];

        let validated = req.validate().expect("valid");

        assert_eq!(validated.insights.category_budgets[0].category, "Shopping");
    }

    #[test]
    fn missing_fields_fail_to_parse() {
        let err = serde_json::from_str::<ScoreRequest>(r#"{"spending": [], "weekly": []}"#)
            .expect_err("monthly_budget missing");
        assert!(err.to_string().contains("monthly_budget"));
    }
}
