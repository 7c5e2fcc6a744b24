use chrono::{Local, NaiveDate};
use wellness_score::goals::GoalPlan;
use wellness_score::insights::{CategoryBudget, CategoryHistory, InsightsInput, MonthlySpending};
use wellness_score::{SavingsGoal, ScoreInput, SpendingEntry, WeeklySpending};

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn today_or(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

/// Month of spending, goals and week shown on the sample dashboard.
pub(crate) fn sample_input() -> ScoreInput {
    ScoreInput {
        spending: vec![
            SpendingEntry::new("Food & Dining", 750.0),
            SpendingEntry::new("Transportation", 320.0),
            SpendingEntry::new("Shopping", 360.0),
            SpendingEntry::new("Entertainment", 180.0),
            SpendingEntry::new("Bills & Utilities", 820.0),
            SpendingEntry::new("Other", 350.0),
        ],
        monthly_budget: 4300.0,
        goals: sample_plans().iter().map(|plan| plan.goal).collect(),
        weekly: WeeklySpending::new([45.0, 67.0, 23.0, 89.0, 156.0, 234.0, 78.0]),
    }
}

pub(crate) fn sample_plans() -> Vec<GoalPlan> {
    vec![
        GoalPlan::new("Emergency Fund", SavingsGoal::new(3500.0, 5000.0), 300.0),
        GoalPlan::new("Dream Vacation", SavingsGoal::new(1200.0, 2500.0), 200.0),
        GoalPlan::new("New Car Down Payment", SavingsGoal::new(8500.0, 15000.0), 500.0),
    ]
}

/// Category limits, six earlier months per category and the half-year trend.
pub(crate) fn sample_insights() -> InsightsInput {
    InsightsInput {
        category_budgets: vec![
            CategoryBudget::new("Food & Dining", 800.0),
            CategoryBudget::new("Transportation", 350.0),
            CategoryBudget::new("Shopping", 400.0),
            CategoryBudget::new("Entertainment", 150.0),
        ],
        category_history: vec![
            CategoryHistory::new(
                "Food & Dining",
                vec![450.0, 480.0, 520.0, 420.0, 380.0, 450.0],
            ),
            CategoryHistory::new(
                "Transportation",
                vec![300.0, 320.0, 350.0, 280.0, 250.0, 320.0],
            ),
            CategoryHistory::new(
                "Shopping",
                vec![200.0, 280.0, 350.0, 180.0, 150.0, 280.0],
            ),
            CategoryHistory::new(
                "Entertainment",
                vec![150.0, 180.0, 200.0, 120.0, 100.0, 180.0],
            ),
        ],
        months: [
            ("Jan", 2100.0),
            ("Feb", 2350.0),
            ("Mar", 2650.0),
            ("Apr", 2200.0),
            ("May", 2000.0),
            ("Jun", 2400.0),
        ]
        .into_iter()
        .map(|(month, spending)| MonthlySpending::new(month, spending, 2500.0))
        .collect(),
    }
}
