//! Savings goal projections: progress, months left at the current
//! contribution rate, and whether that lands before the deadline.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::SavingsGoal;

/// Completion this many months before the deadline counts as ahead of schedule.
pub const AHEAD_MARGIN_MONTHS: u32 = 3;

/// A savings goal plus the contribution plan used to project it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    pub name: String,
    pub goal: SavingsGoal,
    pub monthly_contribution: f64,
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Complete,
    Ahead,
    OnTrack,
    Behind,
    NotStarted,
}

impl GoalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            GoalStatus::Complete => "Complete",
            GoalStatus::Ahead => "Ahead of Schedule",
            GoalStatus::OnTrack => "On Track",
            GoalStatus::Behind => "Behind Schedule",
            GoalStatus::NotStarted => "Not Started",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub name: String,
    /// Not capped, so over-funded goals report more than 100.
    pub progress_pct: f64,
    /// `None` when the goal never completes at the current contribution.
    pub months_remaining: Option<u32>,
    pub projected_completion: Option<NaiveDate>,
    pub status: GoalStatus,
}

impl GoalPlan {
    pub fn new(name: impl Into<String>, goal: SavingsGoal, monthly_contribution: f64) -> Self {
        Self {
            name: name.into(),
            goal,
            monthly_contribution,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn progress_pct(&self) -> f64 {
        if self.goal.target <= 0.0 {
            return 0.0;
        }
        self.goal.current / self.goal.target * 100.0
    }

    pub fn months_remaining(&self) -> Option<u32> {
        if self.goal.target <= 0.0 {
            return None;
        }
        if self.goal.is_funded() {
            return Some(0);
        }
        if self.monthly_contribution <= 0.0 {
            return None;
        }

        let months = ((self.goal.target - self.goal.current) / self.monthly_contribution).ceil();
        Some(months.min(f64::from(u32::MAX)) as u32)
    }

    pub fn project(&self, today: NaiveDate) -> GoalProjection {
        let months_remaining = self.months_remaining();
        let projected_completion =
            months_remaining.and_then(|months| today.checked_add_months(Months::new(months)));
        let status = self.status(projected_completion);

        GoalProjection {
            name: self.name.clone(),
            progress_pct: self.progress_pct(),
            months_remaining,
            projected_completion,
            status,
        }
    }

    fn status(&self, projected_completion: Option<NaiveDate>) -> GoalStatus {
        if self.goal.is_funded() {
            return GoalStatus::Complete;
        }
        if self.goal.target <= 0.0
            || (self.goal.current <= 0.0 && self.monthly_contribution <= 0.0)
        {
            return GoalStatus::NotStarted;
        }

        let Some(completion) = projected_completion else {
            return GoalStatus::Behind;
        };
        let Some(deadline) = self.deadline else {
            return GoalStatus::OnTrack;
        };

        if completion > deadline {
            return GoalStatus::Behind;
        }

        match deadline.checked_sub_months(Months::new(AHEAD_MARGIN_MONTHS)) {
            Some(ahead_cutoff) if completion <= ahead_cutoff => GoalStatus::Ahead,
            _ => GoalStatus::OnTrack,
        }
    }
}

/// Unfunded goal expected to complete soonest at its current contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextMilestone {
    pub name: String,
    pub months_remaining: u32,
}

/// Totals across every savings goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPortfolio {
    pub goal_count: usize,
    pub completed: usize,
    pub total_saved: f64,
    pub total_target: f64,
    pub monthly_contributions: f64,
    /// Saved over target across all goals, 0 when no target is set.
    pub overall_progress_pct: f64,
    pub next_milestone: Option<NextMilestone>,
}

impl GoalPortfolio {
    pub fn from_plans(plans: &[GoalPlan]) -> Self {
        let total_saved: f64 = plans.iter().map(|plan| plan.goal.current).sum();
        let total_target: f64 = plans
            .iter()
            .map(|plan| plan.goal.target)
            .filter(|target| *target > 0.0)
            .sum();
        let overall_progress_pct = if total_target > 0.0 {
            total_saved / total_target * 100.0
        } else {
            0.0
        };

        let next_milestone = plans
            .iter()
            .filter(|plan| !plan.goal.is_funded())
            .filter_map(|plan| {
                plan.months_remaining().map(|months| NextMilestone {
                    name: plan.name.clone(),
                    months_remaining: months,
                })
            })
            .min_by_key(|milestone| milestone.months_remaining);

        Self {
            goal_count: plans.len(),
            completed: plans.iter().filter(|plan| plan.goal.is_funded()).count(),
            total_saved,
            total_target,
            monthly_contributions: plans.iter().map(|plan| plan.monthly_contribution).sum(),
            overall_progress_pct,
            next_milestone,
        }
    }
}
