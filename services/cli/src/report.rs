use chrono::NaiveDate;
use serde::Serialize;
use wellness_score::goals::{GoalPlan, GoalPortfolio, GoalProjection};
use wellness_score::insights::{generate_insights, InsightsInput, InsightsReport, MonthlyTrend};
use wellness_score::{ScoreInput, ScoreOutcome, ScoringEngine};

#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) evaluated_on: NaiveDate,
    pub(crate) total_spending: f64,
    pub(crate) monthly_budget: f64,
    pub(crate) daily_average: f64,
    pub(crate) outcome: ScoreOutcome,
    pub(crate) goals: Vec<GoalProjection>,
    pub(crate) portfolio: GoalPortfolio,
    pub(crate) insights: InsightsReport,
}

impl ScoreReport {
    pub(crate) fn build(
        engine: &ScoringEngine,
        input: &ScoreInput,
        plans: &[GoalPlan],
        insights: &InsightsInput,
        today: NaiveDate,
    ) -> Self {
        Self {
            evaluated_on: today,
            total_spending: input.total_spending(),
            monthly_budget: input.monthly_budget,
            daily_average: input.weekly.daily_average(),
            outcome: engine.score(input),
            goals: plans.iter().map(|plan| plan.project(today)).collect(),
            portfolio: GoalPortfolio::from_plans(plans),
            insights: generate_insights(&input.spending, insights),
        }
    }

    pub(crate) fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub(crate) fn render_text(&self) -> String {
        let mut lines = Vec::new();
        lines.push(self.outcome.summary());
        lines.push(format!("Evaluated {}", self.evaluated_on));
        lines.push(format!(
            "Spending {:.2} of {:.2} budget | daily average this week {:.2}",
            self.total_spending, self.monthly_budget, self.daily_average
        ));

        lines.push(String::new());
        lines.push("Score components".to_string());
        for component in &self.outcome.components {
            lines.push(format!(
                "- {}: {:.1} x {:.2} = {:.2} ({})",
                component.factor.label(),
                component.raw,
                component.weight,
                component.weighted,
                component.notes
            ));
        }
        lines.push(format!("Weighted total {:.2}", self.outcome.raw_total));

        if self.goals.is_empty() {
            lines.push(String::new());
            lines.push("Savings goals: none".to_string());
        } else {
            lines.push(String::new());
            lines.push("Savings goals".to_string());
            lines.push(self.portfolio_line());
            for goal in &self.goals {
                let eta = match (goal.months_remaining, goal.projected_completion) {
                    (Some(0), _) => "funded".to_string(),
                    (Some(months), Some(date)) => format!("{months} month(s), around {date}"),
                    (Some(months), None) => format!("{months} month(s)"),
                    (None, _) => "no completion date at current contribution".to_string(),
                };
                lines.push(format!(
                    "- {}: {:.0}% complete | {} | {}",
                    goal.name,
                    goal.progress_pct,
                    eta,
                    goal.status.label()
                ));
            }
        }

        lines.push(String::new());
        if self.insights.alerts.is_empty() {
            lines.push("Alerts: none".to_string());
        } else {
            lines.push("Alerts".to_string());
            for alert in &self.insights.alerts {
                lines.push(format!("- [{}] {}", alert.severity.label(), alert.message));
            }
        }

        if let Some(trend) = &self.insights.trend {
            lines.push(String::new());
            lines.extend(trend_lines(trend));
        }

        lines.join("\n")
    }

    fn portfolio_line(&self) -> String {
        let portfolio = &self.portfolio;
        let mut line = format!(
            "Saved {:.2} of {:.2} ({:.0}%) | {}/{} complete | {:.2} per month",
            portfolio.total_saved,
            portfolio.total_target,
            portfolio.overall_progress_pct,
            portfolio.completed,
            portfolio.goal_count,
            portfolio.monthly_contributions
        );
        if let Some(next) = &portfolio.next_milestone {
            line.push_str(&format!(
                " | next milestone: {} in {} month(s)",
                next.name, next.months_remaining
            ));
        }
        line
    }
}

fn trend_lines(trend: &MonthlyTrend) -> Vec<String> {
    let mut lines = vec!["Monthly spending vs budget".to_string()];
    for point in &trend.points {
        lines.push(format!(
            "- {}: {:.2} of {:.2} ({:+.2}{})",
            point.month,
            point.spending,
            point.budget,
            point.variance,
            if point.over_budget { ", over" } else { "" }
        ));
    }

    let mut summary = format!(
        "{}/{} month(s) over budget | average {:.2} of {:.2}",
        trend.months_over_budget,
        trend.points.len(),
        trend.average_spending,
        trend.average_budget
    );
    if let Some(change) = trend.latest_change_pct {
        summary.push_str(&format!(" | latest change {change:+.1}%"));
    }
    lines.push(summary);
    lines
}

pub(crate) fn print_report(report: &ScoreReport, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}
