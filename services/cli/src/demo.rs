use crate::infra::{sample_input, sample_insights, sample_plans, today_or};
use crate::report::{print_report, ScoreReport};
use chrono::NaiveDate;
use clap::Args;
use wellness_score::error::AppError;
use wellness_score::{ScoringConfig, ScoringEngine};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date used for goal projections (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs, config: ScoringConfig) -> Result<(), AppError> {
    let report = demo_report(&args, config);
    print_report(&report, args.json)?;
    Ok(())
}

fn demo_report(args: &DemoArgs, config: ScoringConfig) -> ScoreReport {
    let engine = ScoringEngine::new(config);
    ScoreReport::build(
        &engine,
        &sample_input(),
        &sample_plans(),
        &sample_insights(),
        today_or(args.today),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_score::insights::{AlertKind, AlertSeverity};
    use wellness_score::scoring::ScoreFactor;

    fn args() -> DemoArgs {
        DemoArgs {
            today: NaiveDate::from_ymd_opt(2026, 1, 15),
            json: false,
        }
    }

    #[test]
    fn demo_scores_the_sample_dashboard() {
        let report = demo_report(&args(), ScoringConfig::default());

        assert_eq!(report.outcome.score, Some(89));
        assert_eq!(report.outcome.rank, "Excellent");
        assert_eq!(report.total_spending, 2780.0);
        assert_eq!(report.goals.len(), 3);
        assert!(report
            .outcome
            .component(ScoreFactor::SpendingDistribution)
            .is_some());
    }

    #[test]
    fn text_report_lists_components_and_goals() {
        let text = demo_report(&args(), ScoringConfig::default()).render_text();

        assert!(text.starts_with("Smart Score 89 (Excellent)"));
        assert!(text.contains("- Weekly trend: 67.0 x 0.70 = 46.90"));
        assert!(text.contains("- Dream Vacation: 48% complete | 7 month(s), around 2026-08-15"));
    }

    #[test]
    fn demo_report_carries_goal_overview_and_alerts() {
        let report = demo_report(&args(), ScoringConfig::default());

        assert_eq!(report.portfolio.total_saved, 13200.0);
        assert_eq!(report.portfolio.monthly_contributions, 1000.0);

        let alerts: Vec<(AlertKind, AlertSeverity, &str)> = report
            .insights
            .alerts
            .iter()
            .map(|alert| (alert.kind, alert.severity, alert.category.as_str()))
            .collect();
        assert_eq!(
            alerts,
            vec![
                (AlertKind::Overspending, AlertSeverity::Medium, "Entertainment"),
                (AlertKind::Unusual, AlertSeverity::Medium, "Food & Dining"),
                (AlertKind::Unusual, AlertSeverity::Medium, "Shopping"),
                (AlertKind::Unusual, AlertSeverity::Low, "Entertainment"),
            ]
        );

        let text = report.render_text();
        assert!(text.contains(
            "Saved 13200.00 of 22500.00 (59%) | 0/3 complete | 1000.00 per month | next milestone: Emergency Fund in 5 month(s)"
        ));
        assert!(text.contains(
            "- [medium] Entertainment is 30.00 over its 150.00 budget this month (20% over)"
        ));
        assert!(text.contains("- Mar: 2650.00 of 2500.00 (+150.00, over)"));
        assert!(text.contains("1/6 month(s) over budget | average 2283.33 of 2500.00 | latest change +20.0%"));
    }

    #[test]
    fn json_report_round_trips_through_serde() {
        let json = demo_report(&args(), ScoringConfig::default())
            .to_json()
            .expect("serializes");

        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["outcome"]["score"], 89);
        assert_eq!(value["outcome"]["components"][0]["factor"], "budget_adherence");
        assert_eq!(value["goals"][2]["status"], "on_track");
        assert_eq!(value["portfolio"]["goal_count"], 3);
        assert_eq!(value["insights"]["alerts"][0]["kind"], "overspending");
    }
}
