use serde::{Deserialize, Serialize};

/// Total spend against the overall budget for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpending {
    pub month: String,
    pub spending: f64,
    pub budget: f64,
}

impl MonthlySpending {
    pub fn new(month: impl Into<String>, spending: f64, budget: f64) -> Self {
        Self {
            month: month.into(),
            spending,
            budget,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub spending: f64,
    pub budget: f64,
    /// Spending minus budget; positive means over.
    pub variance: f64,
    pub over_budget: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub points: Vec<MonthlyTrendPoint>,
    pub months_over_budget: usize,
    pub average_spending: f64,
    pub average_budget: f64,
    /// Latest month against the one before, in percent.
    pub latest_change_pct: Option<f64>,
}

/// `None` for an empty series.
pub fn monthly_trend(months: &[MonthlySpending]) -> Option<MonthlyTrend> {
    if months.is_empty() {
        return None;
    }

    let points: Vec<MonthlyTrendPoint> = months
        .iter()
        .map(|month| MonthlyTrendPoint {
            month: month.month.clone(),
            spending: month.spending,
            budget: month.budget,
            variance: month.spending - month.budget,
            over_budget: month.spending > month.budget,
        })
        .collect();

    let count = months.len() as f64;
    let latest_change_pct = match months {
        [.., previous, latest] if previous.spending > 0.0 => {
            Some((latest.spending - previous.spending) / previous.spending * 100.0)
        }
        _ => None,
    };

    Some(MonthlyTrend {
        months_over_budget: points.iter().filter(|point| point.over_budget).count(),
        average_spending: months.iter().map(|month| month.spending).sum::<f64>() / count,
        average_budget: months.iter().map(|month| month.budget).sum::<f64>() / count,
        latest_change_pct,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_year() -> Vec<MonthlySpending> {
        [
            ("Jan", 2100.0),
            ("Feb", 2350.0),
            ("Mar", 2650.0),
            ("Apr", 2200.0),
            ("May", 2000.0),
            ("Jun", 2400.0),
        ]
        .into_iter()
        .map(|(month, spending)| MonthlySpending::new(month, spending, 2500.0))
        .collect()
    }

    #[test]
    fn summarises_spending_against_budget() {
        let trend = monthly_trend(&half_year()).expect("non-empty series");

        assert_eq!(trend.points.len(), 6);
        assert_eq!(trend.months_over_budget, 1);
        assert!(trend.points[2].over_budget);
        assert_eq!(trend.points[2].variance, 150.0);
        assert_eq!(trend.points[0].variance, -400.0);
        assert!((trend.average_spending - 13700.0 / 6.0).abs() < 1e-9);
        assert_eq!(trend.average_budget, 2500.0);
        assert!((trend.latest_change_pct.expect("two months") - 20.0).abs() < 1e-9);
    }

    #[test]
    fn single_month_has_no_change() {
        let trend = monthly_trend(&[MonthlySpending::new("Jan", 2100.0, 2500.0)])
            .expect("one month");

        assert_eq!(trend.latest_change_pct, None);
    }

    #[test]
    fn empty_series_has_no_trend() {
        assert_eq!(monthly_trend(&[]), None);
    }
}
