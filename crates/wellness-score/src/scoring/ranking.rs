use serde::{Deserialize, Serialize};

/// Label reported when a score could not be computed.
pub const UNAVAILABLE_RANK: &str = "Unavailable";

/// Lowest score that earns `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankThreshold {
    pub minimum: f64,
    pub label: String,
}

impl RankThreshold {
    pub fn new(minimum: f64, label: impl Into<String>) -> Self {
        Self {
            minimum,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankTableError {
    #[error("rank table must contain at least one threshold")]
    Empty,
    #[error("rank threshold '{label}' has a non-finite minimum")]
    NonFiniteMinimum { label: String },
    #[error("rank threshold '{label}' must have a non-empty label")]
    BlankLabel { label: String },
    #[error("rank thresholds must be sorted by descending minimum ('{previous}' before '{next}')")]
    NotDescending { previous: String, next: String },
    #[error("rank table needs a catch-all threshold with minimum 0, lowest is {lowest}")]
    MissingCatchAll { lowest: f64 },
}

/// Descending score thresholds mapped to qualitative labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RankThreshold>", into = "Vec<RankThreshold>")]
pub struct RankTable {
    thresholds: Vec<RankThreshold>,
}

impl RankTable {
    pub fn new(thresholds: Vec<RankThreshold>) -> Result<Self, RankTableError> {
        let lowest = match thresholds.last() {
            Some(threshold) => threshold.minimum,
            None => return Err(RankTableError::Empty),
        };

        for threshold in &thresholds {
            if !threshold.minimum.is_finite() {
                return Err(RankTableError::NonFiniteMinimum {
                    label: threshold.label.clone(),
                });
            }
            if threshold.label.trim().is_empty() {
                return Err(RankTableError::BlankLabel {
                    label: threshold.label.clone(),
                });
            }
        }

        for pair in thresholds.windows(2) {
            if pair[0].minimum <= pair[1].minimum {
                return Err(RankTableError::NotDescending {
                    previous: pair[0].label.clone(),
                    next: pair[1].label.clone(),
                });
            }
        }

        if lowest > 0.0 {
            return Err(RankTableError::MissingCatchAll { lowest });
        }

        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &[RankThreshold] {
        &self.thresholds
    }

    /// Label for `score`, or [`UNAVAILABLE_RANK`] when the score is NaN.
    pub fn rank(&self, score: f64) -> &str {
        if score.is_nan() {
            return UNAVAILABLE_RANK;
        }

        self.thresholds
            .iter()
            .find(|threshold| score >= threshold.minimum)
            .or_else(|| self.thresholds.last())
            .map(|threshold| threshold.label.as_str())
            .unwrap_or(UNAVAILABLE_RANK)
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self {
            thresholds: vec![
                RankThreshold::new(80.0, "Excellent"),
                RankThreshold::new(65.0, "Good"),
                RankThreshold::new(50.0, "Fair"),
                RankThreshold::new(0.0, "Needs Attention"),
            ],
        }
    }
}

impl TryFrom<Vec<RankThreshold>> for RankTable {
    type Error = RankTableError;

    fn try_from(thresholds: Vec<RankThreshold>) -> Result<Self, Self::Error> {
        Self::new(thresholds)
    }
}

impl From<RankTable> for Vec<RankThreshold> {
    fn from(table: RankTable) -> Self {
        table.thresholds
    }
}
