use serde::{Deserialize, Serialize};

use super::ranking::RankTable;

/// Budget overrun still treated as "on plan" before the steep penalty branch applies.
pub const DEFAULT_IDEAL_BUFFER: f64 = 1.25;

/// Discretionary categories whose share of spend lowers the distribution score.
pub const DEFAULT_RISK_CATEGORIES: [&str; 2] = ["Entertainment", "Shopping"];

/// Relative contribution of each sub-score. Weights are not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub budget: f64,
    pub risk: f64,
    pub savings: f64,
    pub trend: f64,
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.budget + self.risk + self.savings + self.trend
    }

    pub(crate) fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("budget", self.budget),
            ("risk", self.risk),
            ("savings", self.savings),
            ("trend", self.trend),
        ]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            budget: 0.55,
            risk: 0.05,
            savings: 0.2,
            trend: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("ideal buffer must be a finite number above 0, found {value}")]
    NonPositiveBuffer { value: f64 },
    #[error("weight '{name}' must be a finite, non-negative number, found {value}")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("at least one risk category is required")]
    EmptyRiskCategories,
}

/// Tuning applied by the [`ScoringEngine`](super::ScoringEngine).
///
/// Deserialized configs go through [`ScoringConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScoringConfig")]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub ideal_buffer: f64,
    pub risk_categories: Vec<String>,
    #[serde(default)]
    pub ranks: RankTable,
}

#[derive(Deserialize)]
struct RawScoringConfig {
    weights: ScoreWeights,
    ideal_buffer: f64,
    risk_categories: Vec<String>,
    #[serde(default)]
    ranks: RankTable,
}

impl TryFrom<RawScoringConfig> for ScoringConfig {
    type Error = ScoringConfigError;

    fn try_from(raw: RawScoringConfig) -> Result<Self, Self::Error> {
        let config = Self {
            weights: raw.weights,
            ideal_buffer: raw.ideal_buffer,
            risk_categories: raw.risk_categories,
            ranks: raw.ranks,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            ideal_buffer: DEFAULT_IDEAL_BUFFER,
            risk_categories: DEFAULT_RISK_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            ranks: RankTable::default(),
        }
    }
}

impl ScoringConfig {
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    /// Rejects tunings the rules cannot evaluate: a buffer of 0 or less
    /// divides by zero, and negative weights invert a factor.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        if !self.ideal_buffer.is_finite() || self.ideal_buffer <= 0.0 {
            return Err(ScoringConfigError::NonPositiveBuffer {
                value: self.ideal_buffer,
            });
        }
        for (name, value) in self.weights.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringConfigError::InvalidWeight { name, value });
            }
        }
        if self
            .risk_categories
            .iter()
            .all(|name| name.trim().is_empty())
        {
            return Err(ScoringConfigError::EmptyRiskCategories);
        }
        Ok(())
    }
}
