use crate::scoring::{ScoreWeights, ScoringConfig, DEFAULT_IDEAL_BUFFER, DEFAULT_RISK_CATEGORIES};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Developers get targets and colour; CI and production get one plain line per event.
    pub fn log_format(self) -> LogFormat {
        match self {
            Self::Development => LogFormat::Full,
            Self::Test | Self::Production => LogFormat::Compact,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = ScoreWeights::default();
        let weights = ScoreWeights {
            budget: non_negative_var("SCORE_WEIGHT_BUDGET", defaults.budget)?,
            risk: non_negative_var("SCORE_WEIGHT_RISK", defaults.risk)?,
            savings: non_negative_var("SCORE_WEIGHT_SAVINGS", defaults.savings)?,
            trend: non_negative_var("SCORE_WEIGHT_TREND", defaults.trend)?,
        };

        let ideal_buffer = non_negative_var("SCORE_IDEAL_BUFFER", DEFAULT_IDEAL_BUFFER)?;
        if ideal_buffer == 0.0 {
            return Err(ConfigError::InvalidNumber {
                key: "SCORE_IDEAL_BUFFER",
                value: "0".to_string(),
            });
        }

        let risk_categories = match env::var("SCORE_RISK_CATEGORIES") {
            Ok(raw) => {
                let categories: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
                if categories.is_empty() {
                    return Err(ConfigError::EmptyRiskCategories);
                }
                categories
            }
            Err(_) => DEFAULT_RISK_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig {
                log_level,
                format: environment.log_format(),
            },
            scoring: ScoringConfig {
                weights,
                ideal_buffer,
                risk_categories,
                ..ScoringConfig::default()
            },
        })
    }
}

fn non_negative_var(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber { key, value: raw }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Targets and ANSI colour.
    Full,
    /// No target, no colour.
    Compact,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    EmptyRiskCategories,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => write!(
                f,
                "{key} must be a finite, non-negative number (found '{value}')"
            ),
            ConfigError::EmptyRiskCategories => {
                write!(f, "SCORE_RISK_CATEGORIES must name at least one category")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
