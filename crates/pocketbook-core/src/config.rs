//! Engine configuration
//!
//! Thresholds and display settings used by the analytics engine. Defaults
//! match the tracker's long-standing behavior.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for override (explicit path, or ~/.local/share/pocketbook/config/engine.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::format_currency;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/engine.toml");

/// How the monthly expense series assigns its six buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthBucketing {
    /// Bucket `i` is anchored `i * 30` days before the first of the current
    /// month. Near month boundaries this can skip or repeat a month.
    #[default]
    ThirtyDay,
    /// Bucket `i` is the calendar month `i` months before the current one
    Calendar,
}

impl MonthBucketing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThirtyDay => "thirty_day",
            Self::Calendar => "calendar",
        }
    }
}

/// Severity cut-offs for budget status records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetThresholds {
    /// Utilization (percent) at which a budget turns to warning
    pub warning_pct: f64,
    /// Utilization (percent) at which a budget turns to danger
    pub danger_pct: f64,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self {
            warning_pct: 80.0,
            danger_pct: 100.0,
        }
    }
}

/// Cut-offs used by the insight rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// Below this many transactions only the "not enough data" insight is produced
    pub min_transactions: usize,
    /// Month-over-month change (percent, either direction) worth reporting
    pub trend_threshold_pct: f64,
    pub budget_warning_pct: f64,
    pub budget_danger_pct: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            min_transactions: 3,
            trend_threshold_pct: 20.0,
            budget_warning_pct: 80.0,
            budget_danger_pct: 90.0,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Display currency code (presentation only)
    pub currency: String,
    pub month_bucketing: MonthBucketing,
    /// Lookback window for the monthly series, in days
    pub window_days: i64,
    pub budget: BudgetThresholds,
    pub insights: InsightThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            month_bucketing: MonthBucketing::default(),
            window_days: 180,
            budget: BudgetThresholds::default(),
            insights: InsightThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration (override first, then embedded default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = match override_path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::NotFound(format!(
                        "config file {}",
                        path.display()
                    )));
                }
                fs::read_to_string(path)?
            }
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    tracing::debug!(path = %path.display(), "Using config override");
                    fs::read_to_string(&path)?
                }
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded defaults
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_days < 0 {
            return Err(Error::InvalidData(format!(
                "window_days must not be negative (got {})",
                self.window_days
            )));
        }
        if self.budget.warning_pct > self.budget.danger_pct {
            return Err(Error::InvalidData(format!(
                "budget.warning_pct ({}) exceeds budget.danger_pct ({})",
                self.budget.warning_pct, self.budget.danger_pct
            )));
        }
        if self.insights.budget_warning_pct > self.insights.budget_danger_pct {
            return Err(Error::InvalidData(format!(
                "insights.budget_warning_pct ({}) exceeds insights.budget_danger_pct ({})",
                self.insights.budget_warning_pct, self.insights.budget_danger_pct
            )));
        }
        if self.insights.trend_threshold_pct < 0.0 {
            return Err(Error::InvalidData(
                "insights.trend_threshold_pct must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Format an amount in the configured currency
    pub fn format_amount(&self, amount: f64) -> String {
        format_currency(amount, &self.currency)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("pocketbook").join("config").join("engine.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_matches_default() {
        let embedded = EngineConfig::embedded().unwrap();
        assert_eq!(embedded, EngineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml_str(
            r#"
currency = "EUR"

[insights]
trend_threshold_pct = 10.0
"#,
        )
        .unwrap();

        assert_eq!(config.currency, "EUR");
        assert_eq!(config.insights.trend_threshold_pct, 10.0);
        assert_eq!(config.insights.min_transactions, 3);
        assert_eq!(config.month_bucketing, MonthBucketing::ThirtyDay);
        assert_eq!(config.budget, BudgetThresholds::default());
    }

    #[test]
    fn test_calendar_bucketing() {
        let config = EngineConfig::from_toml_str(r#"month_bucketing = "calendar""#).unwrap();
        assert_eq!(config.month_bucketing, MonthBucketing::Calendar);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let result = EngineConfig::from_toml_str(
            r#"
[budget]
warning_pct = 120.0
danger_pct = 100.0
"#,
        );
        assert!(matches!(result, Err(Error::InvalidData(_))));

        let result = EngineConfig::from_toml_str("window_days = -1");
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = EngineConfig::from_toml_str("currency = ");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "currency = \"JPY\"").unwrap();

        let config = EngineConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.currency, "JPY");
        assert_eq!(config.format_amount(1234.9), "¥1,234");
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = EngineConfig::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
