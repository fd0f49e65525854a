//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `load_config` - Resolve the engine configuration
//! - `load_dataset` - Read the data file
//! - `reference_time` - Resolve the instant reports are computed for
//! - `cmd_config` - Print the effective configuration

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use pocketbook_core::{Dataset, EngineConfig};

/// Load the engine config from an explicit path, the override location, or the built-in default
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(p) => EngineConfig::load(Some(p))
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => EngineConfig::load(None).context("Failed to load config"),
    }
}

/// Load the dataset, reporting how many records had to be skipped
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let dataset = Dataset::load(path)
        .with_context(|| format!("Failed to load data file {}", path.display()))?;

    if dataset.skipped.total() > 0 {
        tracing::warn!(
            skipped = dataset.skipped.total(),
            "Some records in the data file could not be read and were skipped"
        );
    }

    Ok(dataset)
}

/// Start of the given day, or the local wall clock when no date is given
pub fn reference_time(today: Option<&str>) -> Result<NaiveDateTime> {
    match today {
        Some(s) => {
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .context("Invalid --today date format (use YYYY-MM-DD)")?;
            Ok(date.and_time(NaiveTime::MIN))
        }
        None => Ok(Local::now().naive_local()),
    }
}

pub fn cmd_config(config: &EngineConfig) -> Result<()> {
    println!();
    println!("⚙️  Engine Configuration");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Currency:             {}", config.currency);
    println!("   Month bucketing:      {}", config.month_bucketing.as_str());
    println!("   Monthly window:       {} days", config.window_days);
    println!(
        "   Budget thresholds:    warning ≥ {}%, danger ≥ {}%",
        config.budget.warning_pct, config.budget.danger_pct
    );
    println!(
        "   Insight thresholds:   trend ±{}%, budget warning ≥ {}%, danger ≥ {}%",
        config.insights.trend_threshold_pct,
        config.insights.budget_warning_pct,
        config.insights.budget_danger_pct
    );
    println!(
        "   Minimum transactions: {}",
        config.insights.min_transactions
    );
    match pocketbook_core::config::default_config_path() {
        Some(path) if path.exists() => println!("   Override file:        {}", path.display()),
        Some(path) => println!("   Override file:        {} (not present)", path.display()),
        None => {}
    }
    Ok(())
}
