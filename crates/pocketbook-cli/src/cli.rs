//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pocketbook - Personal finance reports
#[derive(Parser)]
#[command(name = "pocketbook")]
#[command(about = "Spending breakdowns, budget status and insights for your finance data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data file (JSON object with transactions, budgets and goals)
    #[arg(long, default_value = "finance_data.json", global = true)]
    pub data: PathBuf,

    /// Engine config file
    ///
    /// Defaults to ~/.local/share/pocketbook/config/engine.toml when present,
    /// otherwise the built-in configuration.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Reference date for reports (YYYY-MM-DD); defaults to now
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every report at once
    Dashboard,

    /// Income, expenses and balance
    Summary,

    /// Expense totals per category
    Categories,

    /// Expense totals for the last six months
    Monthly,

    /// Spending against each budget in its current period
    Budgets,

    /// Spending trends, budget alerts and reminders
    Insights,

    /// Savings-goal progress
    Goals,

    /// Print the effective engine configuration
    Config,
}
