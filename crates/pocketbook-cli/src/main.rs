//! Pocketbook CLI - Personal finance reports
//!
//! Usage:
//!   pocketbook dashboard --data finance_data.json   Show every report
//!   pocketbook budgets --today 2024-05-20           Budget status as of a date
//!   pocketbook insights --json                      Insights as JSON

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    if let Commands::Config = cli.command {
        return commands::cmd_config(&config);
    }

    let dataset = commands::load_dataset(&cli.data)?;
    let now = commands::reference_time(cli.today.as_deref())?;
    let ctx = pocketbook_core::AnalysisContext::new(now, &config);

    match cli.command {
        Commands::Dashboard => commands::cmd_dashboard(&dataset, &ctx, cli.json),
        Commands::Summary => commands::cmd_summary(&dataset, &ctx, cli.json),
        Commands::Categories => commands::cmd_categories(&dataset, &ctx, cli.json),
        Commands::Monthly => commands::cmd_monthly(&dataset, &ctx, cli.json),
        Commands::Budgets => commands::cmd_budgets(&dataset, &ctx, cli.json),
        Commands::Insights => commands::cmd_insights(&dataset, &ctx, cli.json),
        Commands::Goals => commands::cmd_goals(&dataset, &ctx, cli.json),
        Commands::Config => commands::cmd_config(&config),
    }
}
