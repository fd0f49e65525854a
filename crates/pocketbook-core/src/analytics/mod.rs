//! Analytics engine
//!
//! Pure, synchronous folds over an in-memory transaction list (and budgets
//! or goals where noted) into chart-ready summaries:
//!
//! - **Category breakdown** - expense totals per category
//! - **Monthly series** - expense totals for the trailing six months
//! - **Budget status** - period-to-date spend against each budget
//! - **Summary / goals** - dashboard totals and savings-goal progress
//!
//! Insights live in [`crate::insights`] and reuse the period helpers here.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pocketbook_core::analytics::{category_expenses, monthly_expenses, AnalysisContext};
//!
//! let config = EngineConfig::default();
//! let ctx = AnalysisContext::current(&config);
//! let pie = category_expenses(&transactions);
//! let bars = monthly_expenses(&transactions, &ctx);
//! ```

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod goals;
pub mod monthly;
pub mod periods;
pub mod records;
pub mod summary;
pub mod types;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::config::EngineConfig;

pub use budget::{budget_severity, budget_status};
pub use category::category_expenses;
pub use dashboard::DashboardReport;
pub use goals::{goal_progress, GoalProgress, GoalStatus};
pub use monthly::{monthly_expenses, MONTH_BUCKETS};
pub use records::SkipReason;
pub use summary::{financial_summary, recent_transactions, FinancialSummary};
pub use types::{BudgetStatus, ChartSeries, Severity, NO_EXPENSES_LABEL};

/// Reference time and settings for one analysis run
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    /// The instant treated as "now"
    pub now: NaiveDateTime,
    pub config: &'a EngineConfig,
}

impl<'a> AnalysisContext<'a> {
    /// Create a context for a fixed instant
    pub fn new(now: NaiveDateTime, config: &'a EngineConfig) -> Self {
        Self { now, config }
    }

    /// Create a context for the local wall clock
    pub fn current(config: &'a EngineConfig) -> Self {
        Self::new(Local::now().naive_local(), config)
    }

    /// The calendar date of `now`
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}
