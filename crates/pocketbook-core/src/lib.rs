//! Pocketbook Core Library
//!
//! Analytics for the Pocketbook personal finance tracker:
//! - Domain models for transactions, budgets and savings goals
//! - Category and monthly expense series for charts
//! - Period-aware budget status
//! - Rule-based insights (spending trends, budget alerts, recurring reminders)
//! - Engine configuration with embedded defaults
//! - Currency formatting and tolerant dataset loading
//!
//! Every analysis is a pure function of its inputs and an explicit
//! [`AnalysisContext`], so "now" can be fixed in tests.

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod insights;
pub mod models;

pub use analytics::{
    budget_status, category_expenses, financial_summary, goal_progress, monthly_expenses,
    AnalysisContext, BudgetStatus, ChartSeries, DashboardReport, FinancialSummary, GoalProgress,
    GoalStatus, Severity,
};
pub use config::{EngineConfig, MonthBucketing};
pub use dataset::{Dataset, SkippedRecords};
pub use error::{Error, Result};
pub use format::format_currency;
pub use insights::{generate_insights, Insight, InsightGenerator, InsightKind, InsightRule};
pub use models::{
    Budget, BudgetPeriod, RecordDate, RecurringInterval, SavingGoal, Transaction, TransactionKind,
};
