//! Insights - rule-based alerts over transactions and budgets
//!
//! Rules run in a fixed order and their output is concatenated without
//! ranking or deduplication:
//!
//! - **Spending Trend** - month-over-month category changes
//! - **Budget Alerts** - budgets close to their limit this month
//! - **Recurring Reminder** - one reminder for a recurring expense
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pocketbook_core::insights::generate_insights;
//!
//! let ctx = AnalysisContext::current(&config);
//! let insights = generate_insights(&transactions, &budgets, &ctx);
//! ```

pub mod budget_alerts;
pub mod engine;
pub mod recurring_reminder;
pub mod spending_trend;
pub mod types;

pub use budget_alerts::BudgetAlertRule;
pub use engine::{generate_insights, InsightGenerator, InsightInput, InsightRule};
pub use recurring_reminder::RecurringReminderRule;
pub use spending_trend::SpendingTrendRule;
pub use types::{capitalize, Insight, InsightKind};
