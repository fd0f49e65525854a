//! Core types for insights

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analytics::Severity;

/// What an insight is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Too few transactions to analyze
    NotEnoughData,
    /// Category spending rose against last month
    SpendingIncrease,
    /// Category spending fell against last month
    SpendingDecrease,
    /// Month-to-date spend is close to or past a budget
    BudgetAtRisk,
    /// Month-to-date spend is approaching a budget
    BudgetApproachingLimit,
    /// A recurring expense exists
    RecurringExpense,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotEnoughData => "not_enough_data",
            Self::SpendingIncrease => "spending_increase",
            Self::SpendingDecrease => "spending_decrease",
            Self::BudgetAtRisk => "budget_at_risk",
            Self::BudgetApproachingLimit => "budget_approaching_limit",
            Self::RecurringExpense => "recurring_expense",
        }
    }

    /// Icon tag for the presentation layer
    pub fn icon(&self) -> &'static str {
        match self {
            Self::NotEnoughData => "info-circle",
            Self::SpendingIncrease => "arrow-up",
            Self::SpendingDecrease => "arrow-down",
            Self::BudgetAtRisk => "exclamation-triangle",
            Self::BudgetApproachingLimit => "exclamation-circle",
            Self::RecurringExpense => "sync",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A human-readable alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub icon: String,
    /// Category the insight refers to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            title: title.into(),
            message: message.into(),
            icon: kind.icon().to_string(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn not_enough_data() -> Self {
        Self::new(
            InsightKind::NotEnoughData,
            Severity::Info,
            "Not enough data",
            "Add more transactions to see personalized insights.",
        )
    }
}

/// Upper-case the first character and lower-case the rest ("eating OUT" -> "Eating out")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
