//! Result types produced by the analytics engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::BudgetPeriod;

/// Label of the placeholder category series
pub const NO_EXPENSES_LABEL: &str = "No expenses";

/// Chart-ready series: `labels[i]` belongs to `data[i]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Marker for "nothing to chart". Renderers should show it as a neutral
    /// single slice, not as real data.
    pub fn no_expenses() -> Self {
        Self {
            labels: vec![NO_EXPENSES_LABEL.to_string()],
            data: vec![1.0],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_placeholder(&self) -> bool {
        self.labels.len() == 1 && self.labels[0] == NO_EXPENSES_LABEL && self.data == [1.0]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }

    /// Value for a label, if present
    pub fn get(&self, label: &str) -> Option<f64> {
        self.iter().find(|(l, _)| *l == label).map(|(_, v)| v)
    }
}

/// Alert styling level shared by budget status records and insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Good news
    Success,
    /// Worth attention
    Warning,
    /// Over or close to a limit
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Success => 2,
            Severity::Warning => 3,
            Severity::Danger => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "danger" => Ok(Severity::Danger),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Spending against one budget in its current period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    /// `max(limit - spent, 0)`
    pub remaining: f64,
    /// Utilization capped to 0..=100
    pub percentage: f64,
    pub period: BudgetPeriod,
    #[serde(rename = "status")]
    pub severity: Severity,
}
