//! Domain models for Pocketbook

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Label used for expenses without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How often a recurring transaction repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringInterval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurringInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for RecurringInterval {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" | "annual" | "annually" => Ok(Self::Yearly),
            _ => Err(format!("Unknown recurring interval: {}", s)),
        }
    }
}

/// Unknown interval names are treated as "no interval" rather than
/// rejecting the whole transaction.
fn lenient_interval<'de, D>(deserializer: D) -> Result<Option<RecurringInterval>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.parse() {
        Ok(interval) => Some(interval),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring recurring interval");
            None
        }
    }))
}

/// A transaction date as stored upstream.
///
/// Records may carry a proper calendar date or raw text that still has to be
/// parsed as `YYYY-MM-DD`. Analytics that depend on the date drop records
/// whose text does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordDate {
    Date(NaiveDate),
    Text(String),
}

impl RecordDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// The calendar date, if one can be determined
    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(text) => NaiveDate::parse_from_str(text.trim(), Self::FORMAT).ok(),
        }
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for RecordDate {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl std::fmt::Display for RecordDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(Self::FORMAT)),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// An income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub description: String,
    /// Always non-negative; `kind` decides whether it is money in or out
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    pub date: RecordDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default, deserialize_with = "lenient_interval")]
    pub recurring_interval: Option<RecurringInterval>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<RecordDate>,
    ) -> Self {
        Self {
            id: 0,
            description: description.into(),
            amount,
            category: Some(category.into()),
            date: date.into(),
            kind,
            recurring: false,
            recurring_interval: None,
        }
    }

    pub fn expense(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<RecordDate>,
    ) -> Self {
        Self::new(TransactionKind::Expense, description, amount, category, date)
    }

    pub fn income(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<RecordDate>,
    ) -> Self {
        Self::new(TransactionKind::Income, description, amount, category, date)
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_recurring(mut self, interval: RecurringInterval) -> Self {
        self.recurring = true;
        self.recurring_interval = Some(interval);
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Category name, with missing or empty names reported as "Uncategorized"
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNCATEGORIZED,
        }
    }

    /// Whether `category` names this transaction's category exactly
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

/// Length of a budget period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// Unrecognized period names fall back to monthly
impl From<String> for BudgetPeriod {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            other => {
                tracing::debug!(period = other, "Unknown budget period, using monthly");
                Self::Monthly
            }
        }
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A spending limit for one category over one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub id: i64,
    pub category: String,
    pub limit_amount: f64,
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit_amount: f64, period: BudgetPeriod) -> Self {
        Self {
            id: 0,
            category: category.into(),
            limit_amount,
            period,
        }
    }

    pub fn monthly(category: impl Into<String>, limit_amount: f64) -> Self {
        Self::new(category, limit_amount, BudgetPeriod::Monthly)
    }
}

/// A savings target with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingGoal {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub deadline: NaiveDate,
}
