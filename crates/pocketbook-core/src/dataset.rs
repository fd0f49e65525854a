//! Dataset loading
//!
//! Reads the tracker's data file, a JSON object with `transactions`,
//! `budgets` and `goals` arrays (any of which may be missing). Individual
//! records that do not deserialize are skipped with a warning; only a file
//! that is unreadable or not a JSON object is an error.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{Budget, SavingGoal, Transaction};

/// Number of records dropped per section while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkippedRecords {
    pub transactions: usize,
    pub budgets: usize,
    pub goals: usize,
}

impl SkippedRecords {
    pub fn total(&self) -> usize {
        self.transactions + self.budgets + self.goals
    }
}

/// Everything the analytics engine needs for one user
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<SavingGoal>,
    pub skipped: SkippedRecords,
}

impl Dataset {
    /// Load a dataset from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!("data file {}", path.display())));
        }
        let content = fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&content)?;

        tracing::info!(
            path = %path.display(),
            transactions = dataset.transactions.len(),
            budgets = dataset.budgets.len(),
            goals = dataset.goals.len(),
            skipped = dataset.skipped.total(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(Error::InvalidData(
                "dataset must be a JSON object".to_string(),
            ));
        };

        let (transactions, skipped_transactions) =
            parse_section::<Transaction>(root.remove("transactions"), "transactions")?;
        let (budgets, skipped_budgets) =
            parse_section::<Budget>(root.remove("budgets"), "budgets")?;
        let (goals, skipped_goals) = parse_section::<SavingGoal>(root.remove("goals"), "goals")?;

        Ok(Self {
            transactions,
            budgets,
            goals,
            skipped: SkippedRecords {
                transactions: skipped_transactions,
                budgets: skipped_budgets,
                goals: skipped_goals,
            },
        })
    }
}

/// Deserialize each element of an array section, skipping the ones that fail
fn parse_section<T: DeserializeOwned>(
    value: Option<Value>,
    section: &'static str,
) -> Result<(Vec<T>, usize)> {
    let items = match value {
        None | Some(Value::Null) => return Ok((Vec::new(), 0)),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(Error::InvalidData(format!(
                "`{}` must be an array",
                section
            )))
        }
    };

    let mut parsed = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => parsed.push(record),
            Err(e) => {
                tracing::warn!(section, index, error = %e, "Skipping malformed record");
                skipped += 1;
            }
        }
    }

    Ok((parsed, skipped))
}
