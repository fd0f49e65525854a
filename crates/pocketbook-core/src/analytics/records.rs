//! Per-record guards shared by the aggregators
//!
//! A bad record never fails an analysis. It is dropped and reported through
//! `tracing`, which acts as the diagnostic sink for the engine.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::Transaction;

use super::types::ChartSeries;

/// Why a transaction was left out of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NonNumericAmount,
    NegativeAmount,
    UnparseableDate,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonNumericAmount => "non_numeric_amount",
            Self::NegativeAmount => "negative_amount",
            Self::UnparseableDate => "unparseable_date",
        }
    }
}

fn report_skip(tx: &Transaction, reason: SkipReason, analysis: &'static str) {
    match reason {
        // Negative amounts are filtered quietly; the others point at bad data upstream
        SkipReason::NegativeAmount => tracing::debug!(
            analysis,
            transaction_id = tx.id,
            reason = reason.as_str(),
            "Skipping transaction"
        ),
        _ => tracing::warn!(
            analysis,
            transaction_id = tx.id,
            reason = reason.as_str(),
            "Skipping transaction"
        ),
    }
}

/// The amount, if it is a finite non-negative number
pub(crate) fn checked_amount(tx: &Transaction, analysis: &'static str) -> Option<f64> {
    if !tx.amount.is_finite() {
        report_skip(tx, SkipReason::NonNumericAmount, analysis);
        return None;
    }
    if tx.amount < 0.0 {
        report_skip(tx, SkipReason::NegativeAmount, analysis);
        return None;
    }
    Some(tx.amount)
}

/// The calendar date, if the record's date parses
pub(crate) fn checked_date(tx: &Transaction, analysis: &'static str) -> Option<NaiveDate> {
    let date = tx.date.resolve();
    if date.is_none() {
        report_skip(tx, SkipReason::UnparseableDate, analysis);
    }
    date
}

/// Per-category sums that remember first-seen order
#[derive(Debug, Default)]
pub(crate) struct CategoryTotals {
    index: HashMap<String, usize>,
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.index.get(category) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), amount));
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.index.get(category).map(|&i| self.entries[i].1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(c, a)| (c.as_str(), *a))
    }

    pub fn into_series(self) -> ChartSeries {
        let (labels, data) = self.entries.into_iter().unzip();
        ChartSeries { labels, data }
    }
}
