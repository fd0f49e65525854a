//! Expense totals per category

use crate::models::Transaction;

use super::records::{checked_amount, CategoryTotals};
use super::types::ChartSeries;

/// Sum expense amounts per category for the category breakdown chart.
///
/// Labels keep first-seen order. Missing or empty category names are
/// reported as "Uncategorized". Records with a negative or non-numeric
/// amount are dropped. An empty input gives an empty series; an input with
/// no qualifying expense gives the "No expenses" placeholder.
pub fn category_expenses(transactions: &[Transaction]) -> ChartSeries {
    if transactions.is_empty() {
        return ChartSeries::empty();
    }

    let mut totals = CategoryTotals::default();
    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        if let Some(amount) = checked_amount(tx, "category_expenses") {
            totals.add(tx.category_label(), amount);
        }
    }

    if totals.is_empty() {
        return ChartSeries::no_expenses();
    }

    totals.into_series()
}
