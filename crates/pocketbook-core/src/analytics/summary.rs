//! Dashboard totals

use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind};

use super::records::checked_amount;

/// Income, expenses and balance over a set of transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// `total_income - total_expenses`
    pub balance: f64,
    pub transaction_count: usize,
}

pub fn financial_summary(transactions: &[Transaction]) -> FinancialSummary {
    let mut summary = FinancialSummary {
        transaction_count: transactions.len(),
        ..Default::default()
    };

    for tx in transactions {
        let Some(amount) = checked_amount(tx, "financial_summary") else {
            continue;
        };
        match tx.kind {
            TransactionKind::Income => summary.total_income += amount,
            TransactionKind::Expense => summary.total_expenses += amount,
        }
    }

    summary.balance = summary.total_income - summary.total_expenses;
    summary
}

/// The newest `limit` transactions by date. Records whose date cannot be
/// parsed sort last; ties keep input order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.resolve().cmp(&a.date.resolve()));
    sorted.truncate(limit);
    sorted
}
