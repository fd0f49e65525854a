//! Recurring Reminder Insight
//!
//! Reminds the user of a recurring expense. At most one reminder is
//! produced: the first recurring expense in input order.

use crate::analytics::{AnalysisContext, Severity};

use super::engine::{InsightInput, InsightRule};
use super::types::{Insight, InsightKind};

pub struct RecurringReminderRule;

impl InsightRule for RecurringReminderRule {
    fn name(&self) -> &'static str {
        "Recurring Reminder"
    }

    fn evaluate(&self, input: &InsightInput<'_>, _ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        input
            .transactions
            .iter()
            .find(|tx| tx.is_expense() && tx.recurring)
            .map(|tx| {
                let insight = Insight::new(
                    InsightKind::RecurringExpense,
                    Severity::Info,
                    "Recurring expense reminder",
                    format!(
                        "Don't forget about your recurring {} payment.",
                        tx.description
                    ),
                );
                match tx.category.as_deref() {
                    Some(category) if !category.is_empty() => insight.with_category(category),
                    _ => insight,
                }
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::{RecurringInterval, Transaction};
    use chrono::NaiveDate;

    fn run(txs: &[Transaction]) -> Vec<Insight> {
        let config = EngineConfig::default();
        let now = NaiveDate::from_ymd_opt(2024, 5, 20)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let ctx = AnalysisContext::new(now, &config);
        let input = InsightInput {
            transactions: txs,
            budgets: &[],
        };
        RecurringReminderRule.evaluate(&input, &ctx)
    }

    #[test]
    fn test_first_recurring_expense_only() {
        let txs = vec![
            Transaction::income("Salary", 3000.0, "job", "2024-05-01")
                .with_recurring(RecurringInterval::Monthly),
            Transaction::expense("Coffee", 4.0, "food", "2024-05-01"),
            Transaction::expense("Netflix", 15.0, "subscriptions", "2024-05-02")
                .with_recurring(RecurringInterval::Monthly),
            Transaction::expense("Gym", 40.0, "health", "2024-05-03")
                .with_recurring(RecurringInterval::Monthly),
        ];

        let insights = run(&txs);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Recurring expense reminder");
        assert_eq!(
            insights[0].message,
            "Don't forget about your recurring Netflix payment."
        );
        assert_eq!(insights[0].icon, "sync");
        assert_eq!(insights[0].category.as_deref(), Some("subscriptions"));
    }

    #[test]
    fn test_no_recurring_expense() {
        let txs = vec![
            Transaction::income("Salary", 3000.0, "job", "2024-05-01")
                .with_recurring(RecurringInterval::Monthly),
            Transaction::expense("Coffee", 4.0, "food", "2024-05-01"),
        ];
        assert!(run(&txs).is_empty());
    }
}
