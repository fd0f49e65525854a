//! Spending Trend Insight
//!
//! Compares each category's spend this calendar month with the previous
//! calendar month and reports changes beyond the trend threshold.

use crate::analytics::periods::{month_start, previous_month_start};
use crate::analytics::records::{checked_amount, checked_date, CategoryTotals};
use crate::analytics::{AnalysisContext, Severity};

use super::engine::{InsightInput, InsightRule};
use super::types::{capitalize, Insight, InsightKind};

/// Month-over-month category spending changes
pub struct SpendingTrendRule;

impl SpendingTrendRule {
    /// Per-category expense sums for (current month, previous month)
    fn monthly_totals(
        input: &InsightInput<'_>,
        ctx: &AnalysisContext<'_>,
    ) -> (CategoryTotals, CategoryTotals) {
        let today = ctx.today();
        let current_start = month_start(today);
        let previous_start = previous_month_start(today);

        let mut current = CategoryTotals::default();
        let mut previous = CategoryTotals::default();

        for tx in input.transactions.iter().filter(|tx| tx.is_expense()) {
            let Some(date) = checked_date(tx, "spending_trend") else {
                continue;
            };
            let Some(amount) = checked_amount(tx, "spending_trend") else {
                continue;
            };

            if date >= current_start {
                current.add(tx.category_label(), amount);
            } else if date >= previous_start {
                previous.add(tx.category_label(), amount);
            }
        }

        (current, previous)
    }
}

impl InsightRule for SpendingTrendRule {
    fn name(&self) -> &'static str {
        "Spending Trend"
    }

    fn evaluate(&self, input: &InsightInput<'_>, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let threshold = ctx.config.insights.trend_threshold_pct;
        let (current, previous) = Self::monthly_totals(input, ctx);

        let mut insights = Vec::new();
        for (category, current_amount) in current.iter() {
            let previous_amount = match previous.get(category) {
                Some(amount) if amount > 0.0 => amount,
                // Growth from nothing is never reported as a trend
                _ => continue,
            };

            let percent_change = (current_amount - previous_amount) / previous_amount * 100.0;

            if percent_change >= threshold {
                insights.push(
                    Insight::new(
                        InsightKind::SpendingIncrease,
                        Severity::Warning,
                        format!("{} spending increased", capitalize(category)),
                        format!(
                            "Your {} spending has increased by {:.0}% compared to last month.",
                            category, percent_change
                        ),
                    )
                    .with_category(category),
                );
            } else if percent_change <= -threshold {
                insights.push(
                    Insight::new(
                        InsightKind::SpendingDecrease,
                        Severity::Success,
                        format!("{} spending decreased", capitalize(category)),
                        format!(
                            "Your {} spending has decreased by {:.0}% compared to last month.",
                            category,
                            percent_change.abs()
                        ),
                    )
                    .with_category(category),
                );
            }
        }

        insights
    }
}
