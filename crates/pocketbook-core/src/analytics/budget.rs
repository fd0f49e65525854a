//! Budget utilization for the current period

use crate::config::BudgetThresholds;
use crate::models::{Budget, Transaction};

use super::periods::{category_spend_since, period_start, utilization_pct};
use super::types::{BudgetStatus, Severity};
use super::AnalysisContext;

/// Severity for a capped utilization percentage
pub fn budget_severity(percentage: f64, thresholds: &BudgetThresholds) -> Severity {
    if percentage >= thresholds.danger_pct {
        Severity::Danger
    } else if percentage >= thresholds.warning_pct {
        Severity::Warning
    } else {
        Severity::Success
    }
}

/// Period-to-date spending against each budget, in budget order.
///
/// The period start (Monday, first of the month, or January 1) is taken from
/// the context's date; time of day is ignored.
pub fn budget_status(
    budgets: &[Budget],
    transactions: &[Transaction],
    ctx: &AnalysisContext<'_>,
) -> Vec<BudgetStatus> {
    let today = ctx.today();

    budgets
        .iter()
        .map(|budget| {
            let since = period_start(budget.period, today);
            let spent = category_spend_since(transactions, &budget.category, since, "budget_status");
            let limit = budget.limit_amount;
            let percentage = utilization_pct(spent, limit).clamp(0.0, 100.0);

            BudgetStatus {
                category: budget.category.clone(),
                limit,
                spent,
                remaining: (limit - spent).max(0.0),
                percentage,
                period: budget.period,
                severity: budget_severity(percentage, &ctx.config.budget),
            }
        })
        .collect()
}
