//! Budget Alert Insight
//!
//! Flags budgets whose month-to-date spend is close to the limit. Always
//! measured from the first of the calendar month, whatever the budget's own
//! period; the budget status report is the period-aware view.

use crate::analytics::periods::{category_spend_since, month_start, utilization_pct};
use crate::analytics::{AnalysisContext, Severity};

use super::engine::{InsightInput, InsightRule};
use super::types::{capitalize, Insight, InsightKind};

pub struct BudgetAlertRule;

impl InsightRule for BudgetAlertRule {
    fn name(&self) -> &'static str {
        "Budget Alerts"
    }

    fn evaluate(&self, input: &InsightInput<'_>, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let thresholds = &ctx.config.insights;
        let since = month_start(ctx.today());

        let mut insights = Vec::new();
        for budget in input.budgets {
            let category = budget.category.as_str();
            let spent = category_spend_since(input.transactions, category, since, "budget_alerts");
            let percentage = utilization_pct(spent, budget.limit_amount);
            let message = format!(
                "You have used {:.0}% of your {} budget this month.",
                percentage, category
            );

            if percentage >= thresholds.budget_danger_pct {
                insights.push(
                    Insight::new(
                        InsightKind::BudgetAtRisk,
                        Severity::Danger,
                        format!("{} budget at risk", capitalize(category)),
                        message,
                    )
                    .with_category(category),
                );
            } else if percentage >= thresholds.budget_warning_pct {
                insights.push(
                    Insight::new(
                        InsightKind::BudgetApproachingLimit,
                        Severity::Warning,
                        format!("{} budget approaching limit", capitalize(category)),
                        message,
                    )
                    .with_category(category),
                );
            }
        }

        insights
    }
}
