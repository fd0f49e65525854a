//! Dashboard report - every view of one dataset in a single structure

use serde::Serialize;

use crate::dataset::Dataset;
use crate::insights::{generate_insights, Insight};
use crate::models::{Budget, SavingGoal, Transaction};

use super::budget::budget_status;
use super::category::category_expenses;
use super::goals::{goal_progress, GoalProgress};
use super::monthly::monthly_expenses;
use super::summary::{financial_summary, recent_transactions, FinancialSummary};
use super::types::{BudgetStatus, ChartSeries};
use super::AnalysisContext;

/// Number of transactions in the dashboard's "recent" panel
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub generated_at: String,
    pub currency: String,
    pub summary: FinancialSummary,
    pub recent_transactions: Vec<Transaction>,
    pub category_expenses: ChartSeries,
    pub monthly_expenses: ChartSeries,
    pub budget_status: Vec<BudgetStatus>,
    pub goals: Vec<GoalProgress>,
    pub insights: Vec<Insight>,
}

impl DashboardReport {
    pub fn build(
        transactions: &[Transaction],
        budgets: &[Budget],
        goals: &[SavingGoal],
        ctx: &AnalysisContext<'_>,
    ) -> Self {
        let report = Self {
            generated_at: ctx.now.format("%Y-%m-%dT%H:%M:%S").to_string(),
            currency: ctx.config.currency.clone(),
            summary: financial_summary(transactions),
            recent_transactions: recent_transactions(transactions, RECENT_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            category_expenses: category_expenses(transactions),
            monthly_expenses: monthly_expenses(transactions, ctx),
            budget_status: budget_status(budgets, transactions, ctx),
            goals: goal_progress(goals, ctx),
            insights: generate_insights(transactions, budgets, ctx),
        };

        tracing::debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            insights = report.insights.len(),
            "Dashboard built"
        );

        report
    }

    pub fn from_dataset(dataset: &Dataset, ctx: &AnalysisContext<'_>) -> Self {
        Self::build(
            &dataset.transactions,
            &dataset.budgets,
            &dataset.goals,
            ctx,
        )
    }
}
