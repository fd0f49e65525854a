//! Report command implementations
//!
//! Each report has a `render_*` function producing the text table and a
//! `cmd_*` wrapper that prints either the table or the JSON form.

use std::fmt::Write as _;

use anyhow::Result;
use pocketbook_core::analytics::{
    budget_status, category_expenses, financial_summary, goal_progress, monthly_expenses,
    BudgetStatus, ChartSeries, FinancialSummary, GoalProgress,
};
use pocketbook_core::{
    generate_insights, AnalysisContext, DashboardReport, Dataset, EngineConfig, Insight, Severity,
};
use serde::Serialize;

use super::truncate;

const RULE: &str = "   ─────────────────────────────────────────────────────────────";

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ️ ",
        Severity::Success => "✅",
        Severity::Warning => "⚠️ ",
        Severity::Danger => "🚨",
    }
}

/// A text bar of `width` cells filled to `percentage`
fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

// ========== Summary ==========

pub fn render_summary(summary: &FinancialSummary, config: &EngineConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "💰 Financial Summary");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "   Income:       {:>14}", config.format_amount(summary.total_income));
    let _ = writeln!(out, "   Expenses:     {:>14}", config.format_amount(summary.total_expenses));
    let _ = writeln!(out, "   Balance:      {:>14}", config.format_amount(summary.balance));
    let _ = writeln!(out, "   Transactions: {:>14}", summary.transaction_count);
    out
}

pub fn cmd_summary(dataset: &Dataset, ctx: &AnalysisContext<'_>, json: bool) -> Result<()> {
    let summary = financial_summary(&dataset.transactions);
    if json {
        return print_json(&summary);
    }
    print!("{}", render_summary(&summary, ctx.config));
    Ok(())
}

// ========== Categories ==========

pub fn render_categories(series: &ChartSeries, config: &EngineConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 Expenses by Category");
    let _ = writeln!(out, "{}", RULE);

    if series.is_empty() {
        let _ = writeln!(out, "   No transactions recorded.");
        return out;
    }
    if series.is_placeholder() {
        let _ = writeln!(out, "   No expenses recorded.");
        return out;
    }

    let total = series.total();
    let _ = writeln!(out, "   {:25} │ {:>14} │ {:>6}", "Category", "Amount", "%");
    let _ = writeln!(out, "   ──────────────────────────┼────────────────┼───────");
    for (label, amount) in series.iter() {
        let share = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
        let _ = writeln!(
            out,
            "   {:25} │ {:>14} │ {:>5.1}%",
            truncate(label, 25),
            config.format_amount(amount),
            share
        );
    }
    let _ = writeln!(out, "   ──────────────────────────┼────────────────┼───────");
    let _ = writeln!(out, "   {:25} │ {:>14} │", "Total", config.format_amount(total));
    out
}

pub fn cmd_categories(dataset: &Dataset, ctx: &AnalysisContext<'_>, json: bool) -> Result<()> {
    let series = category_expenses(&dataset.transactions);
    if json {
        return print_json(&series);
    }
    print!("{}", render_categories(&series, ctx.config));
    Ok(())
}

// ========== Monthly ==========

pub fn render_monthly(series: &ChartSeries, config: &EngineConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "📈 Monthly Expenses");
    let _ = writeln!(out, "{}", RULE);

    if series.is_empty() {
        let _ = writeln!(out, "   No transactions recorded.");
        return out;
    }

    let peak = series.data.iter().cloned().fold(0.0_f64, f64::max);
    let _ = writeln!(out, "   {:10} │ {:>14} │", "Month", "Amount");
    let _ = writeln!(out, "   ───────────┼────────────────┼──────────────────────");
    for (label, amount) in series.iter() {
        let pct = if peak > 0.0 { amount / peak * 100.0 } else { 0.0 };
        let _ = writeln!(
            out,
            "   {:10} │ {:>14} │ {}",
            label,
            config.format_amount(amount),
            progress_bar(pct, 20)
        );
    }
    out
}

pub fn cmd_monthly(dataset: &Dataset, ctx: &AnalysisContext<'_>, json: bool) -> Result<()> {
    let series = monthly_expenses(&dataset.transactions, ctx);
    if json {
        return print_json(&series);
    }
    print!("{}", render_monthly(&series, ctx.config));
    Ok(())
}

// ========== Budgets ==========

pub fn render_budgets(statuses: &[BudgetStatus], config: &EngineConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "🎯 Budget Status");
    let _ = writeln!(out, "{}", RULE);

    if statuses.is_empty() {
        let _ = writeln!(out, "   No budgets configured.");
        return out;
    }

    for status in statuses {
        let _ = writeln!(
            out,
            "   {} {} ({})",
            severity_marker(status.severity),
            status.category,
            status.period
        );
        let _ = writeln!(
            out,
            "      {} {:>5.1}%",
            progress_bar(status.percentage, 30),
            status.percentage
        );
        let _ = writeln!(
            out,
            "      Spent {} of {} · {} left",
            config.format_amount(status.spent),
            config.format_amount(status.limit),
            config.format_amount(status.remaining)
        );
    }
    out
}

pub fn cmd_budgets(dataset: &Dataset, ctx: &AnalysisContext<'_>, json: bool) -> Result<()> {
    let statuses = budget_status(&dataset.budgets, &dataset.transactions, ctx);
    if json {
        return print_json(&statuses);
    }
    print!("{}", render_budgets(&statuses, ctx.config));
    Ok(())
}

// ========== Insights ==========

pub fn render_insights(insights: &[Insight]) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "💡 Insights");
    let _ = writeln!(out, "{}", RULE);

    if insights.is_empty() {
        let _ = writeln!(out, "   Nothing notable right now.");
        return out;
    }

    for insight in insights {
        let _ = writeln!(out, "   {} {}", severity_marker(insight.severity), insight.title);
        let _ = writeln!(out, "      {}", insight.message);
    }
    out
}

pub fn cmd_insights(dataset: &Dataset, ctx: &AnalysisContext<'_>, json: bool) -> Result<()> {
    let insights = generate_insights(&dataset.transactions, &dataset.budgets, ctx);
    if json {
        return print_json(&insights);
    }
    print!("{}", render_insights(&insights));
    Ok(())
}

// ========== Goals ==========

pub fn render_goals(goals: &[GoalProgress], config: &EngineConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "🏦 Savings Goals");
    let _ = writeln!(out, "{}", RULE);

    if goals.is_empty() {
        let _ = writeln!(out, "   No savings goals yet.");
        return out;
    }

    for goal in goals {
        let deadline = if goal.days_left >= 0 {
            format!("{} days left", goal.days_left)
        } else {
            format!("{} days overdue", -goal.days_left)
        };
        let _ = writeln!(out, "   {} [{}]", goal.name, goal.status);
        let _ = writeln!(
            out,
            "      {} {:>5.1}%",
            progress_bar(goal.percentage, 30),
            goal.percentage
        );
        let _ = writeln!(
            out,
            "      Saved {} of {} · {}",
            config.format_amount(goal.current),
            config.format_amount(goal.target),
            deadline
        );
    }
    out
}

pub fn cmd_goals(dataset: &Dataset, ctx: &AnalysisContext<'_>, json: bool) -> Result<()> {
    let goals = goal_progress(&dataset.goals, ctx);
    if json {
        return print_json(&goals);
    }
    print!("{}", render_goals(&goals, ctx.config));
    Ok(())
}

// ========== Dashboard ==========

pub fn render_dashboard(report: &DashboardReport, config: &EngineConfig) -> String {
    let mut out = String::new();
    out.push_str(&render_summary(&report.summary, config));

    let _ = writeln!(out);
    let _ = writeln!(out, "🧾 Recent Transactions");
    let _ = writeln!(out, "{}", RULE);
    if report.recent_transactions.is_empty() {
        let _ = writeln!(out, "   No transactions recorded.");
    }
    for tx in &report.recent_transactions {
        let sign = if tx.is_income() { "+" } else { "-" };
        let _ = writeln!(
            out,
            "   {:10} │ {:25} │ {:15} │ {}{}",
            tx.date.to_string(),
            truncate(&tx.description, 25),
            truncate(tx.category_label(), 15),
            sign,
            config.format_amount(tx.amount)
        );
    }

    out.push_str(&render_categories(&report.category_expenses, config));
    out.push_str(&render_monthly(&report.monthly_expenses, config));
    out.push_str(&render_budgets(&report.budget_status, config));
    out.push_str(&render_goals(&report.goals, config));
    out.push_str(&render_insights(&report.insights));
    out
}

pub fn cmd_dashboard(dataset: &Dataset, ctx: &AnalysisContext<'_>, json: bool) -> Result<()> {
    let report = DashboardReport::from_dataset(dataset, ctx);
    if json {
        return print_json(&report);
    }
    print!("{}", render_dashboard(&report, ctx.config));
    Ok(())
}
