//! Insight generator - runs the insight rules in order

use crate::analytics::AnalysisContext;
use crate::models::{Budget, Transaction};

use super::types::Insight;
use super::{BudgetAlertRule, RecurringReminderRule, SpendingTrendRule};

/// Data an insight rule looks at
#[derive(Debug, Clone, Copy)]
pub struct InsightInput<'a> {
    pub transactions: &'a [Transaction],
    pub budgets: &'a [Budget],
}

/// A single source of insights
pub trait InsightRule: Send + Sync {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce zero or more insights
    fn evaluate(&self, input: &InsightInput<'_>, ctx: &AnalysisContext<'_>) -> Vec<Insight>;
}

/// Runs registered rules and concatenates their output in registration order
pub struct InsightGenerator {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightGenerator {
    /// Create a generator with the built-in rules
    pub fn new() -> Self {
        let mut generator = Self::empty();

        generator.register(Box::new(SpendingTrendRule));
        generator.register(Box::new(BudgetAlertRule));
        generator.register(Box::new(RecurringReminderRule));

        generator
    }

    /// Create a generator with no rules
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Generate insights. With fewer transactions than the configured
    /// minimum, the only output is a single "not enough data" insight.
    pub fn generate(
        &self,
        transactions: &[Transaction],
        budgets: &[Budget],
        ctx: &AnalysisContext<'_>,
    ) -> Vec<Insight> {
        if transactions.len() < ctx.config.insights.min_transactions {
            return vec![Insight::not_enough_data()];
        }

        let input = InsightInput {
            transactions,
            budgets,
        };

        let mut insights = Vec::new();
        for rule in &self.rules {
            let produced = rule.evaluate(&input, ctx);
            tracing::debug!(rule = rule.name(), count = produced.len(), "Insight rule complete");
            insights.extend(produced);
        }

        insights
    }
}

/// Generate insights with the built-in rules
pub fn generate_insights(
    transactions: &[Transaction],
    budgets: &[Budget],
    ctx: &AnalysisContext<'_>,
) -> Vec<Insight> {
    InsightGenerator::new().generate(transactions, budgets, ctx)
}
