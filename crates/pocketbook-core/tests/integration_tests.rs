//! Integration tests for pocketbook-core
//!
//! These tests exercise the full dataset → analytics → dashboard workflow.

use chrono::{NaiveDate, NaiveDateTime};
use pocketbook_core::{
    analytics::MONTH_BUCKETS, budget_status, category_expenses, generate_insights,
    monthly_expenses, AnalysisContext, Budget, BudgetPeriod, DashboardReport, Dataset,
    EngineConfig, InsightKind, RecurringInterval, Severity, Transaction,
};

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

/// A mixed bag of transactions spread over several months, including
/// records the engine has to drop
fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::income("Salary", 4000.0, "job", "2024-05-01").with_id(1),
        Transaction::expense("Rent", 1500.0, "rent", "2024-05-01")
            .with_id(2)
            .with_recurring(RecurringInterval::Monthly),
        Transaction::expense("Groceries", 120.0, "food", "2024-05-04").with_id(3),
        Transaction::expense("Cinema", 100.0, "entertainment", "2024-04-12").with_id(4),
        Transaction::expense("Concert", 130.0, "entertainment", "2024-05-11").with_id(5),
        Transaction::expense("Groceries", 200.0, "food", "2024-04-09").with_id(6),
        Transaction::expense("Refund", -30.0, "food", "2024-05-06").with_id(7),
        Transaction::expense("Mystery", 45.0, "", "2024-03-15").with_id(8),
        Transaction::expense("Bad date", 60.0, "food", "15/05/2024").with_id(9),
        Transaction::expense("Bad amount", f64::NAN, "food", "2024-05-06").with_id(10),
        Transaction::expense("Gym", 35.0, "health", "2024-05-02")
            .with_id(11)
            .with_recurring(RecurringInterval::Monthly),
    ]
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_budget_scenario_near_limit() {
    let config = EngineConfig::default();
    let now = at(2024, 5, 16, 21);
    let ctx = AnalysisContext::new(now, &config);

    let budgets = vec![Budget::monthly("food", 100.0)];
    let txs = vec![Transaction::expense("Dinner", 95.0, "food", now.date())];

    let status = &budget_status(&budgets, &txs, &ctx)[0];
    assert_eq!(status.spent, 95.0);
    assert_eq!(status.remaining, 5.0);
    assert!((status.percentage - 95.0).abs() < 1e-9);
    assert_eq!(status.severity, Severity::Warning);
}

#[test]
fn test_category_scenario() {
    let txs = vec![
        Transaction::expense("a", 40.0, "food", "2024-05-01"),
        Transaction::expense("b", 60.0, "food", "2024-05-02"),
        Transaction::income("c", 1000.0, "rent", "2024-05-03"),
    ];
    let series = category_expenses(&txs);
    assert_eq!(series.labels, vec!["food"]);
    assert_eq!(series.data, vec![100.0]);
}

#[test]
fn test_entertainment_increase_scenario() {
    let config = EngineConfig::default();
    let ctx = AnalysisContext::new(at(2024, 5, 20, 12), &config);
    let txs = vec![
        Transaction::expense("Cinema", 100.0, "entertainment", "2024-04-12"),
        Transaction::expense("Concert", 130.0, "entertainment", "2024-05-11"),
        Transaction::income("Salary", 4000.0, "job", "2024-05-01"),
    ];

    let insights = generate_insights(&txs, &[], &ctx);
    let increases: Vec<_> = insights
        .iter()
        .filter(|i| i.kind == InsightKind::SpendingIncrease)
        .collect();
    assert_eq!(increases.len(), 1);
    assert_eq!(increases[0].severity, Severity::Warning);
    assert_eq!(increases[0].title, "Entertainment spending increased");
    assert!(increases[0].message.contains("30%"));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_category_sum_matches_valid_expenses() {
    let txs = sample_transactions();
    let series = category_expenses(&txs);

    let expected: f64 = txs
        .iter()
        .filter(|t| t.is_expense() && t.amount.is_finite() && t.amount >= 0.0)
        .map(|t| t.amount)
        .sum();

    assert!((series.total() - expected).abs() < 1e-9);
    assert_eq!(series.labels.len(), series.data.len());
}

#[test]
fn test_monthly_always_six_buckets() {
    let config = EngineConfig::default();
    let inputs: Vec<Vec<Transaction>> = vec![
        sample_transactions(),
        vec![Transaction::income("Salary", 1.0, "job", "2024-05-01")],
        vec![Transaction::expense("Ancient", 1.0, "old", "1999-01-01")],
        vec![Transaction::expense("Garbled", 1.0, "x", "garbled")],
    ];

    for day in [1, 15, 28, 31] {
        let ctx = AnalysisContext::new(at(2024, 5, day, 12), &config);
        for txs in &inputs {
            let series = monthly_expenses(txs, &ctx);
            assert_eq!(series.labels.len(), MONTH_BUCKETS);
            assert_eq!(series.data.len(), MONTH_BUCKETS);
            assert_eq!(series.labels[5], "May 2024");
        }
    }
}

#[test]
fn test_budget_bounds() {
    let config = EngineConfig::default();
    let ctx = AnalysisContext::new(at(2024, 5, 20, 12), &config);
    let txs = sample_transactions();

    let budgets: Vec<Budget> = [0.0, 1.0, 50.0, 125.0, 10000.0]
        .iter()
        .flat_map(|&limit| {
            [BudgetPeriod::Weekly, BudgetPeriod::Monthly, BudgetPeriod::Yearly]
                .into_iter()
                .flat_map(move |period| {
                    ["food", "rent", "entertainment", "none"]
                        .into_iter()
                        .map(move |category| Budget::new(category, limit, period))
                })
        })
        .collect();

    let status = budget_status(&budgets, &txs, &ctx);
    assert_eq!(status.len(), budgets.len());
    for s in &status {
        assert!(s.percentage >= 0.0 && s.percentage <= 100.0, "{:?}", s);
        assert!(s.remaining >= 0.0, "{:?}", s);
    }
}

#[test]
fn test_two_transactions_not_enough_data() {
    let config = EngineConfig::default();
    let ctx = AnalysisContext::new(at(2024, 5, 20, 12), &config);
    let txs = sample_transactions();

    for pair in txs.windows(2) {
        let insights = generate_insights(pair, &[], &ctx);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].severity, Severity::Info);
        assert_eq!(insights[0].title, "Not enough data");
    }
}

#[test]
fn test_placeholder_category_chart() {
    let empty = category_expenses(&[]);
    assert!(empty.labels.is_empty() && empty.data.is_empty());

    let income_only = category_expenses(&[Transaction::income("Pay", 10.0, "job", "2024-05-01")]);
    assert!(income_only.is_placeholder());
    assert_eq!(income_only.labels.len(), income_only.data.len());
}

// =============================================================================
// Dashboard
// =============================================================================

#[test]
fn test_dashboard_from_dataset() {
    let json = r#"{
        "transactions": [
            {"id": 1, "description": "Salary", "amount": 4000, "category": "job",
             "date": "2024-05-01", "type": "income"},
            {"id": 2, "description": "Rent", "amount": 1500, "category": "rent",
             "date": "2024-05-01", "type": "expense", "recurring": true,
             "recurring_interval": "monthly"},
            {"id": 3, "description": "Groceries", "amount": 180, "category": "food",
             "date": "2024-05-04", "type": "expense"},
            {"id": 4, "description": "Groceries", "amount": 100, "category": "food",
             "date": "2024-04-04", "type": "expense"},
            {"id": 5, "description": "Garbage", "amount": null, "date": "2024-05-04",
             "type": "expense"}
        ],
        "budgets": [
            {"id": 1, "category": "food", "limit_amount": 200, "period": "monthly"},
            {"id": 2, "category": "rent", "limit_amount": 1500, "period": "yearly"}
        ],
        "goals": [
            {"id": 1, "name": "Emergency fund", "target_amount": 5000,
             "current_amount": 1250, "deadline": "2024-12-31"}
        ]
    }"#;

    let dataset = Dataset::from_json_str(json).unwrap();
    assert_eq!(dataset.skipped.transactions, 1);

    let config = EngineConfig::default();
    let ctx = AnalysisContext::new(at(2024, 5, 20, 12), &config);
    let report = DashboardReport::from_dataset(&dataset, &ctx);

    assert_eq!(report.summary.total_income, 4000.0);
    assert_eq!(report.summary.total_expenses, 1780.0);
    assert_eq!(report.summary.balance, 2220.0);
    assert_eq!(report.recent_transactions.len(), 4);
    assert_eq!(report.recent_transactions[0].id, 3);

    assert_eq!(report.category_expenses.labels, vec!["rent", "food"]);
    assert_eq!(report.category_expenses.data, vec![1500.0, 280.0]);
    assert_eq!(report.monthly_expenses.data[5], 1680.0);
    assert_eq!(report.monthly_expenses.data[4], 100.0);

    assert_eq!(report.budget_status[0].severity, Severity::Warning);
    assert_eq!(report.budget_status[1].severity, Severity::Danger);
    assert_eq!(report.goals[0].percentage, 25.0);

    let kinds: Vec<_> = report.insights.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            InsightKind::SpendingIncrease,
            InsightKind::BudgetAtRisk,
            InsightKind::BudgetAtRisk,
            InsightKind::RecurringExpense,
        ]
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["budget_status"][0]["status"], "warning");
    assert_eq!(json["insights"][0]["type"], "warning");
    assert_eq!(json["currency"], "USD");
}
