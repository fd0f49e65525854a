//! Calendar period boundaries and period-to-date spend

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::{BudgetPeriod, Transaction};

use super::records::{checked_amount, checked_date};

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// January 1 of the year containing `date`
pub fn year_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.ordinal0() as i64)
}

/// First day of the month before the one containing `date`
pub fn previous_month_start(date: NaiveDate) -> NaiveDate {
    month_start(month_start(date) - Duration::days(1))
}

/// First day of the calendar month `months` months before the one containing `date`
pub fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    let start = month_start(date);
    start
        .checked_sub_months(Months::new(months))
        .unwrap_or(start)
}

/// Start of the budget period that contains `today`
pub fn period_start(period: BudgetPeriod, today: NaiveDate) -> NaiveDate {
    match period {
        BudgetPeriod::Weekly => week_start(today),
        BudgetPeriod::Monthly => month_start(today),
        BudgetPeriod::Yearly => year_start(today),
    }
}

/// Sum of expenses in `category` dated on or after `since`
pub(crate) fn category_spend_since(
    transactions: &[Transaction],
    category: &str,
    since: NaiveDate,
    analysis: &'static str,
) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.is_expense() && tx.in_category(category))
        .filter_map(|tx| {
            let date = checked_date(tx, analysis)?;
            let amount = checked_amount(tx, analysis)?;
            (date >= since).then_some(amount)
        })
        .sum()
}

/// Spend as a percentage of `limit`; zero when there is no positive limit
pub fn utilization_pct(spent: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        spent / limit * 100.0
    } else {
        0.0
    }
}
