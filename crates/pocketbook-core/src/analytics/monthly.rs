//! Six-bucket monthly expense series

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::config::MonthBucketing;
use crate::models::Transaction;

use super::periods::{month_start, months_back};
use super::records::{checked_amount, checked_date};
use super::types::ChartSeries;
use super::AnalysisContext;

/// Number of buckets in the monthly series
pub const MONTH_BUCKETS: usize = 6;

/// Anchor date per bucket offset; index 0 is the current month.
///
/// With [`MonthBucketing::ThirtyDay`] the anchors step back 30 days at a
/// time from the first of the current month, so two offsets can land in the
/// same calendar month and a short month can be skipped entirely.
pub fn bucket_anchors(today: NaiveDate, bucketing: MonthBucketing) -> [NaiveDate; MONTH_BUCKETS] {
    let first = month_start(today);
    let mut anchors = [first; MONTH_BUCKETS];
    for (i, anchor) in anchors.iter_mut().enumerate() {
        *anchor = match bucketing {
            MonthBucketing::ThirtyDay => first - Duration::days(i as i64 * 30),
            MonthBucketing::Calendar => months_back(today, i as u32),
        };
    }
    anchors
}

/// Expense totals for the trailing six months, oldest first.
///
/// Only expenses with a strictly positive amount and a parseable date no more
/// than `window_days` before now are counted. Each goes to the first bucket,
/// checking the current month first, whose anchor shares its year and month.
/// An empty input gives an empty series; any other input gives exactly six
/// buckets, even if all are zero.
pub fn monthly_expenses(transactions: &[Transaction], ctx: &AnalysisContext<'_>) -> ChartSeries {
    if transactions.is_empty() {
        return ChartSeries::empty();
    }

    let anchors = bucket_anchors(ctx.today(), ctx.config.month_bucketing);
    let labels = anchors
        .iter()
        .rev()
        .map(|anchor| anchor.format("%b %Y").to_string())
        .collect();
    let mut data = vec![0.0; MONTH_BUCKETS];

    let mut counted = 0usize;
    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        let Some(date) = checked_date(tx, "monthly_expenses") else {
            continue;
        };
        let Some(amount) = checked_amount(tx, "monthly_expenses") else {
            continue;
        };
        if amount <= 0.0 {
            continue;
        }

        let age_days = (ctx.now - date.and_time(NaiveTime::MIN)).num_days();
        if age_days > ctx.config.window_days {
            continue;
        }

        if let Some(offset) = anchors
            .iter()
            .position(|anchor| anchor.year() == date.year() && anchor.month() == date.month())
        {
            data[MONTH_BUCKETS - 1 - offset] += amount;
            counted += 1;
        }
    }

    tracing::debug!(counted, total = transactions.len(), "Monthly expenses computed");

    ChartSeries { labels, data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use chrono::NaiveDateTime;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_input_has_no_buckets() {
        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(at(2024, 6, 15, 12), &config);
        let series = monthly_expenses(&[], &ctx);
        assert!(series.labels.is_empty());
        assert!(series.data.is_empty());
    }

    #[test]
    fn test_six_buckets_even_without_expenses() {
        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(at(2024, 6, 15, 12), &config);
        let txs = vec![Transaction::income("Salary", 3000.0, "job", "2024-06-01")];

        let series = monthly_expenses(&txs, &ctx);
        assert_eq!(
            series.labels,
            vec!["Jan 2024", "Feb 2024", "Mar 2024", "Apr 2024", "May 2024", "Jun 2024"]
        );
        assert_eq!(series.data, vec![0.0; 6]);
    }

    #[test]
    fn test_buckets_by_month() {
        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(at(2024, 6, 15, 12), &config);
        let txs = vec![
            Transaction::expense("a", 10.0, "food", "2024-06-02"),
            Transaction::expense("b", 5.0, "food", date(2024, 6, 14)),
            Transaction::expense("c", 20.0, "rent", "2024-05-31"),
            Transaction::expense("d", 7.5, "fun", "2024-01-10"),
            Transaction::expense("e", 0.0, "fun", "2024-06-10"),
            Transaction::expense("f", -3.0, "fun", "2024-06-10"),
            Transaction::expense("g", 4.0, "fun", "06/10/2024"),
            Transaction::income("h", 100.0, "job", "2024-06-10"),
            Transaction::expense("i", 50.0, "old", "2023-11-10"),
        ];

        let series = monthly_expenses(&txs, &ctx);
        assert_eq!(series.data, vec![7.5, 0.0, 0.0, 0.0, 20.0, 15.0]);
    }

    #[test]
    fn test_future_dates_land_in_current_month() {
        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(at(2024, 6, 15, 12), &config);
        let txs = vec![Transaction::expense("later", 9.0, "food", "2024-06-28")];
        let series = monthly_expenses(&txs, &ctx);
        assert_eq!(series.data[5], 9.0);
    }

    #[test]
    fn test_window_cutoff() {
        let config = EngineConfig::default();
        // Feb 2 2024 is exactly 180 days before Jul 31; Feb 1 is 181
        let ctx = AnalysisContext::new(at(2024, 7, 31, 9), &config);
        let txs = vec![
            Transaction::expense("edge", 1.0, "x", "2024-02-02"),
            Transaction::expense("out", 100.0, "x", "2024-02-01"),
        ];
        let series = monthly_expenses(&txs, &ctx);
        assert_eq!(series.labels[0], "Feb 2024");
        assert_eq!(series.data[0], 1.0);

        let narrow = EngineConfig {
            window_days: 30,
            ..EngineConfig::default()
        };
        let ctx = AnalysisContext::new(at(2024, 6, 15, 12), &narrow);
        let txs = vec![
            Transaction::expense("recent", 3.0, "x", "2024-05-20"),
            Transaction::expense("stale", 30.0, "x", "2024-05-10"),
        ];
        let series = monthly_expenses(&txs, &ctx);
        assert_eq!(series.data[4], 3.0);
    }

    #[test]
    fn test_thirty_day_anchors_skip_and_repeat_months() {
        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(at(2025, 3, 15, 12), &config);
        let txs = vec![
            Transaction::expense("dec", 10.0, "x", "2024-12-15"),
            Transaction::expense("feb", 99.0, "x", "2025-02-15"),
            Transaction::expense("mar", 1.0, "x", "2025-03-02"),
        ];

        let series = monthly_expenses(&txs, &ctx);
        assert_eq!(
            series.labels,
            vec!["Oct 2024", "Nov 2024", "Dec 2024", "Dec 2024", "Jan 2025", "Mar 2025"]
        );
        // December matches the newer of its two buckets; February has no bucket
        assert_eq!(series.data, vec![0.0, 0.0, 0.0, 10.0, 0.0, 1.0]);
    }

    #[test]
    fn test_calendar_bucketing() {
        let config = EngineConfig {
            month_bucketing: MonthBucketing::Calendar,
            ..EngineConfig::default()
        };
        let ctx = AnalysisContext::new(at(2025, 3, 15, 12), &config);
        let txs = vec![
            Transaction::expense("dec", 10.0, "x", "2024-12-15"),
            Transaction::expense("feb", 99.0, "x", "2025-02-15"),
        ];

        let series = monthly_expenses(&txs, &ctx);
        assert_eq!(
            series.labels,
            vec!["Oct 2024", "Nov 2024", "Dec 2024", "Jan 2025", "Feb 2025", "Mar 2025"]
        );
        assert_eq!(series.data, vec![0.0, 0.0, 10.0, 0.0, 99.0, 0.0]);
    }

    #[test]
    fn test_bucket_anchors() {
        let anchors = bucket_anchors(date(2024, 6, 15), MonthBucketing::ThirtyDay);
        assert_eq!(anchors[0], date(2024, 6, 1));
        assert_eq!(anchors[1], date(2024, 5, 2));
        assert_eq!(anchors[5], date(2024, 1, 3));
    }
}
