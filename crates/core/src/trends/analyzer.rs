//! Spending trend analyzer.
//!
//! Aggregates historical expenses by category and month, computing
//! month-over-month deltas, three-month rolling averages, and anomaly
//! flags for the target month.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use solvency_shared::types::CategoryId;

use super::error::TrendError;
use super::types::{SpendingTrendEntry, TrendDirection, TrendReport};
use crate::transaction::Transaction;

/// Display name for spending without an assigned category.
const UNCATEGORIZED: &str = "Uncategorized";

/// Percent-change magnitude within which a category counts as stable.
const STABILITY_THRESHOLD: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Fraction of the three-month average beyond which the target month
/// is flagged unusual (0.5 = 50%).
const UNUSUAL_DEVIATION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// A calendar month, as (year, 1-indexed month).
type YearMonth = (i32, u32);

#[derive(Default)]
struct CategoryAccumulator {
    name: Option<String>,
    current: Decimal,
    previous: Decimal,
    two_back: Decimal,
    current_count: usize,
}

/// Analyzer for month-over-month category spending.
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Analyzes category spending for the given target month.
    ///
    /// Only expense transactions participate; income and transfers in
    /// the input pass through unsummed. A category appears in the
    /// report when it has any expense activity in the target month or
    /// the two months before it.
    ///
    /// # Errors
    ///
    /// Returns `TrendError::InvalidMonth` when `month` is not 1-12.
    pub fn analyze(
        transactions: &[Transaction],
        year: i32,
        month: u32,
    ) -> Result<TrendReport, TrendError> {
        if month == 0 || month > 12 {
            return Err(TrendError::InvalidMonth(month));
        }

        let current = (year, month);
        let previous = previous_month(current);
        let two_back = previous_month(previous);

        let mut categories: HashMap<Option<CategoryId>, CategoryAccumulator> = HashMap::new();

        for tx in transactions.iter().filter(|t| t.is_expense()) {
            let tx_month = (tx.transaction_date.year(), tx.transaction_date.month());
            if tx_month != current && tx_month != previous && tx_month != two_back {
                continue;
            }

            let acc = categories.entry(tx.category_id).or_default();
            if acc.name.is_none() {
                acc.name.clone_from(&tx.category_name);
            }

            if tx_month == current {
                acc.current += tx.amount;
                acc.current_count += 1;
            } else if tx_month == previous {
                acc.previous += tx.amount;
            } else {
                acc.two_back += tx.amount;
            }
        }

        let mut trends: Vec<SpendingTrendEntry> = categories
            .into_iter()
            .map(|(category_id, acc)| Self::build_entry(category_id, acc))
            .collect();

        // Largest current-month spend first; name breaks ties so the
        // output is deterministic.
        trends.sort_by(|a, b| {
            b.current_month
                .cmp(&a.current_month)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        let total_current_month: Decimal = trends.iter().map(|t| t.current_month).sum();
        let total_previous_month: Decimal = trends.iter().map(|t| t.previous_month).sum();
        let overall_percent_change = percent_change(total_current_month, total_previous_month);

        let top_categories: Vec<SpendingTrendEntry> = trends.iter().take(3).cloned().collect();
        let unusual_categories: Vec<SpendingTrendEntry> =
            trends.iter().filter(|t| t.is_unusual).cloned().collect();

        let average_daily_spending =
            total_current_month / Decimal::from(days_in_month(year, month));

        Ok(TrendReport {
            trends,
            total_current_month,
            total_previous_month,
            overall_percent_change,
            top_categories,
            unusual_categories,
            average_daily_spending,
        })
    }

    fn build_entry(
        category_id: Option<CategoryId>,
        acc: CategoryAccumulator,
    ) -> SpendingTrendEntry {
        let percent_change = percent_change(acc.current, acc.previous);

        let trend = if percent_change > STABILITY_THRESHOLD {
            TrendDirection::Increasing
        } else if percent_change < -STABILITY_THRESHOLD {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        };

        // Zero-spend months count as zero, not excluded; a genuinely
        // new category is dampened instead of looking established.
        let three_month_average =
            (acc.current + acc.previous + acc.two_back) / Decimal::from(3);

        let is_unusual = if three_month_average.is_zero() {
            acc.current > Decimal::ZERO
        } else {
            (acc.current - three_month_average).abs() > three_month_average * UNUSUAL_DEVIATION
        };

        SpendingTrendEntry {
            category_id,
            category_name: acc.name.unwrap_or_else(|| UNCATEGORIZED.to_string()),
            current_month: acc.current,
            previous_month: acc.previous,
            percent_change,
            trend,
            three_month_average,
            transaction_count: acc.current_count,
            is_unusual,
        }
    }
}

/// Month-over-month change in percent, with explicit zero guards:
/// a new category reports +100%, no activity at all reports 0%.
fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    } else {
        (current - previous) / previous * Decimal::ONE_HUNDRED
    }
}

/// The month immediately before, handling the January rollover.
fn previous_month((year, month): YearMonth) -> YearMonth {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Calendar days in a month, leap years included.
fn days_in_month(year: i32, month: u32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| first + chrono::Days::new(28));

    (next_first - first).num_days()
}
