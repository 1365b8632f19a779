//! Outlier-resistant average daily spending estimator.
//!
//! A one-time large purchase (a car repair, a yearly insurance bill)
//! would skew a naive daily average upward for months. The estimator
//! excludes transactions far above the median before averaging, so the
//! figure tracks routine spending.

use rust_decimal::Decimal;

use super::types::{EstimateConfidence, SpendingEstimate};
use crate::transaction::Transaction;

/// Default multiplier of the median above which a transaction is
/// excluded as a one-off outlier.
pub const DEFAULT_OUTLIER_MULTIPLIER: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Days of history required for a high-confidence estimate.
const HIGH_CONFIDENCE_DAYS: i64 = 30;

/// Days of history required for a medium-confidence estimate.
const MEDIUM_CONFIDENCE_DAYS: i64 = 14;

/// Estimator for robust average daily spending.
pub struct SpendingEstimator;

impl SpendingEstimator {
    /// Estimates average daily spending from historical transactions.
    ///
    /// The caller restricts `transactions` to the lookback window
    /// (typically 90 days); only expense transactions participate.
    /// A non-positive `outlier_multiplier` falls back to the default
    /// rather than failing - the estimator degrades, it never errors.
    #[must_use]
    pub fn estimate(transactions: &[Transaction], outlier_multiplier: Decimal) -> SpendingEstimate {
        let expenses: Vec<&Transaction> =
            transactions.iter().filter(|t| t.is_expense()).collect();

        if expenses.is_empty() {
            return SpendingEstimate::empty();
        }

        let multiplier = if outlier_multiplier > Decimal::ZERO {
            outlier_multiplier
        } else {
            DEFAULT_OUTLIER_MULTIPLIER
        };

        let threshold = Self::median(&expenses) * multiplier;
        let filtered: Vec<&Transaction> = expenses
            .iter()
            .copied()
            .filter(|t| t.amount <= threshold)
            .collect();

        // When every transaction exceeds the threshold relative to the
        // median (tiny, skewed samples), fall back to the full set and
        // report reduced confidence instead of an empty average.
        let (survivors, capped) = if filtered.is_empty() {
            (expenses, true)
        } else {
            (filtered, false)
        };

        let total_spending: Decimal = survivors.iter().map(|t| t.amount).sum();
        let days_analyzed = Self::span_days(&survivors);
        let average_daily_spending = total_spending / Decimal::from(days_analyzed);

        let mut confidence = Self::confidence_for_span(days_analyzed);
        if capped {
            confidence = confidence.min(EstimateConfidence::Medium);
        }

        SpendingEstimate {
            average_daily_spending,
            confidence,
            transaction_count: survivors.len(),
            total_spending,
            days_analyzed,
        }
    }

    /// Median transaction amount. `transactions` must be non-empty.
    fn median(transactions: &[&Transaction]) -> Decimal {
        let mut amounts: Vec<Decimal> = transactions.iter().map(|t| t.amount).collect();
        amounts.sort_unstable();

        let mid = amounts.len() / 2;
        if amounts.len() % 2 == 0 {
            (amounts[mid - 1] + amounts[mid]) / Decimal::TWO
        } else {
            amounts[mid]
        }
    }

    /// Inclusive calendar span between the earliest and latest
    /// transaction date. Single-day history counts as 1 day so the
    /// average never divides by zero.
    fn span_days(transactions: &[&Transaction]) -> i64 {
        let earliest = transactions.iter().map(|t| t.transaction_date).min();
        let latest = transactions.iter().map(|t| t.transaction_date).max();

        match (earliest, latest) {
            (Some(first), Some(last)) => ((last - first).num_days() + 1).max(1),
            _ => 1,
        }
    }

    fn confidence_for_span(days: i64) -> EstimateConfidence {
        if days >= HIGH_CONFIDENCE_DAYS {
            EstimateConfidence::High
        } else if days >= MEDIUM_CONFIDENCE_DAYS {
            EstimateConfidence::Medium
        } else {
            EstimateConfidence::None
        }
    }
}
