//! Spending estimate data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How much the daily spending estimate can be trusted.
///
/// Ordering matters: `None < Medium < High`, so estimates can be
/// capped with `min` when the inputs weaken them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateConfidence {
    /// Not enough history to trust the figure; shown only with a caveat.
    None,
    /// 14-29 days of history.
    Medium,
    /// At least 30 days of history.
    High,
}

/// Result of the outlier-resistant daily spending estimation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingEstimate {
    /// Robust average spent per calendar day.
    pub average_daily_spending: Decimal,
    /// Confidence in the average.
    pub confidence: EstimateConfidence,
    /// Number of expense transactions that survived outlier exclusion.
    pub transaction_count: usize,
    /// Total spending across the surviving transactions.
    pub total_spending: Decimal,
    /// Inclusive day span between the earliest and latest surviving
    /// transaction (calendar gaps count; never zero for non-empty input).
    pub days_analyzed: i64,
}

impl SpendingEstimate {
    /// The estimate returned for an empty expense history.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            average_daily_spending: Decimal::ZERO,
            confidence: EstimateConfidence::None,
            transaction_count: 0,
            total_spending: Decimal::ZERO,
            days_analyzed: 0,
        }
    }
}
