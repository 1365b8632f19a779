//! Trend analysis data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solvency_shared::types::CategoryId;

/// Direction of month-over-month change in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// More than 5% above last month.
    Increasing,
    /// More than 5% below last month.
    Decreasing,
    /// Within 5% of last month.
    Stable,
}

/// Month-over-month analysis for one spending category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingTrendEntry {
    /// Category identifier; `None` groups uncategorized spending.
    pub category_id: Option<CategoryId>,
    /// Category display name.
    pub category_name: String,
    /// Spend in the target month.
    pub current_month: Decimal,
    /// Spend in the month immediately prior.
    pub previous_month: Decimal,
    /// Month-over-month change, in percent.
    pub percent_change: Decimal,
    /// Direction classification of the change.
    pub trend: TrendDirection,
    /// Average over the target month and the two before it; months
    /// with zero spend count as zero.
    pub three_month_average: Decimal,
    /// Number of transactions in the target month.
    pub transaction_count: usize,
    /// Whether the target month deviates more than 50% from the
    /// three-month average.
    pub is_unusual: bool,
}

/// Full spending trend report for a target month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    /// Per-category entries, sorted by current-month spend descending.
    pub trends: Vec<SpendingTrendEntry>,
    /// Total spend in the target month across all categories.
    pub total_current_month: Decimal,
    /// Total spend in the prior month across all categories.
    pub total_previous_month: Decimal,
    /// Overall month-over-month change, in percent.
    pub overall_percent_change: Decimal,
    /// The three largest categories by current-month spend.
    pub top_categories: Vec<SpendingTrendEntry>,
    /// Categories flagged as unusual.
    pub unusual_categories: Vec<SpendingTrendEntry>,
    /// Target-month spend divided by the month's calendar days.
    pub average_daily_spending: Decimal,
}
