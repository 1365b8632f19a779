//! Trend analysis error types.

use thiserror::Error;

/// Trend-analysis errors.
#[derive(Debug, Error)]
pub enum TrendError {
    /// Month must be 1-indexed within a year.
    #[error("Invalid month {0}: must be between 1 and 12")]
    InvalidMonth(u32),
}
