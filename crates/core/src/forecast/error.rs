//! Forecast error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Forecast-related errors.
///
/// These cover programmer-level misuse of the window; data problems
/// (thin history, empty inputs) degrade gracefully instead of erroring.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Invalid window (start after end).
    #[error("Invalid forecast window: start {start} is after end {end}")]
    InvalidWindow {
        /// Window start date.
        start: NaiveDate,
        /// Window end date.
        end: NaiveDate,
    },

    /// Window exceeds the supported horizon.
    #[error("Forecast window of {days} days exceeds the {max}-day maximum")]
    WindowTooLong {
        /// Requested window length in days.
        days: i64,
        /// Maximum supported window length.
        max: i64,
    },
}
