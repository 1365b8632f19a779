//! Month-over-month category spending analysis.

pub mod analyzer;
pub mod error;
pub mod types;

pub use analyzer::TrendAnalyzer;
pub use error::TrendError;
pub use types::{SpendingTrendEntry, TrendDirection, TrendReport};
