//! Outlier-resistant average daily spending estimation.

pub mod estimator;
pub mod types;

pub use estimator::{SpendingEstimator, DEFAULT_OUTLIER_MULTIPLIER};
pub use types::{EstimateConfidence, SpendingEstimate};
