//! Forecast data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::spending::EstimateConfidence;

/// Severity classification of a balance projection or payment outcome.
///
/// Ordering matters: `Safe < Warning < Danger`, so severities can be
/// compared when aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Balance stays above the safety buffer.
    Safe,
    /// Balance is above the floor but inside the safety buffer.
    Warning,
    /// Balance falls below the minimum safe balance.
    Danger,
}

/// Per-day forecast confidence.
///
/// Degrades with distance from today because compounding daily
/// estimates compounds uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastConfidence {
    /// Long-range projection, or weak spending history.
    Low,
    /// Mid-range projection.
    Medium,
    /// Near-term projection backed by solid history.
    High,
}

/// User-tunable projection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSettings {
    /// Balance floor below which a day is classified as danger.
    pub minimum_safe_balance: Decimal,
    /// Days of average spending to keep as reserve.
    pub safety_buffer_days: u32,
    /// Outlier multiplier forwarded to the spending estimator.
    pub outlier_multiplier: Decimal,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            minimum_safe_balance: Decimal::ZERO,
            safety_buffer_days: 7,
            outlier_multiplier: crate::spending::DEFAULT_OUTLIER_MULTIPLIER,
        }
    }
}

impl From<&solvency_shared::config::ForecastConfig> for ForecastSettings {
    fn from(config: &solvency_shared::config::ForecastConfig) -> Self {
        Self {
            minimum_safe_balance: config.minimum_safe_balance,
            safety_buffer_days: config.safety_buffer_days,
            outlier_multiplier: config.outlier_multiplier,
        }
    }
}

/// The arithmetic behind a single projected day.
///
/// Invariant: `ending_balance = starting_balance + planned_income -
/// planned_expenses - estimated_daily_spending`, and each day's
/// starting balance equals the previous day's ending balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    /// Balance carried in from the previous day.
    pub starting_balance: Decimal,
    /// Planned income landing on this day.
    pub planned_income: Decimal,
    /// Planned expenses landing on this day.
    pub planned_expenses: Decimal,
    /// Conservative estimated routine spending for the day.
    pub estimated_daily_spending: Decimal,
    /// Balance carried out to the next day.
    pub ending_balance: Decimal,
}

/// One projected calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// The projected day.
    pub date: NaiveDate,
    /// End-of-day projected balance.
    pub projected_balance: Decimal,
    /// Confidence in this day's projection.
    pub confidence: ForecastConfidence,
    /// Risk classification of the end-of-day balance.
    pub risk_level: RiskLevel,
    /// The arithmetic behind the projection.
    pub breakdown: DailyBreakdown,
    /// Human-readable warnings for this day.
    pub warnings: Vec<String>,
}

/// Result of a forecast run over a date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// One entry per calendar day, ordered by date ascending.
    pub forecasts: Vec<DailyForecast>,
    /// Robust average daily spending (pre conservative multiplier).
    pub average_daily_spending: Decimal,
    /// Confidence of the spending estimate the projection is built on.
    pub spending_confidence: EstimateConfidence,
    /// False when the history is too thin to act on - the UI shows the
    /// forecast with a caveat or hides it entirely.
    pub should_display: bool,
    /// Whether this result was returned from the cache layer.
    pub cached: bool,
}
