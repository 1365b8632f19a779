//! Batch forecasting across many accounts.
//!
//! Each account forecast is independent of every other, so batch
//! callers (nightly digests, multi-account dashboards) fan out with
//! rayon. Results keep their request order.

use chrono::NaiveDate;
use rayon::prelude::*;
use rust_decimal::Decimal;

use super::cache::ForecastKey;
use super::engine::ForecastEngine;
use super::error::ForecastError;
use super::types::{ForecastResult, ForecastSettings};
use crate::transaction::Transaction;

/// One account's inputs for a batch forecast run.
#[derive(Debug, Clone)]
pub struct AccountForecastRequest {
    /// Workspace/account identity of this request.
    pub key: ForecastKey,
    /// Current actual balance of the account.
    pub current_balance: Decimal,
    /// Historical transactions for the spending estimator.
    pub historical: Vec<Transaction>,
    /// Planned transactions inside the forecast window.
    pub planned: Vec<Transaction>,
    /// Inclusive window start.
    pub start: NaiveDate,
    /// Inclusive window end.
    pub end: NaiveDate,
    /// Projection settings for this account.
    pub settings: ForecastSettings,
}

/// Runs forecasts for many accounts in parallel.
///
/// Output order matches input order; each entry pairs the request key
/// with its result so failures stay attributable to one account.
#[must_use]
pub fn project_batch(
    requests: &[AccountForecastRequest],
    today: NaiveDate,
) -> Vec<(ForecastKey, Result<ForecastResult, ForecastError>)> {
    tracing::debug!(accounts = requests.len(), "batch forecast fan-out");

    requests
        .par_iter()
        .map(|req| {
            let result = ForecastEngine::project(
                req.current_balance,
                &req.historical,
                &req.planned,
                req.start,
                req.end,
                today,
                &req.settings,
            );
            (req.key, result)
        })
        .collect()
}
