//! Forecast result caching using Moka.
//!
//! The calculation core is referentially transparent; caching lives in
//! this explicitly-scoped layer so callers that want fresh numbers can
//! bypass it entirely. Entries are keyed per workspace and account and
//! expire on a TTL, since planned transactions change out from under
//! the projection.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use solvency_shared::config::CacheConfig;
use solvency_shared::types::{AccountId, WorkspaceId};

use super::error::ForecastError;
use super::types::ForecastResult;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache key: one forecast per account per workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForecastKey {
    /// Workspace the account belongs to.
    pub workspace: WorkspaceId,
    /// The forecasted account.
    pub account: AccountId,
}

/// Cache for forecast results.
///
/// Thread-safe and suitable for concurrent access from independent
/// callers.
#[derive(Clone)]
pub struct ForecastCache {
    cache: Cache<ForecastKey, Arc<ForecastResult>>,
}

impl ForecastCache {
    /// Creates a new forecast cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new forecast cache with custom configuration.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Creates a forecast cache from application configuration.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_config(config.capacity, config.ttl_secs)
    }

    /// Returns the cached forecast for `key`, or computes and caches it.
    ///
    /// Cached results come back with `cached: true`. Errors from the
    /// computation are never cached.
    ///
    /// # Errors
    ///
    /// Propagates any `ForecastError` from the computation.
    pub fn get_or_project<F>(
        &self,
        key: ForecastKey,
        project: F,
    ) -> Result<ForecastResult, ForecastError>
    where
        F: FnOnce() -> Result<ForecastResult, ForecastError>,
    {
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(workspace = %key.workspace, account = %key.account, "forecast cache hit");
            let mut result = (*cached).clone();
            result.cached = true;
            return Ok(result);
        }

        tracing::debug!(workspace = %key.workspace, account = %key.account, "forecast cache miss");
        let result = project()?;
        self.cache.insert(key, Arc::new(result.clone()));

        Ok(result)
    }

    /// Invalidates the cached forecast for one account.
    ///
    /// Call this when the account's transactions or settings change.
    pub fn invalidate(&self, key: &ForecastKey) {
        self.cache.invalidate(key);
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles expiry in the background, but calling this
    /// explicitly makes the entry count deterministic in tests.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for ForecastCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::engine::ForecastEngine;
    use crate::forecast::types::ForecastSettings;
    use chrono::{Days, NaiveDate};
    use rust_decimal_macros::dec;

    fn key() -> ForecastKey {
        ForecastKey {
            workspace: WorkspaceId::new(),
            account: AccountId::new(),
        }
    }

    fn project() -> Result<ForecastResult, ForecastError> {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        ForecastEngine::project(
            dec!(1000),
            &[],
            &[],
            today,
            today + Days::new(6),
            today,
            &ForecastSettings::default(),
        )
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let cache = ForecastCache::new();
        let k = key();

        let first = cache.get_or_project(k, project).unwrap();
        assert!(!first.cached, "First call should not be cached");

        let second = cache.get_or_project(k, project).unwrap();
        assert!(second.cached, "Second call should be cached");
        assert_eq!(first.forecasts.len(), second.forecasts.len());
    }

    #[test]
    fn test_different_accounts_do_not_collide() {
        let cache = ForecastCache::new();
        let k1 = key();
        let k2 = key();

        let _ = cache.get_or_project(k1, project).unwrap();
        let other = cache.get_or_project(k2, project).unwrap();

        assert!(!other.cached, "Different account should be a cache miss");
    }

    #[test]
    fn test_invalidate_specific() {
        let cache = ForecastCache::new();
        let k1 = key();
        let k2 = key();

        let _ = cache.get_or_project(k1, project).unwrap();
        let _ = cache.get_or_project(k2, project).unwrap();

        cache.invalidate(&k1);
        cache.run_pending_tasks();

        let r1 = cache.get_or_project(k1, project).unwrap();
        assert!(!r1.cached, "Invalidated key should be a cache miss");

        let r2 = cache.get_or_project(k2, project).unwrap();
        assert!(r2.cached, "Other key should still hit the cache");
    }

    #[test]
    fn test_invalidate_all() {
        let cache = ForecastCache::new();
        let k = key();

        let _ = cache.get_or_project(k, project).unwrap();
        cache.invalidate_all();
        cache.run_pending_tasks();

        let result = cache.get_or_project(k, project).unwrap();
        assert!(!result.cached);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = ForecastCache::new();
        let k = key();
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

        let failing = || {
            ForecastEngine::project(
                dec!(0),
                &[],
                &[],
                today,
                today - Days::new(1),
                today,
                &ForecastSettings::default(),
            )
        };

        assert!(cache.get_or_project(k, failing).is_err());

        // A later good computation should be a miss, not a poisoned hit.
        let result = cache.get_or_project(k, project).unwrap();
        assert!(!result.cached);
    }

    #[test]
    fn test_entry_count() {
        let cache = ForecastCache::with_config(10, 60);
        assert_eq!(cache.entry_count(), 0);

        let _ = cache.get_or_project(key(), project).unwrap();
        cache.run_pending_tasks();
        assert!(cache.entry_count() >= 1);
    }
}
