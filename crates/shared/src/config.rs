//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Forecast calculation settings.
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Forecast result cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Forecast calculation settings.
///
/// These are the workspace-level defaults; individual users can
/// override them through the settings surface upstream of the core.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Balance floor below which a day is classified as danger.
    #[serde(default = "default_minimum_safe_balance")]
    pub minimum_safe_balance: Decimal,
    /// Days of average spending to keep as reserve after any payment.
    #[serde(default = "default_safety_buffer_days")]
    pub safety_buffer_days: u32,
    /// Multiplier of the median above which a transaction is treated
    /// as a one-off outlier and excluded from spending averages.
    #[serde(default = "default_outlier_multiplier")]
    pub outlier_multiplier: Decimal,
}

fn default_minimum_safe_balance() -> Decimal {
    Decimal::ZERO
}

fn default_safety_buffer_days() -> u32 {
    7
}

fn default_outlier_multiplier() -> Decimal {
    Decimal::from(3)
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            minimum_safe_balance: default_minimum_safe_balance(),
            safety_buffer_days: default_safety_buffer_days(),
            outlier_multiplier: default_outlier_multiplier(),
        }
    }
}

/// Forecast result cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached forecast results.
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    /// Time-to-live for each cached result, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    100
}

fn default_cache_ttl_secs() -> u64 {
    300 // 5 minutes
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SOLVENCY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
