//! Day-by-day balance projection with risk classification.

pub mod batch;
pub mod cache;
pub mod engine;
pub mod error;
pub mod types;


pub use batch::{project_batch, AccountForecastRequest};
pub use cache::{ForecastCache, ForecastKey};
pub use engine::ForecastEngine;
pub use error::ForecastError;
pub use types::{
    DailyBreakdown, DailyForecast, ForecastConfidence, ForecastResult, ForecastSettings, RiskLevel,
};
