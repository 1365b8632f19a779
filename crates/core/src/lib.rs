//! Core forecasting and risk-assessment logic for Solvency.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. Every calculation is a deterministic function of its
//! inputs: "today" is always an explicit parameter, and no function
//! performs I/O.
//!
//! # Modules
//!
//! - `transaction` - Transaction input model shared by all calculators
//! - `spending` - Outlier-resistant average daily spending estimation
//! - `forecast` - Day-by-day balance projection with risk classification
//! - `risk` - Per-payment affordability assessment
//! - `trends` - Month-over-month category spending analysis

pub mod forecast;
pub mod risk;
pub mod spending;
pub mod transaction;
pub mod trends;
