//! Shared types and configuration for Solvency.
//!
//! This crate provides common types used across all other crates:
//! - Money formatting and rounding helpers with decimal precision
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
