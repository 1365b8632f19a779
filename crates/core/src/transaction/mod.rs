//! Transaction input model shared by all calculators.

pub mod types;

pub use types::{Transaction, TransactionStatus, TransactionType};
