//! Shared type definitions.

pub mod id;
pub mod money;

pub use id::{AccountId, CategoryId, TransactionId, WorkspaceId};
pub use money::{format_amount, round_money, CURRENCY_SYMBOL};
