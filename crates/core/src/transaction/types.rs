//! Transaction domain types.
//!
//! These types mirror what the repository layer returns after
//! workspace/soft-delete filtering. Amounts are magnitudes - the sign
//! convention (expenses subtract, income adds) is applied by the
//! calculators, never stored inverted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solvency_shared::types::{CategoryId, TransactionId};

/// Transaction type classification.
///
/// Only `Income` and `Expense` participate in spending and trend math;
/// transfers move money between own accounts and are ignored by the
/// calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money coming in (salary, refunds).
    Income,
    /// Money going out to a third party.
    Expense,
    /// Transfer into this account from another own account.
    TransferIn,
    /// Transfer out of this account to another own account.
    TransferOut,
}

impl TransactionType {
    /// Returns true for transfer variants (excluded from all spend math).
    #[must_use]
    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::TransferIn | Self::TransferOut)
    }
}

/// Whether a transaction has actually happened or is only planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Reflected in the real account balance.
    Completed,
    /// Future-dated, not yet reflected in the balance.
    Planned,
}

/// A single transaction as fetched from the repository layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Amount as a non-negative magnitude.
    pub amount: Decimal,
    /// Human-readable description.
    pub description: String,
    /// Transaction type.
    pub transaction_type: TransactionType,
    /// Completed or planned.
    pub status: TransactionStatus,
    /// Date the transaction occurred (or was recorded).
    pub transaction_date: NaiveDate,
    /// Planned execution date, for planned transactions.
    pub planned_date: Option<NaiveDate>,
    /// Spending category, when assigned.
    pub category_id: Option<CategoryId>,
    /// Category display name, when assigned.
    pub category_name: Option<String>,
}

impl Transaction {
    /// The date the transaction takes effect: the planned date when
    /// present, otherwise the transaction date.
    #[must_use]
    pub fn effective_date(&self) -> NaiveDate {
        self.planned_date.unwrap_or(self.transaction_date)
    }

    /// Returns true for expense transactions.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Returns true for income transactions.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Returns true for planned (future) expenses - the only
    /// transactions that are risk-assessed.
    #[must_use]
    pub fn is_planned_expense(&self) -> bool {
        self.status == TransactionStatus::Planned && self.is_expense()
    }
}
