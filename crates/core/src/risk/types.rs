//! Payment risk data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::forecast::RiskLevel;
use crate::transaction::Transaction;

/// Affordability assessment for one planned payment.
///
/// Lives for the duration of a single assessment call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRisk {
    /// The planned expense being assessed.
    pub transaction: Transaction,
    /// Whole days until the payment is due. Negative when overdue.
    pub days_until: i64,
    /// Projected balance on the due date, before this payment.
    pub projected_balance_at_date: Decimal,
    /// Balance left after making the payment.
    pub balance_after_payment: Decimal,
    /// Severity classification of the outcome.
    pub risk_level: RiskLevel,
    /// Human-readable recommendation, amounts formatted to 2 dp.
    pub recommendation: String,
    /// Whether the projected balance covers the payment at all.
    pub can_afford: bool,
}

/// Assessment across all planned payments, sorted soonest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Per-payment risks, ascending by `days_until` (stable on ties).
    pub payments: Vec<PaymentRisk>,
    /// Number of payments classified danger.
    pub danger_count: usize,
    /// Number of payments classified warning.
    pub warning_count: usize,
    /// Number of payments classified safe.
    pub safe_count: usize,
    /// Due date of the soonest danger payment, if any.
    pub next_danger_date: Option<NaiveDate>,
}

impl RiskAssessment {
    /// Builds the summary counts from an already-sorted payment list.
    #[must_use]
    pub fn from_payments(payments: Vec<PaymentRisk>) -> Self {
        let danger_count = payments
            .iter()
            .filter(|p| p.risk_level == RiskLevel::Danger)
            .count();
        let warning_count = payments
            .iter()
            .filter(|p| p.risk_level == RiskLevel::Warning)
            .count();
        let safe_count = payments
            .iter()
            .filter(|p| p.risk_level == RiskLevel::Safe)
            .count();
        let next_danger_date = payments
            .iter()
            .find(|p| p.risk_level == RiskLevel::Danger)
            .map(|p| p.transaction.effective_date());

        Self {
            payments,
            danger_count,
            warning_count,
            safe_count,
            next_danger_date,
        }
    }
}
