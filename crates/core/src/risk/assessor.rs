//! Payment risk assessor.
//!
//! For each planned expense, looks up the forecasted balance on its
//! due date and answers: can we afford this, and does paying it leave
//! the safety buffer intact? When the forecast cannot answer, the
//! assessor fails toward caution rather than silently omitting the
//! payment.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use solvency_shared::types::format_amount;

use super::types::{PaymentRisk, RiskAssessment};
use crate::forecast::{DailyForecast, RiskLevel};
use crate::transaction::Transaction;

/// Recommendation used when no forecast entry covers the due date.
const NO_FORECAST_RECOMMENDATION: &str = "Unable to calculate - insufficient forecast data";

/// Assessor for planned payment affordability.
pub struct RiskAssessor;

impl RiskAssessor {
    /// Assesses every planned expense against the daily forecast.
    ///
    /// `average_daily_spending` is the estimator's figure before the
    /// conservative multiplier; the safety buffer is that average times
    /// `safety_buffer_days`. Income and transfers are not obligations
    /// and are skipped. Output is sorted ascending by `days_until`,
    /// with ties keeping input order.
    #[must_use]
    pub fn assess(
        planned: &[Transaction],
        forecasts: &[DailyForecast],
        average_daily_spending: Decimal,
        safety_buffer_days: u32,
        today: NaiveDate,
    ) -> RiskAssessment {
        let safety_buffer = average_daily_spending * Decimal::from(safety_buffer_days);

        let mut payments: Vec<PaymentRisk> = planned
            .iter()
            .filter(|tx| tx.is_planned_expense())
            .map(|tx| Self::assess_payment(tx, forecasts, safety_buffer, safety_buffer_days, today))
            .collect();

        // Stable sort: equal days_until keep their input order.
        payments.sort_by_key(|p| p.days_until);

        RiskAssessment::from_payments(payments)
    }

    fn assess_payment(
        tx: &Transaction,
        forecasts: &[DailyForecast],
        safety_buffer: Decimal,
        safety_buffer_days: u32,
        today: NaiveDate,
    ) -> PaymentRisk {
        let due_date = tx.effective_date();
        let days_until = (due_date - today).num_days();

        // Date-only match against the forecast sequence.
        let Some(day) = forecasts.iter().find(|f| f.date == due_date) else {
            return PaymentRisk {
                transaction: tx.clone(),
                days_until,
                projected_balance_at_date: Decimal::ZERO,
                balance_after_payment: -tx.amount,
                risk_level: RiskLevel::Danger,
                recommendation: NO_FORECAST_RECOMMENDATION.to_string(),
                can_afford: false,
            };
        };

        // The day's starting balance is the projection before this
        // payment; the payment itself is already embedded in the
        // day's ending balance, so using it would double-count.
        let projected = day.breakdown.starting_balance;
        let after = projected - tx.amount;

        let (risk_level, can_afford, recommendation) = if after < Decimal::ZERO {
            (
                RiskLevel::Danger,
                false,
                format!(
                    "Insufficient funds on {due_date}: paying this would leave you {} short",
                    format_amount(after.abs())
                ),
            )
        } else if after < safety_buffer {
            (
                RiskLevel::Warning,
                true,
                format!(
                    "Payable, but only {} remains, under your {safety_buffer_days}-day buffer of {}",
                    format_amount(after),
                    format_amount(safety_buffer)
                ),
            )
        } else {
            (
                RiskLevel::Safe,
                true,
                format!("Safe to pay: {} remains after this payment", format_amount(after)),
            )
        };

        PaymentRisk {
            transaction: tx.clone(),
            days_until,
            projected_balance_at_date: projected,
            balance_after_payment: after,
            risk_level,
            recommendation,
            can_afford,
        }
    }
}
