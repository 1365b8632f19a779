//! Forecast engine for day-by-day balance projection.
//!
//! The engine walks forward from the current balance, applying planned
//! transactions and a conservative estimate of routine spending. The
//! deliberate pessimism (overestimated spend, confidence that degrades
//! with distance) exists so users are warned about shortfalls early
//! rather than surprised by them.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use solvency_shared::types::{format_amount, round_money};

use super::error::ForecastError;
use super::types::{
    DailyBreakdown, DailyForecast, ForecastConfidence, ForecastResult, ForecastSettings, RiskLevel,
};
use crate::spending::{EstimateConfidence, SpendingEstimator};
use crate::transaction::{Transaction, TransactionStatus, TransactionType};

/// Safety margin applied to the estimated daily spend (1.10x).
const CONSERVATIVE_MULTIPLIER: Decimal = Decimal::from_parts(110, 0, 0, false, 2);

/// Maximum supported forecast window, in days.
const MAX_FORECAST_DAYS: i64 = 365;

/// Days of history below which the forecast is not worth displaying.
const MIN_HISTORY_DAYS: i64 = 14;

/// Horizon (days from today) within which spending confidence carries
/// through unchanged.
const NEAR_TERM_DAYS: i64 = 14;

/// Horizon beyond which confidence is capped at medium; past this it
/// drops to low.
const MID_TERM_DAYS: i64 = 30;

/// Engine for running daily balance projections.
pub struct ForecastEngine;

impl ForecastEngine {
    /// Projects the balance for each day of the inclusive window.
    ///
    /// `historical` feeds the spending estimator; `planned` supplies
    /// future income and expenses (transfers are ignored). `today`
    /// anchors the per-day confidence horizon and is injected
    /// explicitly so results are reproducible.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidWindow` if `start > end`, or
    /// `ForecastError::WindowTooLong` past the 365-day horizon.
    pub fn project(
        current_balance: Decimal,
        historical: &[Transaction],
        planned: &[Transaction],
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
        settings: &ForecastSettings,
    ) -> Result<ForecastResult, ForecastError> {
        Self::validate_window(start, end)?;

        let estimate = SpendingEstimator::estimate(historical, settings.outlier_multiplier);
        let should_display = estimate.days_analyzed >= MIN_HISTORY_DAYS
            && estimate.confidence != EstimateConfidence::None;

        let daily_spend = round_money(estimate.average_daily_spending * CONSERVATIVE_MULTIPLIER);
        let buffer = daily_spend * Decimal::from(settings.safety_buffer_days);

        let by_date = Self::planned_by_date(planned);

        let day_count = usize::try_from((end - start).num_days() + 1).unwrap_or(0);
        let mut forecasts = Vec::with_capacity(day_count);
        let mut balance = current_balance;

        for date in start.iter_days().take_while(|d| *d <= end) {
            let (planned_income, planned_expenses) = by_date
                .get(&date)
                .copied()
                .unwrap_or((Decimal::ZERO, Decimal::ZERO));

            let starting_balance = balance;
            let ending_balance =
                starting_balance + planned_income - planned_expenses - daily_spend;

            let risk_level = Self::classify_risk(ending_balance, settings.minimum_safe_balance, buffer);
            let confidence = Self::confidence_at(date, today, estimate.confidence);
            let warnings = Self::day_warnings(
                risk_level,
                starting_balance,
                planned_expenses,
                settings,
            );

            forecasts.push(DailyForecast {
                date,
                projected_balance: ending_balance,
                confidence,
                risk_level,
                breakdown: DailyBreakdown {
                    starting_balance,
                    planned_income,
                    planned_expenses,
                    estimated_daily_spending: daily_spend,
                    ending_balance,
                },
                warnings,
            });

            balance = ending_balance;
        }

        Ok(ForecastResult {
            forecasts,
            average_daily_spending: estimate.average_daily_spending,
            spending_confidence: estimate.confidence,
            should_display,
            cached: false,
        })
    }

    /// Validates a forecast window.
    ///
    /// # Errors
    ///
    /// See [`Self::project`].
    pub fn validate_window(start: NaiveDate, end: NaiveDate) -> Result<(), ForecastError> {
        if start > end {
            return Err(ForecastError::InvalidWindow { start, end });
        }

        let days = (end - start).num_days() + 1;
        if days > MAX_FORECAST_DAYS {
            return Err(ForecastError::WindowTooLong {
                days,
                max: MAX_FORECAST_DAYS,
            });
        }

        Ok(())
    }

    /// Classifies an end-of-day balance against the floor and buffer.
    #[must_use]
    pub fn classify_risk(
        ending_balance: Decimal,
        minimum_safe_balance: Decimal,
        safety_buffer: Decimal,
    ) -> RiskLevel {
        if ending_balance < minimum_safe_balance {
            RiskLevel::Danger
        } else if ending_balance < safety_buffer {
            RiskLevel::Warning
        } else {
            RiskLevel::Safe
        }
    }

    /// Per-day confidence: the spending confidence carried through
    /// near-term, capped at medium mid-term, and low beyond a month.
    fn confidence_at(
        date: NaiveDate,
        today: NaiveDate,
        spending: EstimateConfidence,
    ) -> ForecastConfidence {
        let days_out = (date - today).num_days();

        let from_history = match spending {
            EstimateConfidence::High => ForecastConfidence::High,
            EstimateConfidence::Medium => ForecastConfidence::Medium,
            EstimateConfidence::None => ForecastConfidence::Low,
        };

        if days_out <= NEAR_TERM_DAYS {
            from_history
        } else if days_out <= MID_TERM_DAYS {
            from_history.min(ForecastConfidence::Medium)
        } else {
            ForecastConfidence::Low
        }
    }

    /// Sums planned income and expenses per effective date.
    ///
    /// Only planned-status income and expense transactions count;
    /// transfers and completed transactions pass through untouched.
    fn planned_by_date(planned: &[Transaction]) -> HashMap<NaiveDate, (Decimal, Decimal)> {
        let mut by_date: HashMap<NaiveDate, (Decimal, Decimal)> = HashMap::new();

        for tx in planned {
            if tx.status != TransactionStatus::Planned {
                continue;
            }
            let entry = by_date.entry(tx.effective_date()).or_default();
            match tx.transaction_type {
                TransactionType::Income => entry.0 += tx.amount,
                TransactionType::Expense => entry.1 += tx.amount,
                TransactionType::TransferIn | TransactionType::TransferOut => {}
            }
        }

        by_date
    }

    fn day_warnings(
        risk_level: RiskLevel,
        starting_balance: Decimal,
        planned_expenses: Decimal,
        settings: &ForecastSettings,
    ) -> Vec<String> {
        let mut warnings = Vec::new();

        match risk_level {
            RiskLevel::Danger => warnings.push(format!(
                "Balance falls below the {} minimum safe balance",
                format_amount(settings.minimum_safe_balance)
            )),
            RiskLevel::Warning => warnings.push(format!(
                "Balance is within the {}-day safety buffer",
                settings.safety_buffer_days
            )),
            RiskLevel::Safe => {}
        }

        if starting_balance > Decimal::ZERO && planned_expenses > starting_balance / Decimal::TWO {
            warnings.push(format!(
                "Planned expenses of {} exceed half of the day's starting balance",
                format_amount(planned_expenses)
            ));
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rust_decimal_macros::dec;
    use solvency_shared::types::TransactionId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(
        amount: Decimal,
        tx_type: TransactionType,
        status: TransactionStatus,
        on: NaiveDate,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            amount,
            description: "tx".to_string(),
            transaction_type: tx_type,
            status,
            transaction_date: on,
            planned_date: (status == TransactionStatus::Planned).then_some(on),
            category_id: None,
            category_name: None,
        }
    }

    /// 60 days of 10/day spending, ending yesterday.
    fn steady_history(today: NaiveDate) -> Vec<Transaction> {
        (1..=60)
            .map(|i| {
                tx(
                    dec!(10),
                    TransactionType::Expense,
                    TransactionStatus::Completed,
                    today - Days::new(i),
                )
            })
            .collect()
    }

    #[test]
    fn test_one_forecast_per_day_inclusive() {
        let today = date(2026, 3, 1);
        let result = ForecastEngine::project(
            dec!(1000),
            &steady_history(today),
            &[],
            today,
            today + Days::new(9),
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        assert_eq!(result.forecasts.len(), 10);
        assert_eq!(result.forecasts[0].date, today);
        assert_eq!(result.forecasts[9].date, today + Days::new(9));
    }

    #[test]
    fn test_daily_spend_is_conservative() {
        let today = date(2026, 3, 1);
        let result = ForecastEngine::project(
            dec!(1000),
            &steady_history(today),
            &[],
            today,
            today,
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        // Average is 10/day over the 60-day span; projection applies 1.10x.
        assert_eq!(result.average_daily_spending, dec!(10));
        assert_eq!(
            result.forecasts[0].breakdown.estimated_daily_spending,
            dec!(11)
        );
    }

    #[test]
    fn test_planned_transactions_land_on_their_day() {
        let today = date(2026, 3, 1);
        let planned = vec![
            tx(
                dec!(500),
                TransactionType::Income,
                TransactionStatus::Planned,
                today + Days::new(1),
            ),
            tx(
                dec!(200),
                TransactionType::Expense,
                TransactionStatus::Planned,
                today + Days::new(1),
            ),
            // Transfers never enter the math.
            tx(
                dec!(9999),
                TransactionType::TransferIn,
                TransactionStatus::Planned,
                today + Days::new(1),
            ),
        ];

        let result = ForecastEngine::project(
            dec!(1000),
            &steady_history(today),
            &planned,
            today,
            today + Days::new(2),
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        let day1 = &result.forecasts[1];
        assert_eq!(day1.breakdown.planned_income, dec!(500));
        assert_eq!(day1.breakdown.planned_expenses, dec!(200));

        let day0 = &result.forecasts[0];
        assert_eq!(day0.breakdown.planned_income, dec!(0));
    }

    #[test]
    fn test_daily_spend_applies_even_without_planned_activity() {
        let today = date(2026, 3, 1);
        let result = ForecastEngine::project(
            dec!(100),
            &steady_history(today),
            &[],
            today,
            today + Days::new(1),
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        assert_eq!(result.forecasts[0].breakdown.ending_balance, dec!(89));
        assert_eq!(result.forecasts[1].breakdown.ending_balance, dec!(78));
    }

    #[test]
    fn test_chain_invariant() {
        let today = date(2026, 3, 1);
        let planned = vec![tx(
            dec!(300),
            TransactionType::Income,
            TransactionStatus::Planned,
            today + Days::new(3),
        )];
        let result = ForecastEngine::project(
            dec!(500),
            &steady_history(today),
            &planned,
            today,
            today + Days::new(13),
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        for pair in result.forecasts.windows(2) {
            assert_eq!(
                pair[0].breakdown.ending_balance,
                pair[1].breakdown.starting_balance
            );
        }
    }

    #[test]
    fn test_risk_levels_as_balance_falls() {
        let today = date(2026, 3, 1);
        let settings = ForecastSettings::default();
        // Buffer is 11 * 7 = 77 with the steady history.
        let result = ForecastEngine::project(
            dec!(100),
            &steady_history(today),
            &[],
            today,
            today + Days::new(10),
            today,
            &settings,
        )
        .unwrap();

        // Day 0 ends at 89: above the buffer? 89 > 77, safe.
        assert_eq!(result.forecasts[0].risk_level, RiskLevel::Safe);
        // Day 2 ends at 67: inside the buffer.
        assert_eq!(result.forecasts[2].risk_level, RiskLevel::Warning);
        // Day 10 ends at -21: below the zero floor.
        assert_eq!(result.forecasts[10].risk_level, RiskLevel::Danger);
        assert!(!result.forecasts[10].warnings.is_empty());
    }

    #[test]
    fn test_confidence_degrades_with_distance() {
        let today = date(2026, 3, 1);
        let result = ForecastEngine::project(
            dec!(10000),
            &steady_history(today),
            &[],
            today,
            today + Days::new(40),
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        assert_eq!(result.spending_confidence, EstimateConfidence::High);
        assert_eq!(result.forecasts[0].confidence, ForecastConfidence::High);
        assert_eq!(result.forecasts[14].confidence, ForecastConfidence::High);
        assert_eq!(result.forecasts[15].confidence, ForecastConfidence::Medium);
        assert_eq!(result.forecasts[30].confidence, ForecastConfidence::Medium);
        assert_eq!(result.forecasts[31].confidence, ForecastConfidence::Low);
    }

    #[test]
    fn test_thin_history_suppresses_display() {
        let today = date(2026, 3, 1);
        // Only 5 days of history.
        let history: Vec<Transaction> = (1..=5)
            .map(|i| {
                tx(
                    dec!(10),
                    TransactionType::Expense,
                    TransactionStatus::Completed,
                    today - Days::new(i),
                )
            })
            .collect();

        let result = ForecastEngine::project(
            dec!(1000),
            &history,
            &[],
            today,
            today + Days::new(7),
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        assert!(!result.should_display);
        // Forecasts are still generated for callers that want them.
        assert_eq!(result.forecasts.len(), 8);
    }

    #[test]
    fn test_empty_history_still_projects() {
        let today = date(2026, 3, 1);
        let result = ForecastEngine::project(
            dec!(1000),
            &[],
            &[],
            today,
            today + Days::new(3),
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        assert!(!result.should_display);
        assert_eq!(result.average_daily_spending, dec!(0));
        // With no spending signal the balance only moves on planned days.
        assert_eq!(result.forecasts[3].projected_balance, dec!(1000));
    }

    #[test]
    fn test_negative_starting_balance() {
        let today = date(2026, 3, 1);
        let result = ForecastEngine::project(
            dec!(-50),
            &steady_history(today),
            &[],
            today,
            today,
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        assert_eq!(result.forecasts[0].risk_level, RiskLevel::Danger);
        assert_eq!(result.forecasts[0].projected_balance, dec!(-61));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let today = date(2026, 3, 10);
        let result = ForecastEngine::project(
            dec!(0),
            &[],
            &[],
            today,
            today - Days::new(1),
            today,
            &ForecastSettings::default(),
        );

        assert!(matches!(result, Err(ForecastError::InvalidWindow { .. })));
    }

    #[test]
    fn test_oversized_window_rejected() {
        let start = date(2026, 1, 1);
        let result = ForecastEngine::project(
            dec!(0),
            &[],
            &[],
            start,
            start + Days::new(365),
            start,
            &ForecastSettings::default(),
        );

        assert!(matches!(result, Err(ForecastError::WindowTooLong { .. })));
    }

    #[test]
    fn test_large_planned_expense_warning() {
        let today = date(2026, 3, 1);
        let planned = vec![tx(
            dec!(800),
            TransactionType::Expense,
            TransactionStatus::Planned,
            today,
        )];

        let result = ForecastEngine::project(
            dec!(1000),
            &steady_history(today),
            &planned,
            today,
            today,
            today,
            &ForecastSettings::default(),
        )
        .unwrap();

        assert!(result.forecasts[0]
            .warnings
            .iter()
            .any(|w| w.contains("half of the day's starting balance")));
    }
}
