//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; these helpers cover the
//! rounding and display conventions used across the workspace.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol used for user-facing amounts (hryvnia).
///
/// All amounts reaching the core are already expressed in the
/// workspace currency; conversion happens upstream.
pub const CURRENCY_SYMBOL: &str = "₴";

/// Rounds a monetary amount to 2 decimal places.
///
/// Uses midpoint-away-from-zero, not the banker's rounding that
/// `Decimal::round_dp` defaults to, so half-cents round the way users
/// expect on statements.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary amount for user-facing text, e.g. `₴1400.00`.
///
/// Always renders exactly two decimal places.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{:.2}", round_money(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1400), "₴1400.00")]
    #[case(dec!(0), "₴0.00")]
    #[case(dec!(12.5), "₴12.50")]
    #[case(dec!(-3.335), "₴-3.34")]
    #[case(dec!(999.999), "₴1000.00")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
    }

    #[test]
    fn test_round_money_negative() {
        assert_eq!(round_money(dec!(-1.005)), dec!(-1.01));
    }
}
