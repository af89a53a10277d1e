//! Common helpers shared by the pricing calculations.
//!
//! Money is always a [`Decimal`]; license and storage counts arrive as
//! plain integers from form input and are clamped before being priced.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use force_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(86.404)), dec!(86.40));
/// assert_eq!(round_half_up(dec!(86.405)), dec!(86.41));
/// assert_eq!(round_half_up(dec!(-86.405)), dec!(-86.41)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a count to a [`Decimal`], raising it to `minimum` first.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use force_core::calculations::common::floor_count;
///
/// assert_eq!(floor_count(0, 1), Decimal::ONE);
/// assert_eq!(floor_count(-3, 0), Decimal::ZERO);
/// assert_eq!(floor_count(25, 10), Decimal::from(25));
/// ```
pub fn floor_count(
    value: i64,
    minimum: i64,
) -> Decimal {
    Decimal::from(value.max(minimum))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(86.40));

        assert_eq!(result, dec!(86.40));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // floor_count tests
    // =========================================================================

    #[test]
    fn floor_count_raises_values_below_minimum() {
        assert_eq!(floor_count(0, 1), dec!(1));
        assert_eq!(floor_count(3, 10), dec!(10));
    }

    #[test]
    fn floor_count_keeps_values_at_or_above_minimum() {
        assert_eq!(floor_count(10, 10), dec!(10));
        assert_eq!(floor_count(250, 10), dec!(250));
    }

    #[test]
    fn floor_count_handles_negative_input() {
        assert_eq!(floor_count(-5, 0), dec!(0));
    }
}
