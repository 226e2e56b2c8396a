//! Rounding and clamping helpers shared by the calculators.
//!
//! Currency figures are rounded to whole units at the points the tax and
//! scenario calculations define; ratios shown to the user keep two decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rounds to the nearest whole currency unit, midpoints toward positive
/// infinity.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use scorp_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(3671.49)), dec!(3671));
/// assert_eq!(round_whole(dec!(2895.5)), dec!(2896));
/// assert_eq!(round_whole(dec!(-2.5)), dec!(-2));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    (value + dec!(0.5)).floor()
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use scorp_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(31.19880)), dec!(31.20));
/// assert_eq!(round_half_up(dec!(-12.345)), dec!(-12.35));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_down_below_midpoint() {
        assert_eq!(round_whole(dec!(46844.16)), dec!(46844));
    }

    #[test]
    fn round_whole_rounds_up_at_midpoint() {
        assert_eq!(round_whole(dec!(1702.5)), dec!(1703));
    }

    #[test]
    fn round_whole_rounds_up_above_midpoint() {
        assert_eq!(round_whole(dec!(5535.92)), dec!(5536));
    }

    #[test]
    fn round_whole_negative_midpoint_moves_toward_positive() {
        assert_eq!(round_whole(dec!(-1702.5)), dec!(-1702));
    }

    #[test]
    fn round_whole_negative_below_midpoint() {
        assert_eq!(round_whole(dec!(-1702.6)), dec!(-1703));
    }

    #[test]
    fn round_whole_preserves_whole_values() {
        assert_eq!(round_whole(dec!(3672.0000)), dec!(3672));
    }

    #[test]
    fn round_whole_handles_zero() {
        assert_eq!(round_whole(Decimal::ZERO), Decimal::ZERO);
    }

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    // =========================================================================
    // max / min tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(-100.00), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn min_returns_smaller_value() {
        assert_eq!(min(dec!(500), dec!(300)), dec!(300));
        assert_eq!(min(dec!(120), dec!(300)), dec!(120));
    }
}
