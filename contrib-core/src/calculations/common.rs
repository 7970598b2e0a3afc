//! Common utility functions for contribution calculations.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::RATE_TOLERANCE;

/// Rounds a decimal value to whole pesos using half-up rounding.
///
/// Values at exactly .5 round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use contrib_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1234.4)), dec!(1234));
/// assert_eq!(round_half_up(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_half_up(dec!(-1234.5)), dec!(-1235)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Whether two rates differ by no more than [`RATE_TOLERANCE`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use contrib_core::calculations::common::within_tolerance;
///
/// assert!(within_tolerance(dec!(0.6), dec!(0.60005)));
/// assert!(!within_tolerance(dec!(0.6), dec!(0.61)));
/// ```
pub fn within_tolerance(
    a: Decimal,
    b: Decimal,
) -> bool {
    (a - b).abs() <= RATE_TOLERANCE
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
        let result = round_half_up(dec!(249999.49));

        assert_eq!(result, dec!(249999));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(177937.5));

        assert_eq!(result, dec!(177938));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-0.5));

        assert_eq!(result, dec!(-1));
    }

    #[test]
    fn round_half_up_preserves_whole_values() {
        let result = round_half_up(dec!(1423500));

        assert_eq!(result, dec!(1423500));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(Decimal::ZERO);

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // within_tolerance tests
    // =========================================================================

    #[test]
    fn within_tolerance_accepts_equal_values() {
        assert!(within_tolerance(dec!(2.0), dec!(2)));
    }

    #[test]
    fn within_tolerance_accepts_difference_at_tolerance() {
        assert!(within_tolerance(dec!(0.6), dec!(0.6001)));
    }

    #[test]
    fn within_tolerance_rejects_difference_beyond_tolerance() {
        assert!(!within_tolerance(dec!(0.6), dec!(0.6002)));
    }

    #[test]
    fn within_tolerance_is_symmetric() {
        assert_eq!(
            within_tolerance(dec!(2.00005), dec!(2)),
            within_tolerance(dec!(2), dec!(2.00005))
        );
    }
}
