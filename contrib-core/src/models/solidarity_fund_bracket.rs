use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::SOLIDARITY_FUND_EXEMPT_MULTIPLE;

/// Solidarity pension fund (FSP) brackets.
///
/// Brackets are keyed by the contribution base expressed in minimum-wage
/// multiples. Each upper bound is inclusive: a base of exactly 16 minimum
/// wages falls in [`UpTo16`](Self::UpTo16), not [`UpTo17`](Self::UpTo17).
///
/// | Bracket  | Multiples   | Rate  |
/// |----------|-------------|-------|
/// | `UpTo4`  | ≤ 4         | 0 %   |
/// | `UpTo16` | > 4, ≤ 16   | 1 %   |
/// | `UpTo17` | > 16, ≤ 17  | 1.2 % |
/// | `UpTo18` | > 17, ≤ 18  | 1.4 % |
/// | `UpTo19` | > 18, ≤ 19  | 1.6 % |
/// | `UpTo20` | > 19, ≤ 20  | 1.8 % |
/// | `Above20`| > 20        | 2 %   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SolidarityFundBracket {
    UpTo4,
    UpTo16,
    UpTo17,
    UpTo18,
    UpTo19,
    UpTo20,
    Above20,
}

impl SolidarityFundBracket {
    /// Every bracket, in ascending order.
    pub const ALL: [SolidarityFundBracket; 7] = [
        Self::UpTo4,
        Self::UpTo16,
        Self::UpTo17,
        Self::UpTo18,
        Self::UpTo19,
        Self::UpTo20,
        Self::Above20,
    ];

    /// Selects the bracket for a base expressed in minimum-wage multiples.
    ///
    /// Total over every input: anything above 20 lands in the top bracket.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use contrib_core::SolidarityFundBracket;
    ///
    /// assert_eq!(SolidarityFundBracket::for_multiple(dec!(4)), SolidarityFundBracket::UpTo4);
    /// assert_eq!(SolidarityFundBracket::for_multiple(dec!(16.5)), SolidarityFundBracket::UpTo17);
    /// assert_eq!(SolidarityFundBracket::for_multiple(dec!(25)), SolidarityFundBracket::Above20);
    /// ```
    pub fn for_multiple(multiples: Decimal) -> Self {
        Self::ALL
            .into_iter()
            .find(|bracket| {
                bracket
                    .upper_bound()
                    .is_none_or(|bound| multiples <= bound)
            })
            .unwrap_or(Self::Above20)
    }

    /// Inclusive upper bound in minimum-wage multiples; `None` for the top bracket.
    pub fn upper_bound(&self) -> Option<Decimal> {
        match self {
            Self::UpTo4 => Some(SOLIDARITY_FUND_EXEMPT_MULTIPLE),
            Self::UpTo16 => Some(dec!(16)),
            Self::UpTo17 => Some(dec!(17)),
            Self::UpTo18 => Some(dec!(18)),
            Self::UpTo19 => Some(dec!(19)),
            Self::UpTo20 => Some(dec!(20)),
            Self::Above20 => None,
        }
    }

    /// Contribution rate as a fraction of the base.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::UpTo4 => Decimal::ZERO,
            Self::UpTo16 => dec!(0.01),
            Self::UpTo17 => dec!(0.012),
            Self::UpTo18 => dec!(0.014),
            Self::UpTo19 => dec!(0.016),
            Self::UpTo20 => dec!(0.018),
            Self::Above20 => dec!(0.02),
        }
    }
}

impl fmt::Display for SolidarityFundBracket {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.upper_bound() {
            Some(bound) => write!(f, "up to {bound} minimum wages"),
            None => f.write_str("above 20 minimum wages"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn for_multiple_selects_exempt_bracket_below_four() {
        assert_eq!(
            SolidarityFundBracket::for_multiple(dec!(1.405)),
            SolidarityFundBracket::UpTo4
        );
    }

    #[test]
    fn for_multiple_handles_zero() {
        assert_eq!(
            SolidarityFundBracket::for_multiple(Decimal::ZERO),
            SolidarityFundBracket::UpTo4
        );
    }

    #[test]
    fn for_multiple_treats_bounds_as_inclusive() {
        let cases = [
            (dec!(4), SolidarityFundBracket::UpTo4),
            (dec!(16), SolidarityFundBracket::UpTo16),
            (dec!(17), SolidarityFundBracket::UpTo17),
            (dec!(18), SolidarityFundBracket::UpTo18),
            (dec!(19), SolidarityFundBracket::UpTo19),
            (dec!(20), SolidarityFundBracket::UpTo20),
        ];

        for (multiples, expected) in cases {
            assert_eq!(SolidarityFundBracket::for_multiple(multiples), expected);
        }
    }

    #[test]
    fn for_multiple_moves_up_just_past_each_bound() {
        let cases = [
            (dec!(4.0001), SolidarityFundBracket::UpTo16),
            (dec!(16.0001), SolidarityFundBracket::UpTo17),
            (dec!(17.0001), SolidarityFundBracket::UpTo18),
            (dec!(18.0001), SolidarityFundBracket::UpTo19),
            (dec!(19.0001), SolidarityFundBracket::UpTo20),
            (dec!(20.0001), SolidarityFundBracket::Above20),
        ];

        for (multiples, expected) in cases {
            assert_eq!(SolidarityFundBracket::for_multiple(multiples), expected);
        }
    }

    #[test]
    fn exactly_sixteen_multiples_uses_one_percent() {
        let bracket = SolidarityFundBracket::for_multiple(dec!(16));

        assert_eq!(bracket.rate(), dec!(0.01));
    }

    #[test]
    fn rates_match_legal_table() {
        let rates: Vec<Decimal> = SolidarityFundBracket::ALL
            .iter()
            .map(SolidarityFundBracket::rate)
            .collect();

        assert_eq!(
            rates,
            vec![
                dec!(0),
                dec!(0.01),
                dec!(0.012),
                dec!(0.014),
                dec!(0.016),
                dec!(0.018),
                dec!(0.02)
            ]
        );
    }

    #[test]
    fn only_top_bracket_is_unbounded() {
        let unbounded: Vec<_> = SolidarityFundBracket::ALL
            .into_iter()
            .filter(|bracket| bracket.upper_bound().is_none())
            .collect();

        assert_eq!(unbounded, vec![SolidarityFundBracket::Above20]);
    }

    #[test]
    fn display_describes_bounds() {
        assert_eq!(
            SolidarityFundBracket::UpTo16.to_string(),
            "up to 16 minimum wages"
        );
        assert_eq!(
            SolidarityFundBracket::Above20.to_string(),
            "above 20 minimum wages"
        );
    }
}
