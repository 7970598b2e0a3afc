use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::within_tolerance;
use crate::constants::{FAMILY_FUND_BASIC_RATE, FAMILY_FUND_FULL_RATE};

/// The two legal family-compensation-fund (CCF) rates for independent workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyFundRate {
    /// 0.6 %, covering recreation and training services only.
    Basic,
    /// 2.0 %, full affiliation including family subsidy.
    Full,
}

impl FamilyFundRate {
    pub const ALL: [FamilyFundRate; 2] = [Self::Basic, Self::Full];

    /// Rate as a fraction of the contribution base.
    pub fn fraction(&self) -> Decimal {
        match self {
            Self::Basic => FAMILY_FUND_BASIC_RATE,
            Self::Full => FAMILY_FUND_FULL_RATE,
        }
    }

    /// Rate in percentage points, the unit callers submit.
    pub fn percent(&self) -> Decimal {
        (self.fraction() * Decimal::ONE_HUNDRED).normalize()
    }

    /// Matches a rate given in percentage points (`0.6` or `2.0`).
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use contrib_core::FamilyFundRate;
    ///
    /// assert_eq!(FamilyFundRate::from_percent(dec!(0.6)), Some(FamilyFundRate::Basic));
    /// assert_eq!(FamilyFundRate::from_percent(dec!(2.00002)), Some(FamilyFundRate::Full));
    /// assert_eq!(FamilyFundRate::from_percent(dec!(1.0)), None);
    /// ```
    pub fn from_percent(percent: Decimal) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| within_tolerance(percent, rate.percent()))
    }

    /// Matches a rate given as a fraction (`0.006` or `0.02`).
    ///
    /// The tolerance applies in percentage points, exactly as in
    /// [`from_percent`](Self::from_percent), so `0.0061` is not `Basic`.
    pub fn from_fraction(fraction: Decimal) -> Option<Self> {
        Self::from_percent(fraction * Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for FamilyFundRate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
