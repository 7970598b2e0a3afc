use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a contribution calculation.
///
/// Every amount is in pesos and non-negative. `total` is the sum of the five
/// contributions; the base itself is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionBreakdown {
    /// Contribution base (IBC).
    pub base: Decimal,

    /// Mandatory health contribution.
    pub health: Decimal,

    /// Mandatory pension contribution.
    pub pension: Decimal,

    /// Solidarity pension fund (FSP) surcharge; zero up to 4 minimum wages.
    pub solidarity_fund: Decimal,

    /// Occupational-risk (ARL) contribution; zero when not elected.
    pub risk: Decimal,

    /// Family-compensation-fund (CCF) contribution; zero when not elected.
    pub family_fund: Decimal,

    pub total: Decimal,
}

/// Renders one amount per line, trailing zeros stripped.
impl fmt::Display for ContributionBreakdown {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Contribution base (IBC): {:>14}", self.base.normalize())?;
        writeln!(f, "Health:                  {:>14}", self.health.normalize())?;
        writeln!(f, "Pension:                 {:>14}", self.pension.normalize())?;
        writeln!(f, "Solidarity fund (FSP):   {:>14}", self.solidarity_fund.normalize())?;
        writeln!(f, "Occupational risk (ARL): {:>14}", self.risk.normalize())?;
        writeln!(f, "Family fund (CCF):       {:>14}", self.family_fund.normalize())?;
        write!(f, "Total:                   {:>14}", self.total.normalize())
    }
}
