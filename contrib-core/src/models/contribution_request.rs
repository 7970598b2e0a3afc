use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Input to a contribution calculation.
///
/// The shape mirrors what callers submit: a flag per voluntary contribution
/// plus an optional detail field that must be present exactly when its flag
/// is set. The builder methods always produce consistent requests; a struct
/// literal can express inconsistent ones, which
/// [`validate`](crate::validate) rejects.
///
/// ```
/// use rust_decimal_macros::dec;
/// use contrib_core::{ContributionRequest, RiskElection, RiskLevel};
///
/// let request = ContributionRequest::new(dec!(5000000))
///     .with_risk_level(RiskLevel::Level3)
///     .with_family_fund_percent(dec!(2.0));
///
/// assert!(request.contributes_to_risk);
/// assert_eq!(request.risk_election(), RiskElection::Contributing(RiskLevel::Level3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRequest {
    pub monthly_income: Decimal,
    pub contributes_to_risk: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    pub contributes_to_family_fund: bool,
    /// Percentage points: `0.6` or `2.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_fund_percent: Option<Decimal>,
}

/// Occupational-risk election derived from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskElection {
    NotContributing,
    Contributing(RiskLevel),
}

/// Family-fund election derived from a request, carrying the submitted
/// percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyFundElection {
    NotContributing,
    Contributing(Decimal),
}

impl ContributionRequest {
    /// A request with only the mandatory contributions.
    pub fn new(monthly_income: Decimal) -> Self {
        Self {
            monthly_income,
            contributes_to_risk: false,
            risk_level: None,
            contributes_to_family_fund: false,
            family_fund_percent: None,
        }
    }

    pub fn with_risk_level(
        mut self,
        level: RiskLevel,
    ) -> Self {
        self.contributes_to_risk = true;
        self.risk_level = Some(level);
        self
    }

    /// Elects the family fund at `percent` percentage points.
    pub fn with_family_fund_percent(
        mut self,
        percent: Decimal,
    ) -> Self {
        self.contributes_to_family_fund = true;
        self.family_fund_percent = Some(percent);
        self
    }

    /// The risk election, or `NotContributing` when the flag is off or the
    /// level is missing.
    pub fn risk_election(&self) -> RiskElection {
        match (self.contributes_to_risk, self.risk_level) {
            (true, Some(level)) => RiskElection::Contributing(level),
            _ => RiskElection::NotContributing,
        }
    }

    /// The family-fund election, or `NotContributing` when the flag is off
    /// or the percent is missing.
    pub fn family_fund_election(&self) -> FamilyFundElection {
        match (self.contributes_to_family_fund, self.family_fund_percent) {
            (true, Some(percent)) => FamilyFundElection::Contributing(percent),
            _ => FamilyFundElection::NotContributing,
        }
    }
}
