use rust_decimal::Decimal;
use thiserror::Error;

use crate::RiskLevel;

/// A contribution request that cannot be calculated.
///
/// Every variant is an invalid-request error: deterministic for the input and
/// never worth retrying. Boundaries map all of them to a client error and use
/// the `Display` message as the description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContributionError {
    #[error("income must be greater than zero, got {0}")]
    NonPositiveIncome(Decimal),

    #[error("family fund percent is required when contributing to the family fund (0.6 or 2.0)")]
    MissingFamilyFundPercent,

    #[error("family fund percent {0} was sent without electing the family fund")]
    UnexpectedFamilyFundPercent(Decimal),

    #[error("family fund percent must be 0.6 or 2.0, got {0}")]
    UnsupportedFamilyFundPercent(Decimal),

    #[error("risk level is required when contributing to occupational risk")]
    MissingRiskLevel,

    #[error("risk level {0} was sent without electing occupational risk")]
    UnexpectedRiskLevel(RiskLevel),

    /// Raised by the engine's own check on the family-fund rate, for callers
    /// that skipped validation.
    #[error("family fund rate {0} does not match a legal rate (0.006 or 0.02)")]
    UnrecognizedFamilyFundRate(Decimal),
}
