//! Consistency checks applied to a request before it is calculated.
//!
//! Checks run in a fixed order and the first failure is returned:
//!
//! | # | Check |
//! |---|-------|
//! | 1 | Income is greater than zero |
//! | 2 | Family fund elected ⇒ percent present |
//! | 3 | Family fund not elected ⇒ percent absent |
//! | 4 | Percent, when present, is 0.6 or 2.0 |
//! | 5 | Occupational risk elected ⇒ level present |
//! | 6 | Occupational risk not elected ⇒ level absent |

use rust_decimal::Decimal;
use tracing::debug;

use super::ContributionError;
use crate::{ContributionRequest, FamilyFundRate};

/// Validates a request, returning the first constraint it violates.
///
/// # Errors
///
/// Returns the [`ContributionError`] variant for the first failed check.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use contrib_core::{ContributionError, ContributionRequest, validate};
///
/// let ok = ContributionRequest::new(dec!(5000000)).with_family_fund_percent(dec!(0.6));
/// assert_eq!(validate(&ok), Ok(()));
///
/// let bad = ContributionRequest::new(dec!(5000000)).with_family_fund_percent(dec!(1.0));
/// assert_eq!(
///     validate(&bad),
///     Err(ContributionError::UnsupportedFamilyFundPercent(dec!(1.0)))
/// );
/// ```
pub fn validate(request: &ContributionRequest) -> Result<(), ContributionError> {
    check(request).inspect_err(|error| {
        debug!(%error, "contribution request rejected");
    })
}

fn check(request: &ContributionRequest) -> Result<(), ContributionError> {
    if request.monthly_income <= Decimal::ZERO {
        return Err(ContributionError::NonPositiveIncome(request.monthly_income));
    }

    match (request.contributes_to_family_fund, request.family_fund_percent) {
        (true, None) => return Err(ContributionError::MissingFamilyFundPercent),
        (false, Some(percent)) => {
            return Err(ContributionError::UnexpectedFamilyFundPercent(percent));
        }
        _ => {}
    }

    if let Some(percent) = request.family_fund_percent {
        if FamilyFundRate::from_percent(percent).is_none() {
            return Err(ContributionError::UnsupportedFamilyFundPercent(percent));
        }
    }

    match (request.contributes_to_risk, request.risk_level) {
        (true, None) => Err(ContributionError::MissingRiskLevel),
        (false, Some(level)) => Err(ContributionError::UnexpectedRiskLevel(level)),
        _ => Ok(()),
    }
}
