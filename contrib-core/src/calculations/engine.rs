//! Contribution calculation for independent contractors.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Contribution base (IBC): income × 40 %, clamped to [1, 25] minimum wages |
//! | 2 | Health: base × 12.5 % |
//! | 3 | Pension: base × 16 % |
//! | 4 | Solidarity fund: base × bracket rate, bracket chosen by base in minimum wages |
//! | 5 | Occupational risk (if elected): base × level rate |
//! | 6 | Family fund (if elected): base × 0.6 % or 2 % |
//! | 7 | Total: steps 2–6 |
//!
//! Amounts are rounded to whole pesos, half-up. The solidarity-fund and
//! family-fund amounts are the rounded base times the rate, with no further
//! rounding.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use contrib_core::{ContributionCalculator, ContributionRequest, RiskLevel};
//!
//! let calculator = ContributionCalculator::default();
//! let request = ContributionRequest::new(dec!(100000000)).with_risk_level(RiskLevel::Level5);
//!
//! let breakdown = calculator.validate_and_calculate(&request).unwrap();
//!
//! assert_eq!(breakdown.base, dec!(35587500));
//! assert_eq!(breakdown.risk, dec!(2476890));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::ContributionError;
use super::common::round_half_up;
use super::validator::validate;
use crate::{
    ConfigError, ContributionBreakdown, ContributionConfig, ContributionRequest,
    FamilyFundElection, FamilyFundRate, RiskElection, RiskLevel, SolidarityFundBracket,
};

/// Calculator holding a validated [`ContributionConfig`].
///
/// Stateless between calls; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ContributionCalculator {
    config: ContributionConfig,
}

impl ContributionCalculator {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any configuration value is out of range.
    pub fn new(config: ContributionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this calculator applies.
    pub fn config(&self) -> &ContributionConfig {
        &self.config
    }

    /// Validates `request`, then calculates it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContributionError`] found by [`validate`].
    pub fn validate_and_calculate(
        &self,
        request: &ContributionRequest,
    ) -> Result<ContributionBreakdown, ContributionError> {
        validate(request)?;
        self.calculate(request)
    }

    /// Calculates the contribution breakdown for a request.
    ///
    /// The request is expected to have passed [`validate`]; only the
    /// family-fund rate is checked again here.
    ///
    /// # Errors
    ///
    /// Returns [`ContributionError::UnrecognizedFamilyFundRate`] when the
    /// elected family-fund percent is not one of the legal rates.
    pub fn calculate(
        &self,
        request: &ContributionRequest,
    ) -> Result<ContributionBreakdown, ContributionError> {
        // Step 1
        let base = self.contribution_base(request.monthly_income);

        // Steps 2 and 3
        let health = self.health(base);
        let pension = self.pension(base);

        // Step 4
        let solidarity_fund = self.solidarity_fund(base);

        // Step 5
        let risk = match request.risk_election() {
            RiskElection::Contributing(level) => self.risk(base, level),
            RiskElection::NotContributing => Decimal::ZERO,
        };

        // Step 6
        let family_fund = match request.family_fund_election() {
            FamilyFundElection::Contributing(percent) => self.family_fund(base, percent)?,
            FamilyFundElection::NotContributing => Decimal::ZERO,
        };

        // Step 7
        let total = health + pension + solidarity_fund + risk + family_fund;

        Ok(ContributionBreakdown {
            base,
            health,
            pension,
            solidarity_fund,
            risk,
            family_fund,
            total,
        })
    }

    /// Derives the contribution base (IBC) from monthly income.
    ///
    /// Below the floor the base is the minimum wage itself; above the ceiling
    /// it is the ceiling. Otherwise the raw base is rounded to whole pesos.
    fn contribution_base(
        &self,
        monthly_income: Decimal,
    ) -> Decimal {
        let raw = monthly_income * self.config.base_fraction;

        if raw < self.config.base_floor() {
            debug!(
                raw_base = %raw,
                floor = %self.config.base_floor(),
                "Contribution base below floor; using minimum wage"
            );
            return self.config.minimum_wage;
        }

        let ceiling = self.config.base_ceiling();
        if raw > ceiling {
            debug!(
                raw_base = %raw,
                ceiling = %ceiling,
                "Contribution base above ceiling; capping"
            );
            return ceiling;
        }

        round_half_up(raw)
    }

    fn health(
        &self,
        base: Decimal,
    ) -> Decimal {
        round_half_up(base * self.config.health_rate)
    }

    fn pension(
        &self,
        base: Decimal,
    ) -> Decimal {
        round_half_up(base * self.config.pension_rate)
    }

    /// Solidarity pension fund surcharge for the bracket `base` falls in.
    fn solidarity_fund(
        &self,
        base: Decimal,
    ) -> Decimal {
        let multiples = base / self.config.minimum_wage;
        let bracket = SolidarityFundBracket::for_multiple(multiples);

        debug!(
            base = %base,
            multiples = %multiples,
            bracket = ?bracket,
            "Selected solidarity fund bracket"
        );

        round_half_up(base) * bracket.rate()
    }

    /// Occupational-risk contribution; the level rate is in percentage points.
    fn risk(
        &self,
        base: Decimal,
        level: RiskLevel,
    ) -> Decimal {
        round_half_up(base * (level.rate() / Decimal::ONE_HUNDRED))
    }

    /// Family-fund contribution at the legal rate matching `percent`.
    fn family_fund(
        &self,
        base: Decimal,
        percent: Decimal,
    ) -> Result<Decimal, ContributionError> {
        let fraction = percent / Decimal::ONE_HUNDRED;

        let Some(rate) = FamilyFundRate::from_fraction(fraction) else {
            warn!(
                percent = %percent,
                fraction = %fraction,
                "Family fund rate does not match a legal rate"
            );
            return Err(ContributionError::UnrecognizedFamilyFundRate(fraction));
        };

        Ok(round_half_up(base) * rate.fraction())
    }
}

/// Calculates `request` with the legal default configuration.
///
/// The request is expected to have passed [`validate`].
///
/// # Errors
///
/// See [`ContributionCalculator::calculate`].
pub fn calculate(request: &ContributionRequest) -> Result<ContributionBreakdown, ContributionError> {
    ContributionCalculator::default().calculate(request)
}
