use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BASE_CEILING_MULTIPLE, BASE_FRACTION, HEALTH_RATE, MINIMUM_WAGE, PENSION_RATE,
};

/// Errors raised by an invalid [`ContributionConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum wage must be positive, got {0}")]
    InvalidMinimumWage(Decimal),

    #[error("base fraction must be between 0 and 1, got {0}")]
    InvalidBaseFraction(Decimal),

    #[error("base ceiling multiple must be at least 1, got {0}")]
    InvalidBaseCeilingMultiple(Decimal),

    #[error("health rate must be between 0 and 1, got {0}")]
    InvalidHealthRate(Decimal),

    #[error("pension rate must be between 0 and 1, got {0}")]
    InvalidPensionRate(Decimal),
}

/// Numeric parameters of the calculation for the current year.
///
/// `Default` is the legal constant set from [`crate::constants`]. Fields
/// missing from a deserialised document fall back to those defaults, so a
/// config file only needs the values it overrides; unknown keys are rejected.
///
/// ```
/// use rust_decimal_macros::dec;
/// use contrib_core::ContributionConfig;
///
/// let config = ContributionConfig::default();
///
/// assert_eq!(config.minimum_wage, dec!(1423500));
/// assert_eq!(config.base_ceiling(), dec!(35587500));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContributionConfig {
    /// Legal monthly minimum wage; also the floor of the contribution base.
    pub minimum_wage: Decimal,

    /// Share of income that forms the contribution base.
    pub base_fraction: Decimal,

    /// Minimum wages that cap the contribution base.
    pub base_ceiling_multiple: Decimal,

    pub health_rate: Decimal,

    pub pension_rate: Decimal,
}

impl Default for ContributionConfig {
    fn default() -> Self {
        Self {
            minimum_wage: MINIMUM_WAGE,
            base_fraction: BASE_FRACTION,
            base_ceiling_multiple: BASE_CEILING_MULTIPLE,
            health_rate: HEALTH_RATE,
            pension_rate: PENSION_RATE,
        }
    }
}

impl ContributionConfig {
    /// Lowest contribution base.
    pub fn base_floor(&self) -> Decimal {
        self.minimum_wage
    }

    /// Highest contribution base.
    pub fn base_ceiling(&self) -> Decimal {
        self.minimum_wage * self.base_ceiling_multiple
    }

    /// Checks every value against its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `minimum_wage` is not positive
    /// - `base_fraction`, `health_rate` or `pension_rate` is not in (0, 1]
    /// - `base_ceiling_multiple` is below 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum_wage <= Decimal::ZERO {
            return Err(ConfigError::InvalidMinimumWage(self.minimum_wage));
        }
        if !is_fraction(self.base_fraction) {
            return Err(ConfigError::InvalidBaseFraction(self.base_fraction));
        }
        if self.base_ceiling_multiple < Decimal::ONE {
            return Err(ConfigError::InvalidBaseCeilingMultiple(
                self.base_ceiling_multiple,
            ));
        }
        if !is_fraction(self.health_rate) {
            return Err(ConfigError::InvalidHealthRate(self.health_rate));
        }
        if !is_fraction(self.pension_rate) {
            return Err(ConfigError::InvalidPensionRate(self.pension_rate));
        }
        Ok(())
    }
}

fn is_fraction(value: Decimal) -> bool {
    value > Decimal::ZERO && value <= Decimal::ONE
}
