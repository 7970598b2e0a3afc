//! Legal constants for the current contribution year.
//!
//! Amounts are in Colombian pesos (COP). Rates are fractions (`0.125` is
//! 12.5 %) unless the name says otherwise.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Legal monthly minimum wage (SMMLV) for 2025.
pub const MINIMUM_WAGE: Decimal = dec!(1423500);

/// Number of minimum wages that caps the contribution base.
pub const BASE_CEILING_MULTIPLE: Decimal = dec!(25);

/// Highest contribution base: 25 minimum wages.
pub const BASE_CEILING: Decimal = dec!(35587500);

/// Share of monthly income that forms the contribution base (IBC).
pub const BASE_FRACTION: Decimal = dec!(0.40);

/// Mandatory health contribution rate.
pub const HEALTH_RATE: Decimal = dec!(0.125);

/// Mandatory pension contribution rate.
pub const PENSION_RATE: Decimal = dec!(0.16);

/// Minimum-wage multiples up to which no solidarity-fund surcharge applies.
pub const SOLIDARITY_FUND_EXEMPT_MULTIPLE: Decimal = dec!(4);

/// Basic family-compensation-fund rate (0.6 %).
pub const FAMILY_FUND_BASIC_RATE: Decimal = dec!(0.006);

/// Full family-compensation-fund rate (2.0 %).
pub const FAMILY_FUND_FULL_RATE: Decimal = dec!(0.02);

/// Tolerance used when matching caller-supplied rates against the legal ones.
pub const RATE_TOLERANCE: Decimal = dec!(0.0001);
