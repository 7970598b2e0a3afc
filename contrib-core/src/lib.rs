//! Social-security contributions for independent contractors in Colombia.
//!
//! Given a monthly income and the voluntary elections (occupational risk,
//! family compensation fund), computes the contribution base (IBC) and the
//! health, pension, solidarity-fund, risk and family-fund amounts.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use contrib_core::{ContributionRequest, calculate, validate};
//!
//! let request = ContributionRequest::new(dec!(5000000));
//! validate(&request).unwrap();
//!
//! let breakdown = calculate(&request).unwrap();
//!
//! assert_eq!(breakdown.base, dec!(2000000));
//! assert_eq!(breakdown.total, dec!(570000));
//! ```

pub mod calculations;
pub mod constants;
pub mod models;

pub use calculations::{ContributionCalculator, ContributionError, calculate, validate};
pub use models::*;
