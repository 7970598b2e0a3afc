//! Validation and calculation of independent-contractor contributions.
//!
//! [`validate`] checks a request for consistency; [`ContributionCalculator`]
//! turns a valid request into a [`ContributionBreakdown`](crate::ContributionBreakdown).

pub mod common;
mod engine;
mod error;
mod validator;

pub use engine::{ContributionCalculator, calculate};
pub use error::ContributionError;
pub use validator::validate;
