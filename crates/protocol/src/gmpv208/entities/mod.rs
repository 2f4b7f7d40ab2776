//! Entity command builders of the 20.08 dialect
//!
//! Builders with required arguments return [`gmp_core::Result`] and fail with
//! [`GmpError::RequiredArgument`](gmp_core::GmpError::RequiredArgument) when
//! one is missing or empty.

pub mod feeds;
pub mod groups;
pub mod hosts;
pub mod tickets;
pub mod version;

pub use feeds::*;
pub use groups::*;
pub use hosts::*;
pub use tickets::*;
pub use version::*;

use gmp_core::{GmpError, Result};

/// Reject a missing or empty required argument
pub(crate) fn require<'a>(value: &'a str, argument: &str, function: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(GmpError::required_argument(argument, function))
    } else {
        Ok(value)
    }
}
