//! # GMP 22.4
//!
//! Re-exports the 21.4 surface: vocabularies with associated conversion and
//! the shared entity commands.

pub use crate::gmpv214::*;

/// `(major, minor)` protocol version of this dialect
pub const PROTOCOL_VERSION: (u32, u32) = (22, 4);

pub fn get_protocol_version() -> (u32, u32) {
    PROTOCOL_VERSION
}
