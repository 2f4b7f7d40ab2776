//! # GMP 20.08
//!
//! The base dialect. It owns the vocabularies, exposes the
//! `get_*_from_string` conversion functions and the entity command builders
//! that later dialects re-export.

pub mod entities;
pub mod types;

pub use entities::*;
pub use types::*;

/// `(major, minor)` protocol version of this dialect
pub const PROTOCOL_VERSION: (u32, u32) = (20, 8);

pub fn get_protocol_version() -> (u32, u32) {
    PROTOCOL_VERSION
}
