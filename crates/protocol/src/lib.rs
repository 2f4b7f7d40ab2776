//! # GMP Protocol Library
//!
//! Builds and checks Greenbone Management Protocol (GMP) messages for the
//! 20.08, 21.4 and 22.4 dialects.
//!
//! ## Architecture
//!
//! ### 1. Vocabularies ([`types`])
//! The closed value sets used in requests (feed type, filter type, sort
//! order, ticket status, ...). Free-form strings are converted with
//! [`Vocabulary::from_string`](gmp_core::Vocabulary::from_string), which
//! treats `None`/`""` as absent and rejects unknown values with
//! `GmpError::InvalidArgument`.
//!
//! ### 2. Request building ([`xml`])
//! [`XmlCommand`] is a small element tree serialized with `quick_xml`.
//!
//! ### 3. Dialects ([`gmpv208`], [`gmpv214`], [`gmpv224`])
//! - **gmpv208**: vocabularies, `get_*_from_string` functions and the entity
//!   command builders (tickets, groups, hosts, feeds, version)
//! - **gmpv214** / **gmpv224**: re-export the same commands; conversion is
//!   called on the vocabulary type (`HostsOrdering::from_string`)
//!
//! ### 4. Responses and the client ([`response`], [`client`], [`version`])
//! Status checking, dialect selection from `<get_version/>`, and a
//! [`GmpClient`] over a caller-supplied [`Connection`].
//!
//! ## Usage Example
//!
//! ```rust
//! use gmp_protocol::gmpv208::{get_filter_type_from_string, get_hosts, FilterType};
//!
//! let filter_type = get_filter_type_from_string(Some("os")).unwrap();
//! assert_eq!(filter_type, Some(FilterType::OperatingSystem));
//!
//! let cmd = get_hosts(Some("name=foo"), None, Some(true));
//! assert_eq!(
//!     cmd.to_xml_string().unwrap(),
//!     r#"<get_assets type="host" filter="name=foo" details="1"/>"#
//! );
//! ```

pub mod client;
pub mod gmpv208;
pub mod gmpv214;
pub mod gmpv224;
pub mod response;
pub mod types;
pub mod version;
pub mod xml;

// Re-export commonly used items
pub use client::{Connection, GmpClient};
pub use response::Response;
pub use types::*;
pub use version::GmpVersion;
pub use xml::{XmlCommand, XmlCommandElement};
