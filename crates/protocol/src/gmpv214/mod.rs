//! # GMP 21.4
//!
//! Same vocabularies and entity commands as 20.08. Conversion is reached
//! through the vocabulary type itself:
//!
//! ```rust
//! use gmp_protocol::gmpv214::{HostsOrdering, Vocabulary};
//!
//! let ordering = HostsOrdering::from_string(Some("random")).unwrap();
//! assert_eq!(ordering, Some(HostsOrdering::Random));
//! ```

pub use gmp_core::Vocabulary;

pub use crate::gmpv208::entities::*;
pub use crate::types::{
    AggregateStatistic, FeedType, FilterType, HostsOrdering, PermissionSubjectType, SortOrder,
    TicketStatus, TimeUnit, UserAuthType,
};

/// `(major, minor)` protocol version of this dialect
pub const PROTOCOL_VERSION: (u32, u32) = (21, 4);

pub fn get_protocol_version() -> (u32, u32) {
    PROTOCOL_VERSION
}
