//! Conversion functions of the 20.08 dialect
//!
//! Each function is a thin wrapper over [`Vocabulary::from_string`]: `None`
//! and `""` give `Ok(None)`, unknown values give
//! [`GmpError::InvalidArgument`](gmp_core::GmpError::InvalidArgument) naming the
//! argument and the function.

use gmp_core::{Result, Vocabulary};

pub use crate::types::{
    AggregateStatistic, FeedType, FilterType, HostsOrdering, PermissionSubjectType, SortOrder,
    TicketStatus, TimeUnit, UserAuthType,
};

/// Convert a feed type string into a [`FeedType`]
pub fn get_feed_type_from_string(feed_type: Option<&str>) -> Result<Option<FeedType>> {
    FeedType::from_string(feed_type)
}

/// Convert a filter type string into a [`FilterType`]
///
/// The wire tokens `vuln`, `os`, `config`, `secinfo` and `tls_certificate`
/// are accepted as they appear on the wire.
pub fn get_filter_type_from_string(filter_type: Option<&str>) -> Result<Option<FilterType>> {
    FilterType::from_string(filter_type)
}

pub fn get_aggregate_statistic_from_string(
    aggregate_statistic: Option<&str>,
) -> Result<Option<AggregateStatistic>> {
    AggregateStatistic::from_string(aggregate_statistic)
}

pub fn get_sort_order_from_string(sort_order: Option<&str>) -> Result<Option<SortOrder>> {
    SortOrder::from_string(sort_order)
}

pub fn get_ticket_status_from_string(ticket_status: Option<&str>) -> Result<Option<TicketStatus>> {
    TicketStatus::from_string(ticket_status)
}

/// Convert a hosts ordering string into a [`HostsOrdering`]
pub fn get_hosts_ordering_from_string(
    hosts_ordering: Option<&str>,
) -> Result<Option<HostsOrdering>> {
    HostsOrdering::from_string(hosts_ordering)
}

pub fn get_permission_subject_type_from_string(
    subject_type: Option<&str>,
) -> Result<Option<PermissionSubjectType>> {
    PermissionSubjectType::from_string(subject_type)
}

pub fn get_time_unit_from_string(time_unit: Option<&str>) -> Result<Option<TimeUnit>> {
    TimeUnit::from_string(time_unit)
}

pub fn get_user_auth_type_from_string(
    user_auth_type: Option<&str>,
) -> Result<Option<UserAuthType>> {
    UserAuthType::from_string(user_auth_type)
}
