//! # GMP Vocabularies
//!
//! The closed value sets used in GMP requests. Variant names are the
//! upper-case protocol names (`GVMD_DATA`, `SCAN_CONFIG`, ...); the wire
//! string is what ends up in the XML and is reproduced verbatim, irregular
//! casing included (`TicketStatus::Open` is sent as `"Open"`).
//!
//! All conversions go through [`Vocabulary::from_string`]:
//!
//! ```rust
//! use gmp_protocol::types::{FilterType, TicketStatus};
//! use gmp_core::Vocabulary;
//!
//! assert_eq!(FilterType::from_string(Some("vuln")).unwrap(), Some(FilterType::Vulnerability));
//! assert_eq!(TicketStatus::Open.value(), "Open");
//! ```

use gmp_core::{vocabulary, Vocabulary};

vocabulary! {
    /// Feed types
    pub enum FeedType {
        argument = "feed_type",
        function = "get_feed_type_from_string",
        Nvt("NVT") => "NVT",
        Cert("CERT") => "CERT",
        Scap("SCAP") => "SCAP",
        GvmdData("GVMD_DATA") => "GVMD_DATA",
    }
}

vocabulary! {
    /// Filter types
    ///
    /// Five wire tokens differ from their variant names and are accepted as
    /// exact-match aliases: `vuln`, `os`, `config`, `secinfo`, `tls_certificate`.
    pub enum FilterType {
        argument = "filter_type",
        function = "get_filter_type_from_string",
        Alert("ALERT") => "alert",
        Asset("ASSET") => "asset",
        ScanConfig("SCAN_CONFIG") => "config",
        Credential("CREDENTIAL") => "credential",
        Filter("FILTER") => "filter",
        Group("GROUP") => "group",
        Host("HOST") => "host",
        Note("NOTE") => "note",
        OperatingSystem("OPERATING_SYSTEM") => "os",
        Override("OVERRIDE") => "override",
        Permission("PERMISSION") => "permission",
        PortList("PORT_LIST") => "port_list",
        Report("REPORT") => "report",
        ReportFormat("REPORT_FORMAT") => "report_format",
        Result("RESULT") => "result",
        Role("ROLE") => "role",
        Schedule("SCHEDULE") => "schedule",
        AllSecinfo("ALL_SECINFO") => "secinfo",
        Tag("TAG") => "tag",
        Target("TARGET") => "target",
        Task("TASK") => "task",
        Ticket("TICKET") => "ticket",
        TlsCertificate("TLS_CERTIFICATE") => "tls_certificate",
        User("USER") => "user",
        Vulnerability("VULNERABILITY") => "vuln",
    }
    aliases {
        "vuln" => Vulnerability,
        "os" => OperatingSystem,
        "config" => ScanConfig,
        "secinfo" => AllSecinfo,
        "tls_certificate" => TlsCertificate,
    }
}

vocabulary! {
    /// Aggregate statistic types
    pub enum AggregateStatistic {
        argument = "aggregate_statistic",
        function = "get_aggregate_statistic_from_string",
        /// Number of items
        Count("COUNT") => "count",
        /// Cumulative number of items
        CCount("C_COUNT") => "c_count",
        /// Cumulative sum of values
        CSum("C_SUM") => "c_sum",
        /// Maximum value
        Max("MAX") => "max",
        /// Arithmetic mean of values
        Mean("MEAN") => "mean",
        /// Minimum value
        Min("MIN") => "min",
        /// Sum of values
        Sum("SUM") => "sum",
        /// Text column value
        Text("TEXT") => "text",
        /// Group or subgroup column value
        Value("VALUE") => "value",
    }
}

vocabulary! {
    /// Sort order
    pub enum SortOrder {
        argument = "sort_order",
        function = "get_sort_order_from_string",
        Ascending("ASCENDING") => "ascending",
        Descending("DESCENDING") => "descending",
    }
}

vocabulary! {
    /// Ticket status
    pub enum TicketStatus {
        argument = "ticket_status",
        function = "get_ticket_status_from_string",
        Open("OPEN") => "Open",
        Fixed("FIXED") => "Fixed",
        Closed("CLOSED") => "Closed",
    }
}

vocabulary! {
    /// Host ordering during scans
    pub enum HostsOrdering {
        argument = "hosts_ordering",
        function = "get_hosts_ordering_from_string",
        Sequential("SEQUENTIAL") => "sequential",
        Random("RANDOM") => "random",
        Reverse("REVERSE") => "reverse",
    }
}

vocabulary! {
    /// Permission subject type
    pub enum PermissionSubjectType {
        argument = "subject_type",
        function = "get_permission_subject_type_from_string",
        User("USER") => "user",
        Group("GROUP") => "group",
        Role("ROLE") => "role",
    }
}

vocabulary! {
    /// Time units
    pub enum TimeUnit {
        argument = "time_unit",
        function = "get_time_unit_from_string",
        Second("SECOND") => "second",
        Minute("MINUTE") => "minute",
        Hour("HOUR") => "hour",
        Day("DAY") => "day",
        Week("WEEK") => "week",
        Month("MONTH") => "month",
        Year("YEAR") => "year",
        Decade("DECADE") => "decade",
    }
}

vocabulary! {
    /// Sources allowed for authenticating a user
    pub enum UserAuthType {
        argument = "user_auth_type",
        function = "get_user_auth_type_from_string",
        File("FILE") => "file",
        LdapConnect("LDAP_CONNECT") => "ldap_connect",
        RadiusConnect("RADIUS_CONNECT") => "radius_connect",
    }
}

impl TicketStatus {
    /// Name of the note element that accompanies a change to this status
    /// (`open_note`, `fixed_note`, `closed_note`)
    pub fn note_element(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open_note",
            TicketStatus::Fixed => "fixed_note",
            TicketStatus::Closed => "closed_note",
        }
    }
}

/// Names and variants of every vocabulary, for listings and diagnostics
pub fn vocabularies() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    fn rows<V: Vocabulary>() -> Vec<(&'static str, &'static str)> {
        V::VARIANTS.iter().map(|v| (v.name(), v.value())).collect()
    }

    vec![
        (FeedType::ARGUMENT, rows::<FeedType>()),
        (FilterType::ARGUMENT, rows::<FilterType>()),
        (AggregateStatistic::ARGUMENT, rows::<AggregateStatistic>()),
        (SortOrder::ARGUMENT, rows::<SortOrder>()),
        (TicketStatus::ARGUMENT, rows::<TicketStatus>()),
        (HostsOrdering::ARGUMENT, rows::<HostsOrdering>()),
        (PermissionSubjectType::ARGUMENT, rows::<PermissionSubjectType>()),
        (TimeUnit::ARGUMENT, rows::<TimeUnit>()),
        (UserAuthType::ARGUMENT, rows::<UserAuthType>()),
    ]
}

/// Convert `value` with the vocabulary registered under `argument` and return
/// the variant's wire string
///
/// Used where the vocabulary is only known at runtime (command line, config).
/// An unknown vocabulary is reported as an invalid `vocabulary` argument.
pub fn convert_by_name(argument: &str, value: Option<&str>) -> gmp_core::Result<Option<&'static str>> {
    fn wire<V: Vocabulary>(value: Option<&str>) -> gmp_core::Result<Option<&'static str>> {
        Ok(V::from_string(value)?.map(|v| v.value()))
    }

    match argument {
        "feed_type" => wire::<FeedType>(value),
        "filter_type" => wire::<FilterType>(value),
        "aggregate_statistic" => wire::<AggregateStatistic>(value),
        "sort_order" => wire::<SortOrder>(value),
        "ticket_status" => wire::<TicketStatus>(value),
        "hosts_ordering" => wire::<HostsOrdering>(value),
        "subject_type" | "permission_subject_type" => wire::<PermissionSubjectType>(value),
        "time_unit" => wire::<TimeUnit>(value),
        "user_auth_type" => wire::<UserAuthType>(value),
        _ => Err(gmp_core::GmpError::invalid_argument("vocabulary", "convert_by_name")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmp_core::GmpError;
    use std::collections::HashSet;

    fn assert_case_insensitive<V: Vocabulary>() {
        for variant in V::VARIANTS {
            let name = variant.name();
            for input in [name.to_string(), name.to_lowercase(), name.to_uppercase()] {
                assert_eq!(
                    V::from_string(Some(&input)).unwrap(),
                    Some(*variant),
                    "Failed for {} in {}",
                    input,
                    V::ARGUMENT
                );
            }
        }
    }

    fn assert_absent<V: Vocabulary>() {
        assert_eq!(V::from_string(None).unwrap(), None);
        assert_eq!(V::from_string(Some("")).unwrap(), None);
    }

    fn assert_invalid<V: Vocabulary>() {
        match V::from_string(Some("not-a-real-value")) {
            Err(GmpError::InvalidArgument { argument, function }) => {
                assert_eq!(argument, V::ARGUMENT);
                assert_eq!(function, V::FUNCTION);
            }
            other => panic!("Expected InvalidArgument for {}, got {:?}", V::ARGUMENT, other),
        }
    }

    fn assert_unique_wire_values<V: Vocabulary>() {
        let values: HashSet<_> = V::VARIANTS.iter().map(|v| v.value()).collect();
        assert_eq!(values.len(), V::VARIANTS.len(), "duplicate wire value in {}", V::ARGUMENT);
    }

    fn check_all<V: Vocabulary>() {
        assert_case_insensitive::<V>();
        assert_absent::<V>();
        assert_invalid::<V>();
        assert_unique_wire_values::<V>();
    }

    #[test]
    fn test_every_vocabulary_contract() {
        check_all::<FeedType>();
        check_all::<FilterType>();
        check_all::<AggregateStatistic>();
        check_all::<SortOrder>();
        check_all::<TicketStatus>();
        check_all::<HostsOrdering>();
        check_all::<PermissionSubjectType>();
        check_all::<TimeUnit>();
        check_all::<UserAuthType>();
    }

    #[test]
    fn test_filter_type_aliases() {
        let cases = [
            ("vuln", FilterType::Vulnerability),
            ("os", FilterType::OperatingSystem),
            ("config", FilterType::ScanConfig),
            ("secinfo", FilterType::AllSecinfo),
            ("tls_certificate", FilterType::TlsCertificate),
        ];
        for (input, expected) in cases {
            assert_eq!(FilterType::from_string(Some(input)).unwrap(), Some(expected));
        }
    }

    #[test]
    fn test_filter_type_aliases_are_exact() {
        assert!(FilterType::from_string(Some("VULN")).is_err());
        assert!(FilterType::from_string(Some("Os")).is_err());
        // the name lookup still works for the long forms
        assert_eq!(
            FilterType::from_string(Some("operating_system")).unwrap(),
            Some(FilterType::OperatingSystem)
        );
    }

    #[test]
    fn test_ticket_status_wire_casing() {
        assert_eq!(TicketStatus::Open.value(), "Open");
        assert_eq!(TicketStatus::Fixed.value(), "Fixed");
        assert_eq!(TicketStatus::Closed.value(), "Closed");
        assert_eq!(TicketStatus::Open.name(), "OPEN");
        assert_eq!(TicketStatus::Open.to_string(), "Open");
    }

    #[test]
    fn test_ticket_status_note_element() {
        for status in TicketStatus::VARIANTS {
            assert_eq!(
                status.note_element(),
                format!("{}_note", status.name().to_lowercase())
            );
        }
    }

    #[test]
    fn test_feed_type_wire_values() {
        assert_eq!(FeedType::GvmdData.value(), "GVMD_DATA");
        assert_eq!(FeedType::from_value("SCAP"), Some(FeedType::Scap));
    }

    #[test]
    fn test_from_value_takes_only_wire_strings() {
        for variant in FilterType::VARIANTS {
            assert_eq!(FilterType::from_value(variant.value()), Some(*variant));
        }
        assert_eq!(FilterType::from_value("VULNERABILITY"), None);
        assert_eq!(TicketStatus::from_value("Open"), Some(TicketStatus::Open));
        assert_eq!(TicketStatus::from_value("open"), None);
    }

    #[test]
    fn test_vocabularies_listing() {
        let all = vocabularies();
        assert_eq!(all.len(), 9);
        let (name, rows) = &all[4];
        assert_eq!(*name, "ticket_status");
        assert_eq!(rows[0], ("OPEN", "Open"));
    }

    #[test]
    fn test_convert_by_name() {
        assert_eq!(convert_by_name("filter_type", Some("vuln")).unwrap(), Some("vuln"));
        assert_eq!(convert_by_name("ticket_status", Some("fixed")).unwrap(), Some("Fixed"));
        assert_eq!(convert_by_name("sort_order", None).unwrap(), None);

        let err = convert_by_name("colour", Some("red")).unwrap_err();
        assert_eq!(err.argument(), Some("vocabulary"));
    }
}
