//! gmp-cli - inspect GMP vocabularies and render request XML
//!
//! ```text
//! gmp-cli vocab filter_type --json
//! gmp-cli convert hosts_ordering RANDOM
//! gmp-cli --config gmp.conf dialect
//! gmp-cli dialect 20.08
//! gmp-cli --config gmp.conf request get-feed
//! gmp-cli request get-tickets --filter "status=Open" --sort-field name --sort-order descending
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use gmp_config::ClientConfig;
use gmp_core::{GmpError, Vocabulary};
// Every dialect re-exports the same request builders
use gmp_protocol::gmpv224 as gmp;
use gmp_protocol::{convert_by_name, vocabularies, FeedType, GmpVersion, SortOrder, XmlCommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gmp-cli", version, about = "Inspect GMP vocabularies and render request XML")]
struct Cli {
    /// Client configuration file (key = value)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the vocabularies, or the variants of one
    Vocab {
        /// Vocabulary argument name, e.g. filter_type
        name: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Convert a value and print its wire string
    Convert { vocabulary: String, value: String },
    /// Print the dialect for a reported manager version, or the configured one
    Dialect { version: Option<String> },
    /// Print the XML of a request
    Request {
        #[command(subcommand)]
        request: Request,
    },
}

#[derive(Subcommand, Debug)]
enum Request {
    GetFeeds,
    GetFeed {
        /// Feed type; falls back to feed_type from the configuration
        #[arg(long)]
        feed_type: Option<String>,
    },
    GetVersion,
    GetTickets {
        #[command(flatten)]
        listing: Listing,
        #[arg(long)]
        trash: bool,
    },
    GetTicket { ticket_id: String },
    DeleteTicket {
        ticket_id: String,
        #[arg(long)]
        ultimate: bool,
    },
    GetGroups {
        #[command(flatten)]
        listing: Listing,
        #[arg(long)]
        trash: bool,
    },
    GetHosts {
        #[command(flatten)]
        listing: Listing,
        #[arg(long)]
        details: bool,
    },
    CreateHost {
        name: String,
        #[arg(long)]
        comment: Option<String>,
    },
    CreateGroup {
        name: String,
        #[arg(long)]
        comment: Option<String>,
        /// Grant the group full permissions on itself
        #[arg(long)]
        special: bool,
        #[arg(long, value_delimiter = ',')]
        users: Vec<String>,
    },
}

/// Filter options shared by the listing requests
#[derive(Args, Debug, Default)]
struct Listing {
    #[arg(long)]
    filter: Option<String>,
    #[arg(long)]
    filter_id: Option<String>,
    #[arg(long)]
    sort_field: Option<String>,
    /// ascending or descending; falls back to sort_order from the configuration
    #[arg(long)]
    sort_order: Option<String>,
}

#[derive(Serialize, Debug)]
struct VocabularyListing {
    argument: &'static str,
    variants: Vec<VariantListing>,
}

#[derive(Serialize, Debug)]
struct VariantListing {
    name: &'static str,
    value: &'static str,
}

fn list_vocabularies(name: Option<&str>) -> anyhow::Result<Vec<VocabularyListing>> {
    let listings: Vec<VocabularyListing> = vocabularies()
        .into_iter()
        .filter(|(argument, _)| name.map_or(true, |name| name == *argument))
        .map(|(argument, rows)| VocabularyListing {
            argument,
            variants: rows
                .into_iter()
                .map(|(name, value)| VariantListing { name, value })
                .collect(),
        })
        .collect();

    if let (Some(name), true) = (name, listings.is_empty()) {
        bail!("unknown vocabulary \"{}\"", name);
    }
    Ok(listings)
}

fn render_vocabularies(listings: &[VocabularyListing], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(listings)?);
    }

    let mut out = String::new();
    for listing in listings {
        out.push_str(listing.argument);
        out.push('\n');
        for variant in &listing.variants {
            out.push_str(&format!("    {:<20} {}\n", variant.name, variant.value));
        }
    }
    Ok(out)
}

/// Append a `sort=` / `sort-reverse=` term to a filter string
fn filter_with_sort(
    filter: Option<&str>,
    sort_field: Option<&str>,
    order: Option<SortOrder>,
) -> Option<String> {
    let filter = filter.filter(|f| !f.is_empty());
    let Some(field) = sort_field.filter(|f| !f.is_empty()) else {
        return filter.map(str::to_string);
    };

    let keyword = match order {
        Some(SortOrder::Descending) => "sort-reverse",
        _ => "sort",
    };
    let term = format!("{}={}", keyword, field);

    Some(match filter {
        Some(filter) => format!("{} {}", filter, term),
        None => term,
    })
}

impl Listing {
    fn filter_string(&self, config: &ClientConfig) -> gmp_core::Result<Option<String>> {
        let order = SortOrder::from_string(self.sort_order.as_deref())?.or(config.sort_order);
        Ok(filter_with_sort(
            self.filter.as_deref(),
            self.sort_field.as_deref(),
            order,
        ))
    }
}

fn build_request(request: &Request, config: &ClientConfig) -> gmp_core::Result<XmlCommand> {
    let command = match request {
        Request::GetFeeds => gmp::get_feeds(),
        Request::GetFeed { feed_type } => {
            let feed_type = FeedType::from_string(feed_type.as_deref())?
                .or(config.feed_type)
                .ok_or_else(|| GmpError::required_argument("feed_type", "get_feed"))?;
            gmp::get_feed(feed_type)
        }
        Request::GetVersion => gmp::get_version(),
        Request::GetTickets { listing, trash } => {
            let filter = listing.filter_string(config)?;
            gmp::get_tickets(trash.then_some(true), filter.as_deref(), listing.filter_id.as_deref())
        }
        Request::GetTicket { ticket_id } => gmp::get_ticket(ticket_id)?,
        Request::DeleteTicket { ticket_id, ultimate } => gmp::delete_ticket(ticket_id, *ultimate)?,
        Request::GetGroups { listing, trash } => {
            let filter = listing.filter_string(config)?;
            gmp::get_groups(filter.as_deref(), listing.filter_id.as_deref(), trash.then_some(true))
        }
        Request::GetHosts { listing, details } => {
            let filter = listing.filter_string(config)?;
            gmp::get_hosts(filter.as_deref(), listing.filter_id.as_deref(), details.then_some(true))
        }
        Request::CreateHost { name, comment } => gmp::create_host(name, comment.as_deref())?,
        Request::CreateGroup {
            name,
            comment,
            special,
            users,
        } => {
            let users: Vec<&str> = users.iter().map(String::as_str).collect();
            gmp::create_group(name, comment.as_deref(), *special, &users)?
        }
    };
    Ok(command)
}

/// `gmpv214 21.4` style description of the selected dialect
fn describe_dialect(reported: Option<&str>, config: &ClientConfig) -> gmp_core::Result<String> {
    let version = match reported {
        Some(reported) => GmpVersion::from_version_string(reported)?,
        None => config.protocol_version,
    };
    Ok(format!("{} {}", version.module_name(), version))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ClientConfig> {
    let Some(path) = path else {
        return Ok(ClientConfig::default());
    };

    let config = ClientConfig::load_from_file(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    config.display();
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.cmd {
        Command::Vocab { name, json } => {
            let listings = list_vocabularies(name.as_deref())?;
            print!("{}", render_vocabularies(&listings, json)?);
            if json {
                println!();
            }
        }
        Command::Convert { vocabulary, value } => match convert_by_name(&vocabulary, Some(value.as_str()))? {
            Some(wire) => println!("{}", wire),
            None => info!(vocabulary = %vocabulary, "empty value, nothing to convert"),
        },
        Command::Dialect { version } => {
            println!("{}", describe_dialect(version.as_deref(), &config)?);
        }
        Command::Request { request } => {
            debug!(command = ?request, "rendering request");
            let command = build_request(&request, &config)?;
            println!("{}", command.to_xml_string()?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmp_protocol::HostsOrdering;

    fn render(args: &[&str], config: &ClientConfig) -> gmp_core::Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.cmd {
            Command::Request { request } => build_request(&request, config)?.to_xml_string(),
            other => panic!("Expected request, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_with_sort() {
        assert_eq!(filter_with_sort(None, None, None), None);
        assert_eq!(filter_with_sort(Some(""), None, None), None);
        assert_eq!(
            filter_with_sort(Some("name=foo"), None, Some(SortOrder::Descending)),
            Some("name=foo".to_string())
        );
        assert_eq!(
            filter_with_sort(None, Some("name"), None),
            Some("sort=name".to_string())
        );
        assert_eq!(
            filter_with_sort(Some("rows=10"), Some("severity"), Some(SortOrder::Descending)),
            Some("rows=10 sort-reverse=severity".to_string())
        );
    }

    #[test]
    fn test_request_get_feed() {
        let config = ClientConfig::default();
        assert_eq!(
            render(&["gmp-cli", "request", "get-feed", "--feed-type", "scap"], &config).unwrap(),
            r#"<get_feeds type="SCAP"/>"#
        );
        assert!(matches!(
            render(&["gmp-cli", "request", "get-feed"], &config),
            Err(GmpError::RequiredArgument { .. })
        ));
        assert!(matches!(
            render(&["gmp-cli", "request", "get-feed", "--feed-type", "foo"], &config),
            Err(GmpError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_request_uses_config_defaults() {
        let config = ClientConfig::parse("feed_type = cert\nsort_order = descending").unwrap();
        assert_eq!(
            render(&["gmp-cli", "request", "get-feed"], &config).unwrap(),
            r#"<get_feeds type="CERT"/>"#
        );
        assert_eq!(
            render(&["gmp-cli", "request", "get-hosts", "--sort-field", "name"], &config).unwrap(),
            r#"<get_assets type="host" filter="sort-reverse=name"/>"#
        );
        assert_eq!(
            render(
                &["gmp-cli", "request", "get-hosts", "--sort-field", "name", "--sort-order", "ascending"],
                &config
            )
            .unwrap(),
            r#"<get_assets type="host" filter="sort=name"/>"#
        );
    }

    #[test]
    fn test_request_tickets_and_groups() {
        let config = ClientConfig::default();
        assert_eq!(
            render(&["gmp-cli", "request", "get-tickets", "--trash"], &config).unwrap(),
            r#"<get_tickets trash="1"/>"#
        );
        assert_eq!(
            render(&["gmp-cli", "request", "delete-ticket", "t1", "--ultimate"], &config).unwrap(),
            r#"<delete_ticket ticket_id="t1" ultimate="1"/>"#
        );
        assert_eq!(
            render(&["gmp-cli", "request", "get-groups", "--filter-id", "f1"], &config).unwrap(),
            r#"<get_groups filt_id="f1"/>"#
        );
        assert_eq!(
            render(
                &["gmp-cli", "request", "create-group", "g", "--special", "--users", "alice,bob"],
                &config
            )
            .unwrap(),
            "<create_group><name>g</name><specials><full/></specials><users>alice,bob</users></create_group>"
        );
        assert!(matches!(
            render(&["gmp-cli", "request", "get-ticket", ""], &config),
            Err(GmpError::RequiredArgument { .. })
        ));
    }

    #[test]
    fn test_list_vocabularies() {
        let all = list_vocabularies(None).unwrap();
        assert_eq!(all.len(), vocabularies().len());

        let ordering = list_vocabularies(Some(HostsOrdering::ARGUMENT)).unwrap();
        assert_eq!(ordering.len(), 1);
        assert_eq!(ordering[0].variants.len(), 3);

        assert!(list_vocabularies(Some("colours")).is_err());
    }

    #[test]
    fn test_render_vocabularies_json() {
        let listings = list_vocabularies(Some("ticket_status")).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_vocabularies(&listings, true).unwrap()).unwrap();
        assert_eq!(json[0]["argument"], "ticket_status");
        assert_eq!(json[0]["variants"][0]["name"], "OPEN");
        assert_eq!(json[0]["variants"][0]["value"], "Open");

        let text = render_vocabularies(&listings, false).unwrap();
        assert!(text.starts_with("ticket_status\n"));
        assert!(text.contains("CLOSED"));
    }

    #[test]
    fn test_dialect_follows_configured_protocol_version() {
        let config = ClientConfig::default();
        assert_eq!(describe_dialect(None, &config).unwrap(), "gmpv224 22.4");

        let config = ClientConfig::parse("protocol_version = 21.4").unwrap();
        assert_eq!(describe_dialect(None, &config).unwrap(), "gmpv214 21.4");
        assert_eq!(describe_dialect(Some("20.10"), &config).unwrap(), "gmpv208 20.08");
        assert!(matches!(
            describe_dialect(Some("9.0"), &config),
            Err(GmpError::Gmp(_))
        ));

        let cli = Cli::try_parse_from(["gmp-cli", "dialect", "22.4"]).unwrap();
        assert!(matches!(cli.cmd, Command::Dialect { version: Some(ref v) } if v == "22.4"));
    }

    #[test]
    fn test_cli_parses_global_config() {
        let cli = Cli::try_parse_from(["gmp-cli", "vocab", "--config", "gmp.conf"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("gmp.conf")));
        assert!(matches!(cli.cmd, Command::Vocab { name: None, json: false }));
    }
}
