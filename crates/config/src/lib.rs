//! GMP Client Configuration
//!
//! Loads client defaults from a `key = value` file:
//!
//! ```text
//! # gmp.conf
//! protocol_version = 22.4
//! sort_order = descending
//! feed_type = nvt
//! ```
//!
//! Vocabulary options go through the same conversion as every other input:
//! an empty value means "no default", an unknown value is an error.
//!
//! `protocol_version` is the dialect a client starts with before (or instead
//! of) asking the manager, see [`ClientConfig::client`].

use std::fs;
use std::path::Path;

use gmp_core::{GmpError, Vocabulary};
use gmp_protocol::{Connection, FeedType, GmpClient, GmpVersion, SortOrder};

/// Configuration loading errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Value {
        line: usize,
        #[source]
        source: GmpError,
    },
}

impl From<ConfigError> for GmpError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(err) => GmpError::Io(err),
            other => GmpError::Config(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Dialect a new client speaks until the manager is asked (from "protocol_version")
    pub protocol_version: GmpVersion,
    /// Default sort order for listings (from "sort_order")
    pub sort_order: Option<SortOrder>,
    /// Default feed for feed status requests (from "feed_type")
    pub feed_type: Option<FeedType>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            protocol_version: GmpVersion::default(),
            sort_order: None,
            feed_type: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse {
                    line: index + 1,
                    message: format!("expected key = value, got \"{}\"", line),
                });
            };

            config
                .parse_option(key.trim(), value.trim())
                .map_err(|source| ConfigError::Value {
                    line: index + 1,
                    source,
                })?;
        }

        Ok(config)
    }

    fn parse_option(&mut self, key: &str, value: &str) -> gmp_core::Result<()> {
        match key {
            "protocol_version" => {
                self.protocol_version = GmpVersion::from_version_string(value)?;
            }
            "sort_order" => self.sort_order = SortOrder::from_string(Some(value))?,
            "feed_type" => self.feed_type = FeedType::from_string(Some(value))?,
            _ => {
                tracing::warn!(key, "ignoring unknown configuration option");
            }
        }
        Ok(())
    }

    /// Wrap a connection in a client speaking the configured dialect
    ///
    /// [`GmpClient::determine_version`] still replaces it with what the
    /// manager reports.
    pub fn client<C: Connection>(&self, connection: C) -> GmpClient<C> {
        GmpClient::with_version(connection, self.protocol_version)
    }

    /// Log a configuration summary
    pub fn display(&self) {
        fn or_unset<V: Vocabulary>(value: Option<V>) -> &'static str {
            value.map(|v| v.value()).unwrap_or("(unset)")
        }

        tracing::info!("GMP client configuration:");
        tracing::info!("    Protocol version: {} ({})", self.protocol_version, self.protocol_version.module_name());
        tracing::info!("    Sort order: {}", or_unset(self.sort_order));
        tracing::info!("    Feed type: {}", or_unset(self.feed_type));
    }
}
