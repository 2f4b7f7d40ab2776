//! # GMP Client
//!
//! [`GmpClient`] sends [`XmlCommand`]s over a [`Connection`] and checks the
//! status of every response. Opening the connection (Unix socket, TLS, SSH)
//! and authenticating are left to the [`Connection`] implementation.
//!
//! ```rust,no_run
//! use gmp_protocol::client::{Connection, GmpClient};
//! use gmp_protocol::gmpv208::get_feeds;
//! # fn connect() -> Box<dyn Connection> { unimplemented!() }
//!
//! let mut client = GmpClient::new(connect());
//! let version = client.determine_version()?;
//! let feeds = client.send_command(&get_feeds())?;
//! println!("{} answered {}", version, feeds.name());
//! # Ok::<(), gmp_core::GmpError>(())
//! ```

use gmp_core::{GmpError, Result};
use tracing::{debug, info, warn};

use crate::gmpv208::get_version;
use crate::response::Response;
use crate::version::GmpVersion;
use crate::xml::XmlCommand;

/// Transport to a manager daemon
pub trait Connection {
    /// Send one serialized request
    fn send(&mut self, data: &str) -> Result<()>;

    /// Read one complete response document
    fn read(&mut self) -> Result<String>;

    fn disconnect(&mut self) -> Result<()>;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn send(&mut self, data: &str) -> Result<()> {
        (**self).send(data)
    }

    fn read(&mut self) -> Result<String> {
        (**self).read()
    }

    fn disconnect(&mut self) -> Result<()> {
        (**self).disconnect()
    }
}

/// Request/response client over a [`Connection`]
pub struct GmpClient<C: Connection> {
    connection: C,
    version: Option<GmpVersion>,
}

impl<C: Connection> GmpClient<C> {
    pub fn new(connection: C) -> Self {
        Self {
            connection,
            version: None,
        }
    }

    /// Create a client for a known dialect, skipping version detection
    pub fn with_version(connection: C, version: GmpVersion) -> Self {
        Self {
            connection,
            version: Some(version),
        }
    }

    /// Dialect in use, once known
    pub fn version(&self) -> Option<GmpVersion> {
        self.version
    }

    /// Send a request and return its checked response
    pub fn send_command(&mut self, command: &XmlCommand) -> Result<Response> {
        let request = command.to_xml_string()?;
        debug!(command = command.name(), "sending command");

        self.connection.send(&request)?;
        let data = self.connection.read()?;
        let response = Response::parse(&data)?;

        if let Err(err) = response.check_status() {
            warn!(command = command.name(), error = %err, "command rejected");
            return Err(err);
        }

        Ok(response)
    }

    /// Ask the manager for its GMP version and select the matching dialect
    pub fn determine_version(&mut self) -> Result<GmpVersion> {
        let response = self.send_command(&get_version())?;
        let reported = response
            .version()
            .ok_or_else(|| GmpError::Server("No version in response.".into()))?;

        let version = GmpVersion::from_version_string(reported)?;
        info!(reported, dialect = version.module_name(), "selected GMP dialect");
        self.version = Some(version);
        Ok(version)
    }

    pub fn disconnect(&mut self) -> Result<()> {
        debug!("disconnecting");
        self.connection.disconnect()
    }

    /// Give back the underlying connection
    pub fn into_inner(self) -> C {
        self.connection
    }
}
