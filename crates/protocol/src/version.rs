//! Protocol dialect selection

use std::fmt;

use gmp_core::{GmpError, Result};

/// GMP dialects supported by this library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GmpVersion {
    /// GMP 20.08
    Gmpv208,
    /// GMP 21.4
    Gmpv214,
    /// GMP 22.4
    Gmpv224,
}

impl GmpVersion {
    pub const ALL: [GmpVersion; 3] = [GmpVersion::Gmpv208, GmpVersion::Gmpv214, GmpVersion::Gmpv224];

    /// Select the dialect for the version string a manager reports
    ///
    /// Any 20.x manager speaks 20.08; 21.4 and 22.4 must match exactly. The
    /// module names (`gmpv208`, ...) are accepted as well.
    pub fn from_version_string(version: &str) -> Result<Self> {
        let version = version.trim();
        match version.to_lowercase().as_str() {
            "gmpv208" => return Ok(GmpVersion::Gmpv208),
            "gmpv214" => return Ok(GmpVersion::Gmpv214),
            "gmpv224" => return Ok(GmpVersion::Gmpv224),
            _ => {}
        }

        let unsupported = || {
            GmpError::Gmp(format!(
                "Remote manager daemon uses an unsupported version of GMP. The GMP version was {}",
                version
            ))
        };

        let mut parts = version.split('.');
        let major: u32 = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(unsupported)?;
        let minor: u32 = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(unsupported)?;

        match (major, minor) {
            (20, _) => Ok(GmpVersion::Gmpv208),
            (21, 4) => Ok(GmpVersion::Gmpv214),
            (22, 4) => Ok(GmpVersion::Gmpv224),
            _ => Err(unsupported()),
        }
    }

    /// `(major, minor)` of the dialect
    pub fn protocol_version(&self) -> (u32, u32) {
        match self {
            GmpVersion::Gmpv208 => crate::gmpv208::PROTOCOL_VERSION,
            GmpVersion::Gmpv214 => crate::gmpv214::PROTOCOL_VERSION,
            GmpVersion::Gmpv224 => crate::gmpv224::PROTOCOL_VERSION,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GmpVersion::Gmpv208 => "20.08",
            GmpVersion::Gmpv214 => "21.4",
            GmpVersion::Gmpv224 => "22.4",
        }
    }

    /// Name of the dialect module
    pub fn module_name(&self) -> &'static str {
        match self {
            GmpVersion::Gmpv208 => "gmpv208",
            GmpVersion::Gmpv214 => "gmpv214",
            GmpVersion::Gmpv224 => "gmpv224",
        }
    }
}

impl Default for GmpVersion {
    fn default() -> Self {
        GmpVersion::Gmpv224
    }
}

impl fmt::Display for GmpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
