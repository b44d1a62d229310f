//! Database host and `host[:port]` token parsing.

use super::grammar::url_decode;
use super::{ConnectionError, ConnectionResult};
use regex_lite::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::trace;

/// `[ipv6]`, dotted IPv4 or any colon-free name, optionally followed by `:port`.
static HOST_PORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<host>\[[0-9a-f:]+\]|(?:\d{1,3}\.){3}\d{1,3}|[^:]+)(?::(?P<port>\d+))?$",
    )
    .unwrap()
});

/// A single connection endpoint.
///
/// A missing port means the database engine's default port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DatabaseHost {
    host: String,
    port: Option<u32>,
}

impl DatabaseHost {
    /// Create a new host.
    pub fn new(host: impl Into<String>, port: Option<u32>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the host name, IP address (IPv6 keeps its brackets) or socket path.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port.
    pub fn port(&self) -> Option<u32> {
        self.port
    }

    /// Get the port or the given default.
    pub fn port_or(&self, default: u32) -> u32 {
        self.port.unwrap_or(default)
    }

    /// Check if the host was omitted.
    pub fn is_empty(&self) -> bool {
        self.host.is_empty() && self.port.is_none()
    }

    /// Parse a `host[:port]` token taken from the URL authority.
    ///
    /// An empty token yields an empty host. The host part is percent-decoded,
    /// so `%2Fvar%2Frun%2Fpostgresql` becomes a Unix socket directory.
    pub(crate) fn parse(token: &str) -> ConnectionResult<Self> {
        if token.is_empty() {
            return Ok(Self::default());
        }

        let caps = HOST_PORT
            .captures(token)
            .ok_or_else(|| ConnectionError::InvalidHost {
                host: token.to_string(),
            })?;

        let host = url_decode(&caps["host"]);
        let port = caps.name("port").and_then(|p| parse_port(p.as_str()));
        trace!(host = %host, port = ?port, "Parsed host token");

        Ok(Self { host, port })
    }
}

impl fmt::Display for DatabaseHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

/// Parse a port number; anything that is not a non-zero `u32` means "no port".
pub(crate) fn parse_port(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|&p| p != 0)
}
