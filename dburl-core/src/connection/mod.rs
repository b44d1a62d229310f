//! Database URL parsing and connection-string rendering.
//!
//! This module parses database URLs of the form
//!
//! ```text
//! scheme://[username[:password]@]host1[:port1][,host2[:port2],...][/[database]][?options]
//! ```
//!
//! into a [`DatabaseUrl`] and renders it as a semicolon-delimited
//! `Key=Value` connection string.
//!
//! # Parsing Database URLs
//!
//! ```rust
//! use dburl_core::DatabaseUrl;
//!
//! let url = DatabaseUrl::parse("db://user:secret@host1:123,host2:456/somedb").unwrap();
//! assert_eq!(url.scheme(), "db");
//! assert_eq!(url.username(), Some("user"));
//! assert_eq!(url.password(), Some("secret"));
//! assert_eq!(url.database(), Some("somedb"));
//! assert_eq!(url.hosts().len(), 2);
//! assert_eq!(url.hosts()[1].port(), Some(456));
//! ```
//!
//! Hosts, ports and credentials may also be supplied as options, in which
//! case they take precedence over the URL:
//!
//! ```rust
//! use dburl_core::DatabaseUrl;
//!
//! let url = DatabaseUrl::parse("db:///somedb?host=h1,h2,h3&port=123").unwrap();
//! let hosts: Vec<String> = url.hosts().iter().map(|h| h.to_string()).collect();
//! assert_eq!(hosts, ["h1:123", "h2:123", "h3:123"]);
//! ```
//!
//! # Connection Strings
//!
//! ```rust
//! use dburl_core::convert;
//!
//! let cs = convert("db://user@localhost:1234/mydb?a=1&b=2&c=3").unwrap();
//! assert_eq!(cs, "Host=localhost:1234;Username=user;Database=mydb;a=1;b=2;c=3");
//!
//! // PostgreSQL URLs use the Npgsql keyword names
//! let cs = convert("postgres://user@localhost:5433/mydb?application_name=Test").unwrap();
//! assert_eq!(cs, "Host=localhost:5433;Username=user;Database=mydb;Application Name=Test");
//! ```
//!
//! # Dialects
//!
//! ```rust
//! use dburl_core::Dialect;
//!
//! assert_eq!(Dialect::from_scheme("postgres"), Dialect::Postgres);
//! assert_eq!(Dialect::from_scheme("PostgreSQL"), Dialect::Postgres);
//! assert_eq!(Dialect::from_scheme("mysql"), Dialect::Generic);
//! assert_eq!(Dialect::Postgres.default_port(), Some(5432));
//! ```

mod env;
mod grammar;
mod host;
mod options;
mod parser;
pub mod render;

pub use env::{
    CONNECTION_STRINGS_KEY, DEFAULT_ENV_VAR, DEFAULT_NAME, DatabaseUrlSource, EnvSource,
    MapEnvSource, StdEnvSource,
};
pub use host::DatabaseHost;
pub use parser::DatabaseUrl;
pub use render::{Dialect, GenericRenderer, PostgresRenderer, Renderer, join_pairs};

use std::fmt;
use thiserror::Error;

/// Errors that can occur while parsing a database URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The input has no `://` separator.
    #[error("No scheme found in database URL '{0}'")]
    MissingScheme(String),

    /// The input does not match the database URL grammar.
    #[error("'{0}' is not a valid database URL")]
    InvalidUrl(String),

    /// A host token is malformed.
    #[error("The host '{host}' is not a valid host")]
    InvalidHost {
        /// The offending host token, as written in the URL.
        host: String,
    },

    /// The `port` option has several values but not one per host.
    #[error("The number of ports ({ports}) doesn't match the number of hosts ({hosts})")]
    HostPortMismatch {
        /// Number of values in the `host` option.
        hosts: usize,
        /// Number of values in the `port` option.
        ports: usize,
    },
}

/// Payload-free classification of a [`ConnectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ConnectionError::MissingScheme`].
    MissingScheme,
    /// See [`ConnectionError::InvalidUrl`].
    InvalidUrl,
    /// See [`ConnectionError::InvalidHost`].
    InvalidHost,
    /// See [`ConnectionError::HostPortMismatch`].
    HostPortMismatch,
}

impl ErrorKind {
    /// Stable name of the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingScheme => "MissingScheme",
            Self::InvalidUrl => "InvalidUrl",
            Self::InvalidHost => "InvalidHost",
            Self::HostPortMismatch => "HostPortMismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConnectionError {
    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingScheme(_) => ErrorKind::MissingScheme,
            Self::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Self::InvalidHost { .. } => ErrorKind::InvalidHost,
            Self::HostPortMismatch { .. } => ErrorKind::HostPortMismatch,
        }
    }
}

/// Result type for database URL operations.
pub type ConnectionResult<T> = Result<T, ConnectionError>;

/// Parse a database URL.
///
/// Shorthand for [`DatabaseUrl::parse`].
pub fn parse(raw: &str) -> ConnectionResult<DatabaseUrl> {
    DatabaseUrl::parse(raw)
}

/// Render a parsed URL as a connection string using its scheme's dialect.
pub fn to_connection_string(url: &DatabaseUrl) -> String {
    url.to_connection_string()
}

/// Parse a database URL and render it as a connection string.
pub fn convert(raw: &str) -> ConnectionResult<String> {
    Ok(parse(raw)?.to_connection_string())
}
