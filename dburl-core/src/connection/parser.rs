//! Database URL parser.

use super::env::{EnvSource, StdEnvSource};
use super::grammar::{match_url, url_decode};
use super::host::{DatabaseHost, parse_port};
use super::options::decode_options;
use super::render::Dialect;
use super::{ConnectionError, ConnectionResult};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// A parsed database URL.
///
/// Built once by [`DatabaseUrl::parse`] and read-only afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseUrl {
    original: String,
    scheme: String,
    username: Option<String>,
    password: Option<String>,
    database: Option<String>,
    hosts: Vec<DatabaseHost>,
    options: IndexMap<String, String>,
}

impl DatabaseUrl {
    /// Parse a database URL.
    ///
    /// The `host`/`port` options replace the URL hosts, and the `user`,
    /// `password` and `dbname` options win over the values in the URL.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dburl_core::DatabaseUrl;
    ///
    /// let url = DatabaseUrl::parse("db://localhost/somedb?user=john&password=secret").unwrap();
    /// assert_eq!(url.username(), Some("john"));
    /// assert_eq!(url.password(), Some("secret"));
    ///
    /// // Unix socket directory, percent-encoded in the authority
    /// let url = DatabaseUrl::parse("postgresql://%2Fvar%2Flib%2Fpostgresql/dbname").unwrap();
    /// assert_eq!(url.hosts()[0].host(), "/var/lib/postgresql");
    ///
    /// assert!(DatabaseUrl::parse("db//host/db").is_err());
    /// ```
    pub fn parse(raw: &str) -> ConnectionResult<Self> {
        debug!(url_len = raw.len(), "DatabaseUrl::parse()");

        let segments = match_url(raw)?;
        let options = decode_options(segments.options);
        let hosts = match options.get("host") {
            Some(host_value) => hosts_from_options(host_value, options.get("port"))?,
            None => hosts_from_url(segments.hosts)?,
        };

        let username = override_or_decode(&options, "user", segments.username);
        let password = override_or_decode(&options, "password", segments.password);
        let database = override_or_decode(&options, "dbname", segments.endpoint);

        let url = Self {
            original: raw.to_string(),
            scheme: segments.scheme.to_string(),
            username,
            password,
            database,
            hosts,
            options,
        };

        debug!(
            scheme = %url.scheme,
            hosts = url.hosts.len(),
            database = ?url.database,
            options = url.options.len(),
            "Database URL parsed"
        );

        Ok(url)
    }

    /// Parse the URL held in an environment variable.
    ///
    /// Returns `Ok(None)` when the variable is unset or empty.
    pub fn from_env(var: &str) -> ConnectionResult<Option<Self>> {
        Self::from_source(&StdEnvSource, var)
    }

    /// Parse the URL held in `DATABASE_URL`.
    pub fn from_database_url() -> ConnectionResult<Option<Self>> {
        Self::from_env(super::DEFAULT_ENV_VAR)
    }

    /// Parse the URL held in a variable of the given environment source.
    pub fn from_source<S: EnvSource + ?Sized>(
        source: &S,
        var: &str,
    ) -> ConnectionResult<Option<Self>> {
        match source.get(var) {
            Some(raw) if !raw.is_empty() => Self::parse(&raw).map(Some),
            _ => Ok(None),
        }
    }

    /// Get the original URL string.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Get the scheme, as written.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the connection-string dialect selected by the scheme.
    pub fn dialect(&self) -> Dialect {
        Dialect::from_scheme(&self.scheme)
    }

    /// Get the username.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Get the password.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Get the database name.
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Get the hosts, primary first. Never empty.
    pub fn hosts(&self) -> &[DatabaseHost] {
        &self.hosts
    }

    /// Get the primary host.
    pub fn primary_host(&self) -> &DatabaseHost {
        &self.hosts[0]
    }

    /// Get all decoded options, including the ones consumed as overrides.
    pub fn options(&self) -> &IndexMap<String, String> {
        &self.options
    }

    /// Get an option.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Render the connection string for the scheme's dialect.
    pub fn to_connection_string(&self) -> String {
        self.to_connection_string_with(self.dialect())
    }

    /// Render the connection string for a specific dialect.
    pub fn to_connection_string_with(&self, dialect: Dialect) -> String {
        debug!(scheme = %self.scheme, dialect = %dialect, "Rendering connection string");
        dialect.render(self)
    }
}

impl FromStr for DatabaseUrl {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseUrl")
            .field("scheme", &self.scheme)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("hosts", &self.hosts)
            .field("options", &self.options.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Build the host list from the `host` and `port` options.
fn hosts_from_options(
    host_value: &str,
    port_value: Option<&String>,
) -> ConnectionResult<Vec<DatabaseHost>> {
    let names: Vec<&str> = host_value.split(',').collect();
    let ports: Vec<&str> = port_value.map_or_else(Vec::new, |p| p.split(',').collect());

    if ports.len() > 1 && ports.len() != names.len() {
        return Err(ConnectionError::HostPortMismatch {
            hosts: names.len(),
            ports: ports.len(),
        });
    }

    trace!(hosts = names.len(), ports = ports.len(), "Hosts taken from options");

    let hosts = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let port = match ports.as_slice() {
                [] => None,
                [single] => parse_port(single),
                many => parse_port(many[i]),
            };
            DatabaseHost::new(*name, port)
        })
        .collect();

    Ok(hosts)
}

/// Build the host list from the URL authority.
fn hosts_from_url(segment: &str) -> ConnectionResult<Vec<DatabaseHost>> {
    trace!(segment_len = segment.len(), "Hosts taken from URL");
    segment.split(',').map(DatabaseHost::parse).collect()
}

/// An option wins over the value captured in the URL.
fn override_or_decode(
    options: &IndexMap<String, String>,
    key: &str,
    captured: &str,
) -> Option<String> {
    if let Some(value) = options.get(key) {
        return Some(value.clone());
    }
    (!captured.is_empty()).then(|| url_decode(captured))
}
