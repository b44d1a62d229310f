//! Environment-backed database URL configuration.

use super::{ConnectionResult, convert};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, info};

/// Environment variable read by default.
pub const DEFAULT_ENV_VAR: &str = "DATABASE_URL";

/// Connection-string name used by default.
pub const DEFAULT_NAME: &str = "DatabaseUrl";

/// Parent section of connection-string configuration keys.
pub const CONNECTION_STRINGS_KEY: &str = "ConnectionStrings";

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;

    /// Check if a variable exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create a new map-based environment source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Add multiple variables.
    pub fn with_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.vars.extend(vars);
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Loads a database URL from the environment as a connection string.
///
/// The result is stored under `ConnectionStrings:<name>`. An unset or empty
/// variable is not an error; nothing is loaded.
///
/// ```rust
/// use dburl_core::{DatabaseUrlSource, MapEnvSource};
///
/// let env = MapEnvSource::new().set("DATABASE_URL", "postgres://app@db.internal/orders");
/// let source = DatabaseUrlSource::with_source(env);
///
/// let (key, value) = source.load().unwrap().unwrap();
/// assert_eq!(key, "ConnectionStrings:DatabaseUrl");
/// assert_eq!(value, "Host=db.internal;Username=app;Database=orders");
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseUrlSource<S: EnvSource = StdEnvSource> {
    env_var: String,
    name: String,
    source: S,
}

impl DatabaseUrlSource<StdEnvSource> {
    /// Read `DATABASE_URL` from the process environment into
    /// `ConnectionStrings:DatabaseUrl`.
    pub fn new() -> Self {
        Self::with_source(StdEnvSource)
    }
}

impl Default for DatabaseUrlSource<StdEnvSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvSource> DatabaseUrlSource<S> {
    /// Create a loader with a custom environment source.
    pub fn with_source(source: S) -> Self {
        Self {
            env_var: DEFAULT_ENV_VAR.to_string(),
            name: DEFAULT_NAME.to_string(),
            source,
        }
    }

    /// Set the environment variable to read.
    pub fn env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    /// Set the connection-string name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the configuration key the connection string is stored under.
    pub fn key(&self) -> String {
        format!("{}:{}", CONNECTION_STRINGS_KEY, self.name)
    }

    /// Read and convert the variable.
    ///
    /// Returns the configuration key and the connection string, or `None`
    /// when the variable is unset or empty.
    pub fn load(&self) -> ConnectionResult<Option<(String, String)>> {
        let raw = match self.source.get(&self.env_var) {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                debug!(env_var = %self.env_var, "Database URL variable not set, skipping");
                return Ok(None);
            }
        };

        let connection_string = convert(&raw)?;
        let key = self.key();
        info!(env_var = %self.env_var, key = %key, "Database URL loaded from environment");

        Ok(Some((key, connection_string)))
    }

    /// Load the connection string into a configuration map.
    ///
    /// An existing value under the same key is replaced.
    pub fn load_into(&self, config: &mut IndexMap<String, String>) -> ConnectionResult<()> {
        if let Some((key, value)) = self.load()? {
            config.insert(key, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionError;
    use pretty_assertions::assert_eq;

    fn test_source() -> MapEnvSource {
        MapEnvSource::new()
            .set("DATABASE_URL", "db://user@localhost:1234/mydb?a=1")
            .set("REPLICA_URL", "postgres://localhost/db?application_name=Reports")
            .set("BROKEN_URL", "db//host")
            .set("EMPTY", "")
    }

    #[test]
    fn test_default_key() {
        let source = DatabaseUrlSource::with_source(test_source());
        assert_eq!(source.key(), "ConnectionStrings:DatabaseUrl");
    }

    #[test]
    fn test_load_default() {
        let source = DatabaseUrlSource::with_source(test_source());
        assert_eq!(
            source.load().unwrap(),
            Some((
                "ConnectionStrings:DatabaseUrl".to_string(),
                "Host=localhost:1234;Username=user;Database=mydb;a=1".to_string()
            ))
        );
    }

    #[test]
    fn test_load_named() {
        let source = DatabaseUrlSource::with_source(test_source())
            .env_var("REPLICA_URL")
            .name("Replica");

        let (key, value) = source.load().unwrap().unwrap();
        assert_eq!(key, "ConnectionStrings:Replica");
        assert_eq!(value, "Host=localhost;Database=db;Application Name=Reports");
    }

    #[test]
    fn test_load_missing_or_empty() {
        let source = DatabaseUrlSource::with_source(test_source()).env_var("MISSING");
        assert_eq!(source.load().unwrap(), None);

        let source = DatabaseUrlSource::with_source(test_source()).env_var("EMPTY");
        assert_eq!(source.load().unwrap(), None);
    }

    #[test]
    fn test_load_invalid() {
        let source = DatabaseUrlSource::with_source(test_source()).env_var("BROKEN_URL");
        assert!(matches!(
            source.load(),
            Err(ConnectionError::MissingScheme(_))
        ));
    }

    #[test]
    fn test_load_into() {
        let mut config = IndexMap::new();
        config.insert(
            "ConnectionStrings:DatabaseUrl".to_string(),
            "stale".to_string(),
        );

        DatabaseUrlSource::with_source(test_source())
            .load_into(&mut config)
            .unwrap();
        DatabaseUrlSource::with_source(test_source())
            .env_var("MISSING")
            .name("Other")
            .load_into(&mut config)
            .unwrap();

        assert_eq!(config.len(), 1);
        assert_eq!(
            config["ConnectionStrings:DatabaseUrl"],
            "Host=localhost:1234;Username=user;Database=mydb;a=1"
        );
    }

    #[test]
    fn test_map_source_contains() {
        let source = test_source();
        assert!(source.contains("DATABASE_URL"));
        assert!(!source.contains("MISSING"));
    }
}
