//! PostgreSQL (Npgsql) connection-string renderer.
//!
//! libpq option names are mapped to Npgsql keywords, `keepalives` becomes a
//! boolean and the keepalive intervals go from seconds to milliseconds.

use super::{Dialect, Pair, Renderer};
use std::borrow::Cow;

/// Renders libpq-style options with Npgsql keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresRenderer;

impl PostgresRenderer {
    /// Npgsql keyword for a libpq option, if it has one.
    pub fn map_key(key: &str) -> Option<&'static str> {
        let mapped = match key {
            "passfile" => "Passfile",
            "connect_timeout" => "Timeout",
            "client_encoding" => "Client Encoding",
            "options" => "Options",
            "application_name" => "Application Name",
            "keepalives" => "Tcp Keepalive",
            "keepalives_idle" => "Tcp Keepalive Time",
            "keepalives_interval" => "Tcp Keepalive Interval",
            "sslmode" => "SSL Mode",
            "sslcert" => "SSL Certificate",
            "sslkey" => "SSL Key",
            "sslpassword" => "SSL Password",
            "sslrootcert" => "Root Certificate",
            "target_session_attrs" => "Target Session Attributes",
            _ => return None,
        };
        Some(mapped)
    }

    fn map_value<'a>(key: &str, value: &'a str) -> Cow<'a, str> {
        match key {
            "keepalives" => {
                let enabled = value.trim().parse::<i32>().is_ok_and(|n| n > 0);
                Cow::Borrowed(if enabled { "True" } else { "False" })
            }
            "keepalives_idle" | "keepalives_interval" => match value.trim().parse::<i32>() {
                Ok(seconds) => Cow::Owned((i64::from(seconds) * 1000).to_string()),
                Err(_) => Cow::Borrowed(value),
            },
            _ => Cow::Borrowed(value),
        }
    }
}

impl Renderer for PostgresRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn transform_option<'a>(&self, key: &'a str, value: &'a str) -> Pair<'a> {
        let value = Self::map_value(key, value);
        let key = Cow::Borrowed(Self::map_key(key).unwrap_or(key));
        (key, value)
    }
}
