//! Connection-string renderers.
//!
//! A renderer emits `Host`, `Username`, `Password` and `Database` (each only
//! when non-empty) followed by every option, then joins the pairs with `;`.
//! Dialects differ only in how they translate option keys and values.

mod builder;
mod generic;
mod postgres;

pub use builder::join_pairs;
pub use generic::GenericRenderer;
pub use postgres::PostgresRenderer;

use super::DatabaseUrl;
use std::borrow::Cow;
use std::fmt;

/// A `Key=Value` pair borrowed from a [`DatabaseUrl`] where possible.
pub type Pair<'a> = (Cow<'a, str>, Cow<'a, str>);

/// Serializes a [`DatabaseUrl`] into a connection string.
pub trait Renderer {
    /// The dialect this renderer implements.
    fn dialect(&self) -> Dialect;

    /// Translate one option into the dialect's keyword and value.
    fn transform_option<'a>(&self, key: &'a str, value: &'a str) -> Pair<'a>;

    /// Build the ordered pairs for a URL.
    fn pairs<'a>(&self, url: &'a DatabaseUrl) -> Vec<Pair<'a>> {
        let mut pairs: Vec<Pair<'a>> = Vec::with_capacity(4 + url.options().len());

        let hosts = url
            .hosts()
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .join(",");
        if !hosts.is_empty() {
            pairs.push((Cow::Borrowed("Host"), Cow::Owned(hosts)));
        }

        let fields = [
            ("Username", url.username()),
            ("Password", url.password()),
            ("Database", url.database()),
        ];
        for (key, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                pairs.push((Cow::Borrowed(key), Cow::Borrowed(value)));
            }
        }

        pairs.extend(
            url.options()
                .iter()
                .map(|(key, value)| self.transform_option(key, value)),
        );

        pairs
    }

    /// Render the connection string.
    fn render(&self, url: &DatabaseUrl) -> String {
        join_pairs(self.pairs(url))
    }
}

/// Connection-string dialect, selected by URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Option keys and values are passed through.
    #[default]
    Generic,
    /// PostgreSQL via Npgsql keyword names.
    Postgres,
}

impl Dialect {
    /// Select the dialect for a scheme (ASCII case-insensitive).
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Self::Postgres,
            _ => Self::Generic,
        }
    }

    /// Get the dialect name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Postgres => "postgres",
        }
    }

    /// Get the default port of the database engine, if known.
    pub fn default_port(&self) -> Option<u32> {
        match self {
            Self::Generic => None,
            Self::Postgres => Some(5432),
        }
    }

    /// Render a URL with this dialect's renderer.
    pub fn render(&self, url: &DatabaseUrl) -> String {
        match self {
            Self::Generic => GenericRenderer.render(url),
            Self::Postgres => PostgresRenderer.render(url),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
