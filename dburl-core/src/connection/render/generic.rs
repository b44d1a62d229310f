//! Generic connection-string renderer.

use super::{Dialect, Pair, Renderer};
use std::borrow::Cow;

/// Renders options verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericRenderer;

impl Renderer for GenericRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::Generic
    }

    fn transform_option<'a>(&self, key: &'a str, value: &'a str) -> Pair<'a> {
        (Cow::Borrowed(key), Cow::Borrowed(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::DatabaseUrl;
    use pretty_assertions::assert_eq;

    fn render(raw: &str) -> String {
        GenericRenderer.render(&DatabaseUrl::parse(raw).unwrap())
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render("db://"), "");
    }

    #[test]
    fn test_render_host_only() {
        assert_eq!(render("db://localhost"), "Host=localhost");
        assert_eq!(render("db://user@localhost"), "Host=localhost;Username=user");
    }

    #[test]
    fn test_render_full() {
        assert_eq!(
            render("db://user@localhost:1234/mydb?a=1&b=2&c=3"),
            "Host=localhost:1234;Username=user;Database=mydb;a=1;b=2;c=3"
        );
        assert_eq!(
            render("db://user:secret@host1:123,host2/somedb"),
            "Host=host1:123,host2;Username=user;Password=secret;Database=somedb"
        );
    }

    #[test]
    fn test_render_passes_postgres_options_through() {
        assert_eq!(
            render("mysql://localhost?keepalives=1&sslmode=require"),
            "Host=localhost;keepalives=1;sslmode=require"
        );
    }

    #[test]
    fn test_render_quotes_values() {
        assert_eq!(
            render("db://localhost?opts=a%3Bb&name=my+app"),
            "Host=localhost;opts=\"a;b\";name=\"my app\""
        );
    }

    #[test]
    fn test_render_host_option_replaces_host_entry() {
        assert_eq!(
            render("db:///mydb?host=h1,h2&port=5"),
            "Host=h1,h2;Database=mydb;port=5"
        );
    }

    #[test]
    fn test_dialect() {
        assert_eq!(GenericRenderer.dialect(), Dialect::Generic);
    }
}
