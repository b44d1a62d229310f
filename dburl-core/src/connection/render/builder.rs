//! Connection-string escaping and joining.

use std::borrow::Cow;

/// Join `Key=Value` pairs into a connection string.
///
/// Keywords are case-insensitive: a later pair with the same keyword replaces
/// the earlier value but keeps its spelling and position. Keys and values are
/// escaped the way ADO.NET's `DbConnectionStringBuilder` does it.
///
/// ```rust
/// use dburl_core::join_pairs;
///
/// let cs = join_pairs([("Host", "localhost"), ("Options", "-c x=1"), ("host", "db")]);
/// assert_eq!(cs, "Host=db;Options=\"-c x=1\"");
/// ```
pub fn join_pairs<K, V, I>(pairs: I) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut merged: Vec<(K, V)> = Vec::new();
    for (key, value) in pairs {
        match merged
            .iter_mut()
            .find(|(k, _)| same_keyword(k.as_ref(), key.as_ref()))
        {
            Some(entry) => entry.1 = value,
            None => merged.push((key, value)),
        }
    }

    merged
        .iter()
        .map(|(k, v)| format!("{}={}", escape_key(k.as_ref()), escape_value(v.as_ref())))
        .collect::<Vec<_>>()
        .join(";")
}

/// Keyword comparison ignoring case, non-ASCII letters included.
fn same_keyword(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}

/// `=` inside a keyword is written as `==`.
fn escape_key(key: &str) -> Cow<'_, str> {
    if key.contains('=') {
        Cow::Owned(key.replace('=', "=="))
    } else {
        Cow::Borrowed(key)
    }
}

/// Quote a value that would otherwise be ambiguous.
fn escape_value(value: &str) -> Cow<'_, str> {
    let needs_quoting = value
        .chars()
        .any(|c| matches!(c, '"' | '\'' | '=' | ';') || c.is_whitespace() || c.is_control());

    if !needs_quoting {
        Cow::Borrowed(value)
    } else if value.contains('"') && !value.contains('\'') {
        Cow::Owned(format!("'{}'", value))
    } else {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_empty() {
        assert_eq!(join_pairs(Vec::<(&str, &str)>::new()), "");
    }

    #[test]
    fn test_join_plain() {
        let cs = join_pairs([("Host", "localhost:1234"), ("Username", "user"), ("a", "1")]);
        assert_eq!(cs, "Host=localhost:1234;Username=user;a=1");
    }

    #[test]
    fn test_join_replaces_case_insensitive() {
        let cs = join_pairs([("Host", "h1:5"), ("Database", "db"), ("host", "h1")]);
        assert_eq!(cs, "Host=h1;Database=db");
    }

    #[test]
    fn test_join_replaces_non_ascii_case_insensitive() {
        let cs = join_pairs([("Schéma", "a"), ("SCHÉMA", "b")]);
        assert_eq!(cs, "Schéma=b");
        assert!(same_keyword("straße", "STRASSE"));
        assert!(!same_keyword("Host", "Hostname"));
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("plain"), "plain");
        assert_eq!(escape_value(""), "");
        assert_eq!(escape_value("a;b"), "\"a;b\"");
        assert_eq!(escape_value("a=b"), "\"a=b\"");
        assert_eq!(escape_value(" padded"), "\" padded\"");
        assert_eq!(escape_value("it's"), "\"it's\"");
        assert_eq!(escape_value("say \"hi\""), "'say \"hi\"'");
        assert_eq!(escape_value("it's \"x\""), "\"it's \"\"x\"\"\"");
    }

    #[test]
    fn test_escape_key() {
        assert_eq!(escape_key("a=b"), "a==b");
        assert_eq!(escape_key("Application Name"), "Application Name");
    }
}
