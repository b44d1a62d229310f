//! Option (query string) decoding.

use indexmap::IndexMap;
use url::form_urlencoded;

/// Decode an `&`-separated `key=value` option string.
///
/// Keys and values are percent-decoded (`+` is a space). A repeated key keeps
/// its first position and takes the last value. Pairs with an empty key are
/// dropped; a pair without `=` has an empty value.
pub(crate) fn decode_options(segment: &str) -> IndexMap<String, String> {
    let mut options = IndexMap::new();
    for (key, value) in form_urlencoded::parse(segment.as_bytes()) {
        if key.is_empty() {
            continue;
        }
        options.insert(key.into_owned(), value.into_owned());
    }
    options
}
