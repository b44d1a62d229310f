//! Structured fuzz target: builds URL-shaped inputs from arbitrary parts.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzUrl {
    scheme: String,
    credentials: Option<(String, Option<String>)>,
    hosts: Vec<(String, Option<u32>)>,
    database: Option<String>,
    options: Vec<(String, String)>,
}

impl FuzzUrl {
    fn to_url(&self) -> String {
        let mut url = format!("{}://", self.scheme);
        if let Some((user, password)) = &self.credentials {
            url.push_str(user);
            if let Some(password) = password {
                url.push(':');
                url.push_str(password);
            }
            url.push('@');
        }
        let hosts: Vec<String> = self
            .hosts
            .iter()
            .map(|(host, port)| match port {
                Some(port) => format!("{}:{}", host, port),
                None => host.clone(),
            })
            .collect();
        url.push_str(&hosts.join(","));
        if let Some(database) = &self.database {
            url.push('/');
            url.push_str(database);
        }
        if !self.options.is_empty() {
            let options: Vec<String> = self
                .options
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            url.push('?');
            url.push_str(&options.join("&"));
        }
        url
    }
}

fuzz_target!(|input: FuzzUrl| {
    let url = input.to_url();
    if let Ok(parsed) = dburl_core::parse(&url) {
        assert!(!parsed.hosts().is_empty());
        let _ = parsed.to_connection_string_with(dburl_core::Dialect::Postgres);
        let _ = parsed.to_connection_string_with(dburl_core::Dialect::Generic);
    }
});
