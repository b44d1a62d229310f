//! # dburl
//!
//! Turns database URLs into connection strings.
//!
//! ```rust
//! let cs = dburl::convert("postgresql://user@localhost:5433/mydb?application_name=Test").unwrap();
//! assert_eq!(cs, "Host=localhost:5433;Username=user;Database=mydb;Application Name=Test");
//! ```
//!
//! The URL grammar is
//!
//! ```text
//! scheme://[username[:password]@]host1[:port1][,host2[:port2],...][/[database]][?options]
//! ```
//!
//! `postgres` and `postgresql` URLs render with Npgsql keywords; every other
//! scheme renders its options verbatim.
//!
//! ## Configuration
//!
//! ```rust,no_run
//! use dburl::DatabaseUrlSource;
//!
//! // DATABASE_URL -> ConnectionStrings:DatabaseUrl
//! if let Some((key, connection_string)) = DatabaseUrlSource::new().load()? {
//!     println!("{key} = {connection_string}");
//! }
//! # Ok::<(), dburl::ConnectionError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use dburl_core::logging;

/// Rendering internals: dialects, renderers and pair joining.
pub mod render {
    pub use dburl_core::connection::render::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use dburl_core::prelude::*;
}

// Re-export key types at the crate root
pub use dburl_core::{
    CONNECTION_STRINGS_KEY, ConnectionError, ConnectionResult, DEFAULT_ENV_VAR, DEFAULT_NAME,
    DatabaseHost, DatabaseUrl, DatabaseUrlSource, Dialect, EnvSource, ErrorKind, MapEnvSource,
    StdEnvSource, convert, parse, to_connection_string,
};
