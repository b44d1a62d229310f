//! Logging setup for dburl.
//!
//! Parsing and rendering log through `tracing`. Nothing is printed unless a
//! subscriber is installed, either by the application or by [`init`] when
//! the `tracing-subscriber` feature is enabled.
//!
//! # Environment Variables
//!
//! - `DBURL_DEBUG=true` (or `1`, `yes`) - Enable debug logging
//! - `DBURL_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `DBURL_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! Passwords are never logged, and neither is the raw URL.
//!
//! ```rust,no_run
//! use dburl_core::logging;
//!
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `DBURL_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("DBURL_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `DBURL_LOG_LEVEL`.
///
/// Defaults to "debug" if `DBURL_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };
    match env::var("DBURL_LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// Get the configured log format from `DBURL_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var("DBURL_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging.
///
/// Only installs a subscriber when `DBURL_DEBUG` or `DBURL_LOG_LEVEL` is set
/// and the `tracing-subscriber` feature is enabled. Subsequent calls are
/// no-ops.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("DBURL_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!("dburl={},dburl_core={}", level, level))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let result = match get_log_format() {
                "json" => registry.with(fmt::layer().json()).try_init(),
                "compact" => registry.with(fmt::layer().compact()).try_init(),
                _ => registry.with(fmt::layer().pretty()).try_init(),
            };

            if result.is_ok() {
                tracing::info!(
                    level = level,
                    format = get_log_format(),
                    "dburl logging initialized"
                );
            }
        }
    });
}

/// Initialize logging with a specific level.
///
/// # Safety
///
/// This function modifies environment variables, which is unsafe in
/// multi-threaded programs. Call this early in your program before
/// spawning threads.
pub fn init_with_level(level: &str) {
    // SAFETY: only meant for program startup, before threads are spawned.
    unsafe {
        env::set_var("DBURL_LOG_LEVEL", level);
    }
    init();
}

/// Initialize debug logging. Equivalent to `DBURL_DEBUG=true` plus [`init`].
///
/// # Safety
///
/// See [`init_with_level`].
pub fn init_debug() {
    // SAFETY: only meant for program startup, before threads are spawned.
    unsafe {
        env::set_var("DBURL_DEBUG", "true");
    }
    init();
}
