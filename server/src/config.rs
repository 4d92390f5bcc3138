//! Configuration management for the movie API server.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Log filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str =
    "info,movie_api_core=debug,movie_api_web=debug,movie_api_server=debug,tower_http=debug";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Fallback log filter; `RUST_LOG` itself is read by the subscriber
    pub log_level: String,
    /// Install a permissive CORS layer
    pub cors_permissive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: DEFAULT_LOG_FILTER.to_string(),
            cors_permissive: false,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `HOST` | `0.0.0.0` |
    /// | `PORT` | `8080` |
    /// | `CORS_PERMISSIVE` | `false` |
    ///
    /// Values that fail to parse fall back to their defaults. `RUST_LOG` is
    /// not read here: the tracing subscriber consults it directly and uses
    /// [`Config::log_level`] only when it is unset or invalid.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            log_level: defaults.log_level,
            cors_permissive: lookup("CORS_PERMISSIVE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.cors_permissive),
        }
    }

    /// Address to bind the listener to (`host:port`).
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
