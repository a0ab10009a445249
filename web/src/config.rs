//! Configuration management for the todo server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file in the working directory is read first when present.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use todo_list_memory::InsertEcho;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Item store configuration
    pub store: StoreConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Level for the service crates when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub log_level: String,
    /// Expose Prometheus metrics at `/metrics`
    pub metrics_enabled: bool,
}

/// Item store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Return the inserted record from an add instead of the user's first item
    pub return_inserted_item: bool,
}

impl StoreConfig {
    /// Insert echo setting for the in-memory store.
    #[must_use]
    pub const fn insert_echo(&self) -> InsertEcho {
        if self.return_inserted_item {
            InsertEcho::Inserted
        } else {
            InsertEcho::FirstForUser
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`).
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parsed(&lookup, "PORT").unwrap_or(8080),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                metrics_enabled: parsed(&lookup, "METRICS_ENABLED").unwrap_or(true),
            },
            store: StoreConfig {
                return_inserted_item: parsed(&lookup, "TODO_INSERT_RETURNS_INSERTED").unwrap_or(false),
            },
        }
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns an error if `host:port` is not a valid socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.parse().ok())
}
