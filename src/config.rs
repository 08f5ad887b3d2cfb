//! Configuration for the tasklist server.
//!
//! Configuration is read from environment variables:
//! - `HOST` - Optional. Server bind address. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `8080`.
//! - `DATABASE_URL` - Optional. `PostgreSQL` connection URL. When absent
//!   the server keeps tasks in an in-memory store.

use std::env;
use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held an unusable value.
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// `PostgreSQL` connection URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `PORT` is not a valid
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_owned(), raw.clone()))?,
            Err(_) => 8080,
        };
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());

        Ok(Self {
            host,
            port,
            database_url,
        })
    }

    /// Returns the `host:port` pair the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
