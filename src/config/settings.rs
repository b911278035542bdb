//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_MONGO_URI, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongo_uri", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mongo_uri: env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
