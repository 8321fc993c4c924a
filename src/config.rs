//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// External joke provider configuration
    pub providers: ProviderConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
}

/// External joke provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the Chuck Norris joke API
    pub chuck_base_url: String,
    /// Base URL of the dad joke API
    pub dad_base_url: String,
}

/// Production Chuck Norris joke API
pub const DEFAULT_CHUCK_BASE_URL: &str = "https://api.chucknorris.io";

/// Production dad joke API
pub const DEFAULT_DAD_BASE_URL: &str = "https://icanhazdadjoke.com";

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3005),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            database: DatabaseConfig {
                path: env::var("DATABASE_PATH").unwrap_or_else(|_| "data/jokes.db".to_string()),
            },
            providers: ProviderConfig {
                chuck_base_url: env::var("CHUCK_API_URL")
                    .unwrap_or_else(|_| DEFAULT_CHUCK_BASE_URL.to_string()),
                dad_base_url: env::var("DAD_JOKE_API_URL")
                    .unwrap_or_else(|_| DEFAULT_DAD_BASE_URL.to_string()),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
