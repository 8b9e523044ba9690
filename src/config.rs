//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8086;

/// Default origin allowed by CORS
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Server configuration parameters.
///
/// Cache capacity and default TTL are fixed constants in [`crate::cache`],
/// not configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// The single origin allowed to call the API from a browser
    pub cors_origin: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8086)
    /// - `CORS_ORIGIN` - Allowed browser origin (default: http://localhost:5173)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_origin: env::var("CORS_ORIGIN")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8086);
        assert_eq!(config.cors_origin, "http://localhost:5173");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CORS_ORIGIN");

        let config = Config::from_env();
        assert_eq!(config.server_port, DEFAULT_PORT);
        assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
    }
}
