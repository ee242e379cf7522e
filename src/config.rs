//! Application configuration module.
//!
//! Handles loading configuration from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database file path
    pub database_url: String,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Length of generated short codes
    pub short_code_length: usize,
    /// Webhook endpoint for certificate state-change notifications
    pub notifier_webhook_url: String,
    /// Timeout for outbound notifier requests in seconds
    pub notifier_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `DATABASE_URL`: Path to SQLite database (default: "surl.db")
    /// - `HOST`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `SHORT_CODE_LENGTH`: Length of generated codes (default: 7)
    /// - `NOTIFIER_WEBHOOK_URL`: Certificate webhook endpoint (default: "https://httpbin.org/post")
    /// - `NOTIFIER_TIMEOUT_SECS`: Outbound request timeout in seconds (default: 5)
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "surl.db".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            short_code_length: env::var("SHORT_CODE_LENGTH")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .expect("SHORT_CODE_LENGTH must be a valid number"),
            notifier_webhook_url: env::var("NOTIFIER_WEBHOOK_URL")
                .unwrap_or_else(|_| "https://httpbin.org/post".to_string()),
            notifier_timeout_secs: env::var("NOTIFIER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("NOTIFIER_TIMEOUT_SECS must be a valid number"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "surl.db".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            short_code_length: 7,
            notifier_webhook_url: "https://httpbin.org/post".to_string(),
            notifier_timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database_url, "surl.db");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.short_code_length, 7);
        assert_eq!(config.notifier_timeout_secs, 5);
    }
}
