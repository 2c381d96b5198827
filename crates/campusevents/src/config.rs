use std::{env, time::Duration};

use anyhow::Context;

/// Gateway configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote events database.
    pub database_api_url: String,
    /// API key forwarded as both the `apikey` header and the bearer token.
    pub database_api_key: String,
    /// Upstream request timeout in seconds (default: 10).
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_API_URL` - Base URL of the remote events database (required)
    /// - `DATABASE_API_KEY` - API key for the remote database (required)
    /// - `REQUEST_TIMEOUT_SECONDS` - Upstream timeout in seconds (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_api_url: env::var("DATABASE_API_URL")
                .context("DATABASE_API_URL is not set")?,
            database_api_key: env::var("DATABASE_API_KEY")
                .context("DATABASE_API_KEY is not set")?,
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Get the upstream timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            database_api_url: "https://db.example.com".to_string(),
            database_api_key: "key".to_string(),
            request_timeout_seconds: 30,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }
}
