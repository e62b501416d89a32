//! API server configuration

use std::env;

use anyhow::{Context, Result};
use commune_shared_config::CommonConfig;

use crate::graphql::connection::{PaginationConfig, DEFAULT_MAX_FETCH_LIMIT};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Server port (default: 8080)
    pub port: u16,

    /// Upper bound on connection page sizes (default: 100)
    pub max_fetch_limit: i64,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common =
            CommonConfig::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        let max_fetch_limit: i64 = env::var("MAX_FETCH_LIMIT")
            .unwrap_or_else(|_| DEFAULT_MAX_FETCH_LIMIT.to_string())
            .parse()
            .context("Invalid MAX_FETCH_LIMIT value")?;
        if max_fetch_limit < 1 {
            anyhow::bail!("MAX_FETCH_LIMIT must be a positive integer");
        }

        Ok(Self {
            common,

            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid PORT value")?,

            max_fetch_limit,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Pagination settings injected into the GraphQL schema
    pub fn pagination(&self) -> PaginationConfig {
        PaginationConfig {
            max_fetch_limit: self.max_fetch_limit,
        }
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(["PORT", "MAX_FETCH_LIMIT", "CORS_ORIGINS"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 8080);
            assert_eq!(config.max_fetch_limit, DEFAULT_MAX_FETCH_LIMIT);
            assert!(config.cors_allowed_origins.is_none());
        });
    }

    #[test]
    fn test_max_fetch_limit_override() {
        temp_env::with_var("MAX_FETCH_LIMIT", Some("25"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.max_fetch_limit, 25);
            assert_eq!(config.pagination().max_fetch_limit, 25);
        });
    }

    #[test]
    fn test_max_fetch_limit_rejects_non_positive() {
        temp_env::with_var("MAX_FETCH_LIMIT", Some("0"), || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_cors_origins_parsing() {
        temp_env::with_var(
            "CORS_ORIGINS",
            Some("https://a.example, https://b.example ,"),
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.cors_allowed_origins,
                    Some(vec![
                        "https://a.example".to_string(),
                        "https://b.example".to_string()
                    ])
                );
            },
        );
    }
}
