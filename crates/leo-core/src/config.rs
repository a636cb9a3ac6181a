//! Configuration management for the Leo admin client

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Dashboard listing configuration
    pub dashboard: DashboardConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend (no trailing slash)
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token for the session (usually injected via `LEO_AUTH_TOKEN`)
    #[serde(default)]
    pub token: Option<String>,

    /// File to read the bearer token from, as an alternative to `token`
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

/// Dashboard listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Default page size for list views
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Hard ceiling on any requested page size
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Log to file
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("leo-admin/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_page_size() -> u32 {
    10
}

const fn default_max_page_size() -> u32 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("LEO").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }

    /// Resolve the bearer token from the `token` field or `token_file`
    ///
    /// # Errors
    ///
    /// Returns an error if neither source yields a non-empty token.
    pub fn resolve_token(&self) -> crate::Result<String> {
        if let Some(token) = &self.auth.token {
            if !token.trim().is_empty() {
                return Ok(token.trim().to_string());
            }
        }

        if let Some(path) = &self.auth.token_file {
            let raw = std::fs::read_to_string(path)?;
            let token = raw.trim();
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }

        Err(crate::Error::Configuration {
            message: "no bearer token configured (set LEO_AUTH_TOKEN or auth.token_file)"
                .to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        // Try to get the API URL from environment variables, fallback to default
        let base_url = std::env::var("LEO_API_BASE_URL")
            .or_else(|_| std::env::var("API_BASE_URL"))
            .unwrap_or_else(|_| default_base_url());

        Self {
            api: ApiConfig {
                base_url,
                request_timeout: default_request_timeout(),
                user_agent: default_user_agent(),
            },
            auth: AuthConfig {
                token: std::env::var("LEO_AUTH_TOKEN").ok(),
                token_file: None,
            },
            dashboard: DashboardConfig {
                page_size: default_page_size(),
                max_page_size: default_max_page_size(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
                file: None,
            },
        }
    }
}
