use std::path::PathBuf;

use crate::core::{Result, ServerError};

/// Password accepted outside production when `SITE_PASSWORD` is unset
pub const DEV_SITE_PASSWORD: &str = "forever";

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Holds `database/vows.redb` |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development \| production |
/// | SITE_PASSWORD | (dev default) | Site access password, required in production |
/// | LOG_LEVEL | info | Log level for the default filter |
/// | LOG_DIR | unset | Daily rolling log files when the directory exists |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/vows HTTP_PORT=8080 cargo run -p vows-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    /// development | production
    pub environment: String,
    /// `None` when `SITE_PASSWORD` is unset
    pub site_password: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from the environment, applying defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            site_password: std::env::var("SITE_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the work directory and port
    ///
    /// Used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Reject configurations that must not start
    pub fn validate(&self) -> Result<()> {
        if self.is_production() && self.site_password.is_none() {
            return Err(ServerError::Config(
                "SITE_PASSWORD must be set in production".into(),
            ));
        }
        Ok(())
    }

    /// Effective site password
    pub fn site_password(&self) -> &str {
        self.site_password.as_deref().unwrap_or(DEV_SITE_PASSWORD)
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("vows.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
