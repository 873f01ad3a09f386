//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Activities server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// UI behaviour configuration
///
/// Hide delays apply to the transient status line: sign-up outcomes use
/// `signup_message_hide_ms`, removal successes use `removal_message_hide_ms`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    pub signup_message_hide_ms: u64,
    pub removal_message_hide_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("server.base_url", defaults.server.base_url)?
            .set_default("server.timeout_seconds", defaults.server.timeout_seconds)?
            .set_default("ui.signup_message_hide_ms", defaults.ui.signup_message_hide_ms)?
            .set_default(
                "ui.removal_message_hide_ms",
                defaults.ui.removal_message_hide_ms,
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.file_path", defaults.logging.file_path)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("ACTIVITY_BOARD").separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::BoardError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_seconds: 10,
            },
            ui: UiConfig {
                signup_message_hide_ms: 5000,
                removal_message_hide_ms: 4000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
            },
        }
    }
}
