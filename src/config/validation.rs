//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{BoardError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_ui_config(&settings.ui)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate activities server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(BoardError::Config(
            "Activities server base URL is required".to_string(),
        ));
    }

    let url = Url::parse(&config.base_url)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(BoardError::Config(format!(
            "Activities server base URL must be http or https, got: {}",
            url.scheme()
        )));
    }

    if config.timeout_seconds == 0 {
        return Err(BoardError::Config(
            "Request timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate UI configuration
fn validate_ui_config(config: &super::UiConfig) -> Result<()> {
    if config.signup_message_hide_ms == 0 {
        return Err(BoardError::Config(
            "Sign-up message hide delay must be greater than 0".to_string(),
        ));
    }

    if config.removal_message_hide_ms == 0 {
        return Err(BoardError::Config(
            "Removal message hide delay must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BoardError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BoardError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
