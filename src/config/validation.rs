//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{LightBnbError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;
    validate_fixtures_config(&settings.fixtures)?;
    validate_search_config(&settings.search)?;

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(LightBnbError::Config(
            "Database URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.url)?;
    if !matches!(url.scheme(), "postgres" | "postgresql") {
        return Err(LightBnbError::Config(
            format!("Unsupported database scheme: {}", url.scheme())
        ));
    }

    if config.max_connections == 0 {
        return Err(LightBnbError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(LightBnbError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_seconds == 0 {
        return Err(LightBnbError::Config(
            "Acquire timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LightBnbError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LightBnbError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_path.is_empty() {
        return Err(LightBnbError::Config(
            "Log directory is required".to_string()
        ));
    }

    Ok(())
}

fn validate_fixtures_config(config: &super::FixturesConfig) -> Result<()> {
    if config.properties_path.is_empty() || config.users_path.is_empty() {
        return Err(LightBnbError::Config(
            "Fixture paths must not be empty".to_string()
        ));
    }

    Ok(())
}

fn validate_search_config(config: &super::SearchConfig) -> Result<()> {
    if config.default_limit <= 0 {
        return Err(LightBnbError::Config(
            "Default search limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}
