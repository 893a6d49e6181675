// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that serde attributes cannot express:
//! non-empty paths and a recognized log level.

use crate::diagnostic::ConfigError;
use crate::model::LoadoutConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects all validation errors rather than failing fast.
pub fn validate_config(config: &LoadoutConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let paths = [
        ("paths.catalog", &config.paths.catalog),
        ("paths.settings", &config.paths.settings),
        ("paths.runtime_config", &config.paths.runtime_config),
        ("paths.credentials", &config.paths.credentials),
    ];
    for (key, value) in paths {
        if value.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
