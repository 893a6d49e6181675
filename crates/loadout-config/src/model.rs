// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for `loadout.toml`.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so unrecognized keys are
//! rejected at startup with an actionable diagnostic instead of being
//! silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level loadout configuration.
///
/// Every section is optional and defaults to sensible values, so the tool
/// runs with no config file at all.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoadoutConfig {
    /// Locations of the four external files the controller operates on.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Status report tuning.
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Locations of the registry catalog, the two persisted documents, and the
/// credential file. Relative paths resolve against the invocation directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Read-only registry catalog of known servers.
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Activation settings document (read/write).
    #[serde(default = "default_settings")]
    pub settings: String,

    /// Runtime connection document the host process reads (read/write).
    #[serde(default = "default_runtime_config")]
    pub runtime_config: String,

    /// Optional `KEY=VALUE` credential file.
    #[serde(default = "default_credentials")]
    pub credentials: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            settings: default_settings(),
            runtime_config: default_runtime_config(),
            credentials: default_credentials(),
        }
    }
}

fn default_catalog() -> String {
    "mcp-registry.json".to_string()
}

fn default_settings() -> String {
    "settings.local.json".to_string()
}

fn default_runtime_config() -> String {
    ".mcp.json".to_string()
}

fn default_credentials() -> String {
    ".env".to_string()
}

/// Status report tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Per-server boot cost used for the coarse estimate, in tokens.
    #[serde(default = "default_tokens_per_server")]
    pub tokens_per_server: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            tokens_per_server: default_tokens_per_server(),
        }
    }
}

fn default_tokens_per_server() -> u32 {
    500
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
