// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./loadout.toml` > `~/.config/loadout/loadout.toml`
//! > `/etc/loadout/loadout.toml`, with environment variable overrides via the
//! `LOADOUT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LoadoutConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/loadout/loadout.toml` (system-wide)
/// 3. `~/.config/loadout/loadout.toml` (user XDG config)
/// 4. `./loadout.toml` (local directory)
/// 5. `LOADOUT_*` environment variables
pub fn load_config() -> Result<LoadoutConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LoadoutConfig::default()))
        .merge(Toml::file("/etc/loadout/loadout.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("loadout/loadout.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("loadout.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<LoadoutConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LoadoutConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LoadoutConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LoadoutConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider.
///
/// Uses explicit `map()` rather than `Env::split("_")` so that key names
/// containing underscores stay intact: `LOADOUT_PATHS_RUNTIME_CONFIG` must
/// map to `paths.runtime_config`, not `paths.runtime.config`.
fn env_provider() -> Env {
    Env::prefixed("LOADOUT_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("paths_", "paths.", 1)
            .replacen("report_", "report.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}
