// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the loadout configuration system.

use loadout_config::diagnostic::ConfigError;
use loadout_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_loadout_config() {
    let toml = r#"
[paths]
catalog = "/srv/host/registry.json"
settings = "/srv/host/settings.local.json"
runtime_config = "/srv/host/.mcp.json"
credentials = "/srv/host/.env"

[report]
tokens_per_server = 750

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.paths.catalog, "/srv/host/registry.json");
    assert_eq!(config.paths.settings, "/srv/host/settings.local.json");
    assert_eq!(config.paths.runtime_config, "/srv/host/.mcp.json");
    assert_eq!(config.paths.credentials, "/srv/host/.env");
    assert_eq!(config.report.tokens_per_server, 750);
    assert_eq!(config.log.level, "debug");
}

/// Empty TOML uses defaults throughout.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.paths.catalog, "mcp-registry.json");
    assert_eq!(config.paths.runtime_config, ".mcp.json");
    assert_eq!(config.report.tokens_per_server, 500);
    assert_eq!(config.log.level, "info");
}

/// Unknown field in a section produces an error.
#[test]
fn unknown_field_in_paths_produces_error() {
    let toml = r#"
[paths]
catalogue = "x.json"
"#;
    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("catalogue"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// The validated entry point surfaces unknown keys as diagnostics with a
/// fuzzy suggestion.
#[test]
fn unknown_key_diagnostic_carries_suggestion() {
    let errors = load_and_validate_str(
        r#"
[report]
token_per_server = 100
"#,
    )
    .expect_err("should produce diagnostics");

    let has_suggestion = errors.iter().any(|e| {
        matches!(
            e,
            ConfigError::UnknownKey { key, suggestion: Some(s), .. }
                if key == "token_per_server" && s == "tokens_per_server"
        )
    });
    assert!(has_suggestion, "got: {errors:?}");
}

/// The validated entry point rejects semantic violations.
#[test]
fn validation_errors_surface_through_entry_point() {
    let errors = load_and_validate_str(
        r#"
[log]
level = "loud"
"#,
    )
    .expect_err("should produce validation errors");

    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("log.level"))
    ));
}

/// Wrong value types are reported as type errors, not panics.
#[test]
fn wrong_type_is_reported() {
    let err = load_config_from_str(
        r#"
[report]
tokens_per_server = "many"
"#,
    )
    .expect_err("string is not a u32");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("expected"),
        "got: {err_str}"
    );
}
