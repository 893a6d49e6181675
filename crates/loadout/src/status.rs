// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `loadout status` command implementation.
//!
//! Projects the registry joined with current activation state into the text
//! report, or into structured JSON with `--json`.

use std::io::IsTerminal;

use loadout_config::LoadoutConfig;
use loadout_control::{render, ActivationController, CapabilityRow};
use loadout_core::LoadoutError;
use serde::Serialize;

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub enable_all: bool,
    pub enabled_count: usize,
    pub total: usize,
    pub estimated_tokens: u64,
    pub servers: Vec<CapabilityRow>,
}

/// Run the `loadout status` command.
///
/// With `--json`, outputs structured JSON for scripting. With `--plain` or
/// when stdout is not a TTY, colors are disabled.
pub fn run_status(
    controller: &ActivationController,
    config: &LoadoutConfig,
    json: bool,
    plain: bool,
) -> Result<(), LoadoutError> {
    let view = controller.status()?;
    let tokens_per_server = config.report.tokens_per_server;

    if json {
        let response = StatusResponse {
            enable_all: view.enable_all,
            enabled_count: view.enabled_count,
            total: view.total,
            estimated_tokens: view.enabled_count as u64 * u64::from(tokens_per_server),
            servers: view.servers,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print!("{}", render(&view, tokens_per_server, use_color));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_core::CapabilityState;

    #[test]
    fn status_response_serializes() {
        let response = StatusResponse {
            enable_all: false,
            enabled_count: 1,
            total: 2,
            estimated_tokens: 500,
            servers: vec![CapabilityRow {
                name: "search".to_string(),
                state: CapabilityState::Enabled,
                required: false,
                kind: "stdio",
                description: "Web search".to_string(),
                used_by: vec![],
                env_vars: vec![],
                env_file: None,
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["enable_all"], false);
        assert_eq!(json["estimated_tokens"], 500);
        assert_eq!(json["servers"][0]["name"], "search");
        assert_eq!(json["servers"][0]["state"], "enabled");
        assert_eq!(json["servers"][0]["type"], "stdio");
    }
}
