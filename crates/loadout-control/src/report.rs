// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Status report rendering.
//!
//! Pure formatting over a [`StatusView`]: mode banner, one block per server
//! in registry order, then the summary with the coarse boot-cost estimate.
//! No I/O happens here; the controller already loaded everything.

use crate::controller::StatusView;

const RULE_WIDTH: usize = 50;

/// Render the status report as a string.
///
/// With `use_color` the enabled/disabled markers and the `[REQUIRED]` tag
/// get ANSI accents; without it the output is plain text suitable for pipes.
pub fn render(view: &StatusView, tokens_per_server: u32, use_color: bool) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str("  mcp server status\n");
    out.push_str(&format!("  {}\n", "─".repeat(RULE_WIDTH)));

    if view.enable_all {
        out.push_str("  Mode: auto-load ALL servers (enableAllProjectMcpServers=true)\n");
        out.push_str("        Run `enable <name>` to switch to selective loading.\n");
    } else {
        out.push_str("  Mode: selective loading (enableAllProjectMcpServers=false)\n");
    }
    out.push('\n');

    for row in &view.servers {
        let marker = if row.required {
            if use_color {
                use colored::Colorize;
                format!(" {}", "[REQUIRED]".yellow())
            } else {
                " [REQUIRED]".to_string()
            }
        } else {
            String::new()
        };
        out.push_str(&format!("  {}{marker}\n", row.name));

        let state = if use_color {
            use colored::Colorize;
            if row.state.is_enabled() {
                row.state.to_string().green().to_string()
            } else {
                row.state.to_string().dimmed().to_string()
            }
        } else {
            row.state.to_string()
        };
        out.push_str(&format!("    Status:      {state}\n"));
        out.push_str(&format!("    Type:        {}\n", row.kind));

        if !row.description.is_empty() {
            out.push_str(&format!("    Description: {}\n", row.description));
        }
        if !row.used_by.is_empty() {
            out.push_str(&format!("    Used by:     {}\n", row.used_by.join(", ")));
        }
        if !row.env_vars.is_empty() {
            let location = row
                .env_file
                .as_deref()
                .map(|f| format!(" (in {f})"))
                .unwrap_or_default();
            out.push_str(&format!(
                "    Requires:    {}{location}\n",
                row.env_vars.join(", ")
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("  {}\n", "─".repeat(RULE_WIDTH)));
    out.push_str(&format!(
        "  Enabled: {}/{} servers\n",
        view.enabled_count, view.total
    ));
    let estimated = view.enabled_count as u64 * u64::from(tokens_per_server);
    out.push_str(&format!("  Estimated boot cost: ~{estimated} tokens\n"));
    out.push('\n');

    out
}
