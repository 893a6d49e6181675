// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `loadout enable` and `loadout disable` command implementations.
//!
//! Activation changes only take effect when the consuming host process is
//! restarted, so every successful transition prints the restart reminder.

use loadout_control::{ActivationController, DisableOutcome, EnableOutcome};
use loadout_core::LoadoutError;

/// Run the `loadout enable` command.
pub fn run_enable(controller: &ActivationController, name: &str) -> Result<(), LoadoutError> {
    match controller.enable(name)? {
        EnableOutcome::Enabled => {
            println!("✓ Server '{name}' enabled");
            print_restart_reminder();
        }
        EnableOutcome::AlreadyEnabled => {
            println!("✓ Server '{name}' already enabled");
        }
    }
    Ok(())
}

/// Run the `loadout disable` command.
///
/// `--force` routes through the confirmed entry point, which is the only
/// path that removes a server marked as required.
pub fn run_disable(
    controller: &ActivationController,
    name: &str,
    force: bool,
) -> Result<(), LoadoutError> {
    let outcome = if force {
        controller.disable_confirmed(name)?
    } else {
        controller.disable(name)?
    };

    match outcome {
        DisableOutcome::Disabled => {
            println!("✓ Server '{name}' disabled");
            print_restart_reminder();
        }
        DisableOutcome::AlreadyDisabled => {
            println!("✓ Server '{name}' already disabled");
        }
    }
    Ok(())
}

fn print_restart_reminder() {
    println!("⚠ Restart the host session to apply changes");
}
