// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the loadout workspace.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Derived activation state of a capability.
///
/// Never stored: computed from the activation settings document on every
/// invocation (member of the enabled list, or blanket enable-all mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CapabilityState {
    Enabled,
    Disabled,
}

impl CapabilityState {
    pub fn is_enabled(self) -> bool {
        matches!(self, CapabilityState::Enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_displays_lowercase() {
        assert_eq!(CapabilityState::Enabled.to_string(), "enabled");
        assert_eq!(CapabilityState::Disabled.to_string(), "disabled");
    }

    #[test]
    fn state_serializes_lowercase() {
        let json = serde_json::to_string(&CapabilityState::Enabled).unwrap();
        assert_eq!(json, "\"enabled\"");
    }
}
