// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed models for the two persisted documents.
//!
//! Both documents are shared with other tooling, so every struct flattens
//! unrecognized keys into an `extra` map and writes them back untouched.
//! The runtime document goes further: `mcpServers` entries are kept as raw
//! JSON values, and only the entry being acted on passes through the typed
//! [`ResolvedConnection`] model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The activation settings document.
///
/// `enableAllProjectMcpServers` (blanket mode) and `enabledMcpjsonServers`
/// (selective mode) are mutually exclusive: any mutation through
/// [`add`](Self::add) or [`remove`](Self::remove) forces the blanket flag
/// off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivationSettings {
    #[serde(rename = "enableAllProjectMcpServers", default)]
    pub enable_all: bool,

    #[serde(rename = "enabledMcpjsonServers", default)]
    pub enabled: Vec<String>,

    /// Keys owned by other tooling, preserved across rewrites.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ActivationSettings {
    /// Logical state: listed in selective mode, or blanket mode is on.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enable_all || self.is_listed(name)
    }

    /// Explicit membership in the selective-mode list only.
    pub fn is_listed(&self, name: &str) -> bool {
        self.enabled.iter().any(|n| n == name)
    }

    /// Enter selective mode and add `name` to the enabled list.
    pub fn add(&mut self, name: &str) {
        self.enable_all = false;
        if !self.is_listed(name) {
            self.enabled.push(name.to_string());
        }
    }

    /// Enter selective mode and remove `name` from the enabled list.
    pub fn remove(&mut self, name: &str) {
        self.enable_all = false;
        self.enabled.retain(|n| n != name);
    }
}

/// How the consuming host launches or reaches a server.
///
/// Untagged: the runtime document distinguishes local processes from remote
/// endpoints purely by shape (`command` vs `url`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Launch {
    Process {
        command: String,
        #[serde(default)]
        args: Vec<String>,
    },
    Endpoint { url: String },
}

/// A resolved connection entry in the runtime document.
///
/// The optional `env` map carries `${KEY}` indirection tokens only; literal
/// credential values never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConnection {
    #[serde(flatten)]
    pub launch: Launch,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

/// The runtime connection document (`mcpServers` map).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConnections {
    #[serde(rename = "mcpServers", default)]
    pub servers: serde_json::Map<String, serde_json::Value>,

    /// Keys owned by other tooling, preserved across rewrites.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RuntimeConnections {
    pub fn contains(&self, name: &str) -> bool {
        self.servers.contains_key(name)
    }

    /// Insert or replace the entry for `name`.
    pub fn insert(&mut self, name: &str, connection: serde_json::Value) {
        self.servers.insert(name.to_string(), connection);
    }

    /// Remove the entry for `name`, reporting whether it existed.
    ///
    /// `shift_remove` keeps the remaining entries in document order.
    pub fn remove(&mut self, name: &str) -> bool {
        self.servers.shift_remove(name).is_some()
    }

    /// Typed view of one entry, where it matches the resolved-connection
    /// shape. Foreign entries with other shapes return `None`.
    pub fn get(&self, name: &str) -> Option<ResolvedConnection> {
        self.servers
            .get(name)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
