// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry catalog loading.
//!
//! The catalog is a read-only JSON document with a top-level `servers`
//! object mapping server name to definition. It is loaded fresh on every
//! invocation; nothing here writes.

use std::fs;
use std::path::Path;

use loadout_core::LoadoutError;
use tracing::debug;

use crate::definition::ServerDefinition;

/// The parsed registry catalog, preserving document order.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<(String, ServerDefinition)>,
}

impl Registry {
    /// Load and validate the catalog at `path`.
    ///
    /// Fails with `NotFound` if the file is absent, `Malformed` if it is not
    /// valid JSON, and `SchemaViolation` if the top-level `servers` object is
    /// missing or an entry does not match the definition schema.
    pub fn load(path: &Path) -> Result<Self, LoadoutError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| LoadoutError::from_io(path.to_path_buf(), e))?;

        let doc: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| LoadoutError::Malformed {
                path: path.to_path_buf(),
                source: e,
            })?;

        let servers = doc
            .get("servers")
            .and_then(serde_json::Value::as_object)
            .ok_or_else(|| LoadoutError::SchemaViolation {
                path: path.to_path_buf(),
                detail: "missing top-level `servers` object".to_string(),
            })?;

        let mut entries = Vec::with_capacity(servers.len());
        for (name, value) in servers {
            let def: ServerDefinition =
                serde_json::from_value(value.clone()).map_err(|e| {
                    LoadoutError::SchemaViolation {
                        path: path.to_path_buf(),
                        detail: format!("server `{name}`: {e}"),
                    }
                })?;
            entries.push((name.clone(), def));
        }

        debug!(count = entries.len(), path = %path.display(), "registry loaded");
        Ok(Self { entries })
    }

    /// Look up a definition by server name.
    pub fn get(&self, name: &str) -> Option<&ServerDefinition> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, def)| def)
    }

    /// All server names, in catalog order. Used for error messages.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Iterate entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServerDefinition)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
