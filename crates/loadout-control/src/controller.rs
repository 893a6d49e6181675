// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The activation state machine.
//!
//! Each operation is a complete synchronous transaction: load the registry
//! and both stores, apply the requested transition (or just project state),
//! persist changed stores as a staged pair. Per-capability state is derived,
//! never stored: a name is enabled when it is listed in the settings
//! document or blanket mode is on.
//!
//! Guard order matters and is part of the contract: unknown-capability and
//! credential checks run before any store is read for writing, and every
//! no-op path returns before a single byte is staged.

use std::path::PathBuf;

use loadout_core::{CapabilityState, LoadoutError};
use loadout_credentials::{missing_keys, reference_env, CredentialFile};
use loadout_registry::{ConnectionSpec, Registry, ServerDefinition};
use loadout_store::{
    commit_pair, read_document, stage, ActivationSettings, Launch, ResolvedConnection,
    RuntimeConnections,
};
use serde::Serialize;
use tracing::{debug, info};

/// The four external files the controller operates on.
///
/// Always passed in explicitly; the controller never infers paths from its
/// own location or the environment.
#[derive(Debug, Clone)]
pub struct ControllerPaths {
    /// Read-only registry catalog.
    pub catalog: PathBuf,
    /// Activation settings document (read/write).
    pub settings: PathBuf,
    /// Runtime connection document (read/write).
    pub runtime_config: PathBuf,
    /// Optional `KEY=VALUE` credential file (read-only).
    pub credentials: PathBuf,
}

/// Result of an `enable` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnableOutcome {
    /// Both stores were updated.
    Enabled,
    /// The server was already in the enabled list; nothing was written.
    AlreadyEnabled,
}

/// Result of a `disable` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisableOutcome {
    /// Both stores were updated.
    Disabled,
    /// The server was not in the enabled list; nothing was written.
    AlreadyDisabled,
}

/// One row of the status projection, in registry order.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityRow {
    pub name: String,
    pub state: CapabilityState,
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: String,
    pub used_by: Vec<String>,
    pub env_vars: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,
}

/// Read-only projection of the full registry joined with activation state.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    pub enable_all: bool,
    pub servers: Vec<CapabilityRow>,
    pub enabled_count: usize,
    pub total: usize,
}

/// The capability activation controller.
pub struct ActivationController {
    paths: ControllerPaths,
}

impl ActivationController {
    pub fn new(paths: ControllerPaths) -> Self {
        Self { paths }
    }

    /// Enable `name`, updating both stores as one staged transaction.
    ///
    /// Fails with `UnknownCapability` for names not in the registry and
    /// `MissingCredentials` when a declared credential key is absent or
    /// empty; both guards run before any store is touched. Enabling an
    /// already-enabled server is a no-op.
    pub fn enable(&self, name: &str) -> Result<EnableOutcome, LoadoutError> {
        let registry = Registry::load(&self.paths.catalog)?;
        let def = self.lookup(&registry, name)?;

        let credentials = CredentialFile::load(&self.paths.credentials);
        let missing = missing_keys(def, &credentials);
        if !missing.is_empty() {
            return Err(LoadoutError::MissingCredentials {
                name: name.to_string(),
                keys: missing,
            });
        }

        let mut settings: ActivationSettings = read_document(&self.paths.settings)?;
        if settings.is_listed(name) {
            debug!(server = name, "already enabled");
            return Ok(EnableOutcome::AlreadyEnabled);
        }

        let mut runtime: RuntimeConnections = read_document(&self.paths.runtime_config)?;

        settings.add(name);
        let connection = resolve_connection(def, &credentials);
        let entry = serde_json::to_value(&connection).map_err(|e| LoadoutError::Unexpected {
            path: self.paths.runtime_config.clone(),
            source: std::io::Error::other(e),
        })?;
        runtime.insert(name, entry);

        self.persist(&settings, &runtime)?;
        info!(server = name, "server enabled");
        Ok(EnableOutcome::Enabled)
    }

    /// Disable `name`, updating both stores as one staged transaction.
    ///
    /// Required servers are never disabled on this path: the call returns
    /// `RequiresConfirmation` naming the dependent consumers, and the caller
    /// must re-issue through [`disable_confirmed`](Self::disable_confirmed).
    /// While blanket mode is on, single-name disable is rejected with
    /// `AmbiguousMode`. Disabling an already-disabled server is a no-op.
    pub fn disable(&self, name: &str) -> Result<DisableOutcome, LoadoutError> {
        self.disable_inner(name, false)
    }

    /// Disable `name` even if it is marked required.
    ///
    /// The explicit confirmation entry point: callers reach this only after
    /// an interactive layer has confirmed the removal.
    pub fn disable_confirmed(&self, name: &str) -> Result<DisableOutcome, LoadoutError> {
        self.disable_inner(name, true)
    }

    fn disable_inner(&self, name: &str, confirmed: bool) -> Result<DisableOutcome, LoadoutError> {
        let registry = Registry::load(&self.paths.catalog)?;
        let def = self.lookup(&registry, name)?;

        if def.required && !confirmed {
            return Err(LoadoutError::RequiresConfirmation {
                name: name.to_string(),
                used_by: def.used_by.clone(),
            });
        }

        let mut settings: ActivationSettings = read_document(&self.paths.settings)?;
        if settings.enable_all {
            return Err(LoadoutError::AmbiguousMode {
                name: name.to_string(),
            });
        }
        if !settings.is_listed(name) {
            debug!(server = name, "already disabled");
            return Ok(DisableOutcome::AlreadyDisabled);
        }

        let mut runtime: RuntimeConnections = read_document(&self.paths.runtime_config)?;

        settings.remove(name);
        let removed = runtime.remove(name);

        self.persist(&settings, &runtime)?;
        info!(server = name, runtime_entry_removed = removed, "server disabled");
        Ok(DisableOutcome::Disabled)
    }

    /// Pure read: project the registry joined with current activation state.
    pub fn status(&self) -> Result<StatusView, LoadoutError> {
        let registry = Registry::load(&self.paths.catalog)?;
        let settings: ActivationSettings = read_document(&self.paths.settings)?;

        let servers = registry
            .iter()
            .map(|(name, def)| CapabilityRow {
                name: name.to_string(),
                state: if settings.is_enabled(name) {
                    CapabilityState::Enabled
                } else {
                    CapabilityState::Disabled
                },
                required: def.required,
                kind: def.connection.kind(),
                description: def.description.clone(),
                used_by: def.used_by.clone(),
                env_vars: def.env_vars.clone(),
                env_file: def.env_file.clone(),
            })
            .collect();

        let enabled_count = if settings.enable_all {
            registry.len()
        } else {
            settings.enabled.len()
        };

        Ok(StatusView {
            enable_all: settings.enable_all,
            servers,
            enabled_count,
            total: registry.len(),
        })
    }

    fn lookup<'r>(
        &self,
        registry: &'r Registry,
        name: &str,
    ) -> Result<&'r ServerDefinition, LoadoutError> {
        registry.get(name).ok_or_else(|| LoadoutError::UnknownCapability {
            name: name.to_string(),
            known: registry.names(),
        })
    }

    /// Stage both documents, then commit settings first and the runtime
    /// document second.
    fn persist(
        &self,
        settings: &ActivationSettings,
        runtime: &RuntimeConnections,
    ) -> Result<(), LoadoutError> {
        let staged_settings = stage(&self.paths.settings, settings)?;
        let staged_runtime = stage(&self.paths.runtime_config, runtime)?;
        commit_pair(staged_settings, staged_runtime)
    }
}

/// Build the runtime entry for a definition: launch shape plus `${KEY}`
/// indirection tokens for its declared credentials.
fn resolve_connection(
    def: &ServerDefinition,
    credentials: &CredentialFile,
) -> ResolvedConnection {
    let launch = match &def.connection {
        ConnectionSpec::Stdio { command, args } => Launch::Process {
            command: command.clone(),
            args: args.clone(),
        },
        ConnectionSpec::Sse { url } => Launch::Endpoint { url: url.clone() },
    };
    ResolvedConnection {
        launch,
        env: reference_env(def, credentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_stdio_connection() {
        let def = ServerDefinition {
            connection: ConnectionSpec::Stdio {
                command: "search-bin".to_string(),
                args: vec!["--quiet".to_string()],
            },
            env_vars: vec![],
            required: false,
            used_by: vec![],
            description: String::new(),
            env_file: None,
        };
        let creds = CredentialFile::parse("");
        let conn = resolve_connection(&def, &creds);
        assert_eq!(
            conn.launch,
            Launch::Process {
                command: "search-bin".to_string(),
                args: vec!["--quiet".to_string()],
            }
        );
        assert!(conn.env.is_empty());
    }

    #[test]
    fn resolve_sse_connection_with_tokens() {
        let def = ServerDefinition {
            connection: ConnectionSpec::Sse {
                url: "https://mcp.example.com/sse".to_string(),
            },
            env_vars: vec!["API_KEY".to_string()],
            required: false,
            used_by: vec![],
            description: String::new(),
            env_file: None,
        };
        let creds = CredentialFile::parse("API_KEY=raw-secret\n");
        let conn = resolve_connection(&def, &creds);
        assert_eq!(conn.env.get("API_KEY").unwrap(), "${API_KEY}");
    }
}
