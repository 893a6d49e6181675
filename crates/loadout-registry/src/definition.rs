// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server definition model parsed from the registry catalog.

use serde::{Deserialize, Serialize};

/// How a server is reached, tagged by the registry's `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConnectionSpec {
    /// Local subprocess spoken to over stdin/stdout.
    Stdio {
        command: String,
        #[serde(default)]
        args: Vec<String>,
    },
    /// Remote endpoint spoken to over server-sent events.
    Sse { url: String },
}

impl ConnectionSpec {
    /// The registry's wire name for this connection type.
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectionSpec::Stdio { .. } => "stdio",
            ConnectionSpec::Sse { .. } => "sse",
        }
    }
}

/// A single immutable server entry from the registry catalog.
///
/// `env_vars` names the credential keys that must be present (and non-empty)
/// in the credential file before the server may be enabled. `required`
/// servers cannot be disabled without explicit confirmation; `used_by` lists
/// the consumers that would break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDefinition {
    #[serde(flatten)]
    pub connection: ConnectionSpec,

    #[serde(default)]
    pub env_vars: Vec<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub used_by: Vec<String>,

    #[serde(default)]
    pub description: String,

    /// Which file holds the credentials, shown in the status report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_file: Option<String>,
}
