// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the loadout activation tool.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type used across all loadout crates.
///
/// Every variant carries enough context (offending path, capability name,
/// key lists) for the CLI to render an actionable message without string
/// matching on the error text.
#[derive(Debug, Error)]
pub enum LoadoutError {
    /// A required file does not exist.
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// A file exists but could not be parsed as JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The process lacks permission to read or write a file.
    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// A document parsed as JSON but does not match the expected structure.
    #[error("invalid document structure in {}: {detail}", .path.display())]
    SchemaViolation { path: PathBuf, detail: String },

    /// The requested capability name is not in the registry.
    #[error("server `{name}` not in registry; available: {}", .known.join(", "))]
    UnknownCapability { name: String, known: Vec<String> },

    /// The capability declares credential keys that are absent or empty.
    #[error("missing required environment variables for `{name}`: {}", .keys.join(", "))]
    MissingCredentials { name: String, keys: Vec<String> },

    /// Disabling a required capability needs an explicit confirmation step.
    ///
    /// Advisory rather than fatal: nothing was changed, and the caller may
    /// re-issue the request through the confirmed entry point.
    #[error("`{name}` is required for core functionality; disabling may break: {}", .used_by.join(", "))]
    RequiresConfirmation { name: String, used_by: Vec<String> },

    /// Disable was requested while blanket enable-all mode is active.
    #[error(
        "cannot disable `{name}` while enableAllProjectMcpServers is true; \
         enable a server first to switch to selective mode"
    )]
    AmbiguousMode { name: String },

    /// One of the two paired store writes landed and the other failed,
    /// leaving the stores inconsistent until reconciled by hand.
    #[error(
        "partial write: {} was updated but {} was not: {source}",
        .persisted.display(),
        .failed.display()
    )]
    PartialPersist {
        persisted: PathBuf,
        failed: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O fault, carrying the path it occurred on.
    #[error("unexpected error with {}: {source}", .path.display())]
    Unexpected {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadoutError {
    /// True for the advisory variant that asks for confirmation rather than
    /// reporting a fault.
    pub fn is_advisory(&self) -> bool {
        matches!(self, LoadoutError::RequiresConfirmation { .. })
    }

    /// Map an I/O error on `path` into the taxonomy.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => LoadoutError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => LoadoutError::PermissionDenied { path },
            _ => LoadoutError::Unexpected { path, source },
        }
    }
}
