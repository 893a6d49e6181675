// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential handling for the loadout activation tool.
//!
//! Reads the optional `KEY=VALUE` credential file, checks a server's
//! declared requirements against it, and produces `${KEY}` indirection
//! tokens for generated configuration. Plaintext values stay inside
//! [`CredentialFile`] behind `secrecy` and are never serialized.

pub mod envfile;
pub mod resolve;

pub use envfile::CredentialFile;
pub use resolve::{missing_keys, reference_env};
