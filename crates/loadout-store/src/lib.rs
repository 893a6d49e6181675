// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted document stores for the loadout activation tool.
//!
//! Two JSON documents are managed: the activation settings (global mode flag
//! plus the enabled-server list) and the runtime connection map the host
//! process reads. Reads return a tagged error taxonomy; writes go through
//! staged temp files committed as an ordered pair with atomic renames.

pub mod documents;
pub mod persist;

pub use documents::{ActivationSettings, Launch, ResolvedConnection, RuntimeConnections};
pub use persist::{commit_pair, read_document, stage, StagedWrite};
