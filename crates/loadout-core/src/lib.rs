// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the loadout MCP activation tool.
//!
//! Provides the error taxonomy and the small set of shared types used by the
//! registry, store, and controller crates.

pub mod error;
pub mod types;

pub use error::LoadoutError;
pub use types::CapabilityState;
