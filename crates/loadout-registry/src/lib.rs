// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry catalog for the loadout activation tool.
//!
//! The registry is the immutable source of truth describing every known MCP
//! server: how it is launched or reached, which credential keys it needs,
//! and whether it is required for core functionality.

pub mod definition;
pub mod loader;

pub use definition::{ConnectionSpec, ServerDefinition};
pub use loader::Registry;
