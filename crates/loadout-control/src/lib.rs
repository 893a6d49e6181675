// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Activation controller and status reporting for the loadout tool.
//!
//! The controller is the only writer of the two persisted documents. It
//! derives per-server state from the settings document, applies guarded
//! enable/disable transitions, and keeps both stores synchronized through a
//! staged pair commit. The reporter is a pure projection of registry plus
//! settings into the status report.

pub mod controller;
pub mod report;

pub use controller::{
    ActivationController, CapabilityRow, ControllerPaths, DisableOutcome, EnableOutcome,
    StatusView,
};
pub use report::render;
