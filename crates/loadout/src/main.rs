// SPDX-FileCopyrightText: 2026 Loadout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loadout - selective MCP server activation.
//!
//! Decides, per named MCP server, whether the consuming host process should
//! load it, and keeps the activation settings and runtime connection
//! documents mutually consistent with that decision.

mod status;
mod toggle;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use loadout_control::{ActivationController, ControllerPaths};
use loadout_core::LoadoutError;

/// Selective MCP server activation.
#[derive(Parser, Debug)]
#[command(name = "loadout", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every known server with its activation state.
    Status {
        /// Output structured JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Enable a server in both configuration stores.
    Enable {
        /// Server name from the registry.
        name: String,
    },
    /// Disable a server in both configuration stores.
    Disable {
        /// Server name from the registry.
        name: String,
        /// Confirm disabling a server marked as required.
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    // Bad or missing arguments print usage and exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let config = match loadout_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            loadout_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let controller = ActivationController::new(ControllerPaths {
        catalog: PathBuf::from(&config.paths.catalog),
        settings: PathBuf::from(&config.paths.settings),
        runtime_config: PathBuf::from(&config.paths.runtime_config),
        credentials: PathBuf::from(&config.paths.credentials),
    });

    let result = match &cli.command {
        Commands::Status { json, plain } => {
            status::run_status(&controller, &config, *json, *plain)
        }
        Commands::Enable { name } => toggle::run_enable(&controller, name),
        Commands::Disable { name, force } => toggle::run_disable(&controller, name, *force),
    };

    if let Err(err) = result {
        report_error(&err);
        std::process::exit(1);
    }
}

/// Print an error with a follow-up hint where one helps.
fn report_error(err: &LoadoutError) {
    eprintln!("error: {err}");
    match err {
        LoadoutError::UnknownCapability { name, known } => {
            if let Some(suggestion) = suggest_name(name, known) {
                eprintln!("hint: did you mean `{suggestion}`?");
            }
        }
        LoadoutError::RequiresConfirmation { name, .. } => {
            eprintln!("hint: re-run as `loadout disable {name} --force` to confirm");
        }
        LoadoutError::PartialPersist { persisted, failed, .. } => {
            eprintln!(
                "hint: {} was updated but {} was not; reconcile by hand before the next run",
                persisted.display(),
                failed.display()
            );
        }
        _ => {}
    }
}

/// Suggest a close server name using the same fuzzy matching the config
/// diagnostics use.
fn suggest_name(unknown: &str, known: &[String]) -> Option<String> {
    let candidates: Vec<&str> = known.iter().map(String::as_str).collect();
    loadout_config::diagnostic::suggest_key(unknown, &candidates)
}

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr so stdout carries only report output.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,loadout={log_level},loadout_config={log_level},\
             loadout_registry={log_level},loadout_credentials={log_level},\
             loadout_store={log_level},loadout_control={log_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
