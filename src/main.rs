// src/main.rs

//! # Issuer File Generator - Main Entry Point
//!
//! Generates the issuer identification file (`issuer.json`) that certificate
//! issuing and validation tools read to learn an issuer's keys.
//!
//! ## Pipeline
//! 1. **Settings**: CLI flags layered over config files and the environment
//! 2. **Services**: profile assembly and rendering
//! 3. **Output**: stdout or an atomically replaced file
//!
//! ## Environment Variables
//! - `RUST_LOG`: log filter for `env_logger` (logs go to stderr)
//! - `CERT_ISSUER_<SETTING>`: override any setting, e.g. `CERT_ISSUER_ISSUER_URL`
//!
//! A `.env` file in the working directory is loaded first when present.

use crate::cli::Cli;
use crate::error::IssuerError;
use crate::services::issuer_file::generate_issuer_file;
use crate::settings::{default_search_paths, ConfigLoader, ENV_PREFIX};
use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use dotenv::dotenv;

mod cli;           // Command line flags
mod error;         // Error taxonomy
mod models;        // Data structures
mod services;      // Profile assembly
mod settings;      // Layered configuration
mod utils;         // Image encoding and output sinks

/// Main application entry point
///
/// # Exit codes
/// - `0` on success
/// - `2` with a usage message when a required setting is missing
/// - `1` on any other failure (unreadable logo, unwritable output)
fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let base_dir = std::env::current_dir().context("cannot determine working directory")?;
    let loader = ConfigLoader::new(default_search_paths(&base_dir), Some(ENV_PREFIX));

    let settings = match loader.load(&cli) {
        Ok(settings) => settings,
        Err(err @ IssuerError::MissingArgument(_)) => {
            Cli::command()
                .error(ErrorKind::MissingRequiredArgument, err)
                .exit();
        }
        Err(err) => return Err(err).context("failed to load configuration"),
    };

    let today = chrono::Local::now().date_naive();
    generate_issuer_file(&settings, today).context("failed to generate issuer file")?;

    Ok(())
}
