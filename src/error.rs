// src/error.rs
//! Error taxonomy for the issuer file generator.
//!
//! Errors fall into two families:
//! - **Configuration errors**: a required value is missing or a config source
//!   cannot be read. These are raised before any output is produced.
//! - **Resource errors**: the logo file or the output destination cannot be
//!   accessed. These carry the underlying I/O cause.
//!
//! Nothing in the crate recovers from or retries on these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssuerError {
    /// A required setting was absent (or empty) in every source
    #[error("missing required argument: --{0}")]
    MissingArgument(&'static str),

    #[error("config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot read logo file {}: {source}", .path.display())]
    LogoUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IssuerError>;
