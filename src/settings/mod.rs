// src/settings/mod.rs
//! Configuration for the issuer file generator.

pub mod ini_source;
pub mod loader;

pub use loader::{default_search_paths, ConfigLoader, IssuerSettings, ENV_PREFIX};
