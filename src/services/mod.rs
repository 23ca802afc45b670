// src/services/mod.rs
//! Document generation.

pub mod issuer_file;
