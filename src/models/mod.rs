// src/models/mod.rs
//! Data structures written by the generator.

pub mod issuer;
