// src/utils/mod.rs
//! Helpers for the generator's file I/O.

pub mod image;
pub mod output;
