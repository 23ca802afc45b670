// src/settings/ini_source.rs
//! INI config files read with values kept verbatim.
//!
//! The stock `config` INI format runs rust-ini with escape processing, which
//! rejects or rewrites backslashes (`C:\logos\x.png`). Issuer config files are
//! plain `key = value` text, so escapes are disabled here.

use config::{ConfigError, Map, Source, Value, ValueKind};
use ini::{Ini, ParseOption};
use std::fs;
use std::path::PathBuf;

/// A `config` source backed by an INI file on disk.
///
/// Keys before the first section header land at the top level; keys under
/// `[section]` become a nested table named after the section. Keys and
/// section names are lowercased like the rest of `config`.
#[derive(Debug, Clone)]
pub struct IniFile {
    path: PathBuf,
}

impl IniFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for IniFile {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let uri = self.path.display().to_string();
        let text = fs::read_to_string(&self.path).map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        parse_ini(&text, &uri).map_err(|cause| ConfigError::FileParse {
            uri: Some(uri.clone()),
            cause: Box::new(cause),
        })
    }
}

/// Parses INI text without escape handling into a `config` table.
pub fn parse_ini(text: &str, uri: &str) -> Result<Map<String, Value>, ini::ParseError> {
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(text, options)?;
    let origin = uri.to_string();

    let mut root = Map::new();
    for (section, properties) in ini.iter() {
        let mut entries = Map::new();
        for (key, value) in properties.iter() {
            entries.insert(
                key.to_lowercase(),
                Value::new(Some(&origin), ValueKind::String(value.to_string())),
            );
        }
        match section {
            Some(name) => {
                root.insert(name.to_lowercase(), Value::new(Some(&origin), ValueKind::Table(entries)));
            }
            None => root.extend(entries),
        }
    }
    Ok(root)
}
