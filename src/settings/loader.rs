// src/settings/loader.rs
//! Layered configuration loading.
//!
//! Sources are merged with the `config` crate, lowest precedence first:
//! 1. Default config files from an explicit search list (skipped when missing)
//! 2. The `--my-config` file (must exist)
//! 3. `CERT_ISSUER_*` environment variables
//! 4. Command line flags
//!
//! Required issuer values are validated only after the merge, so any source
//! may supply them. Path flags bypass the string-keyed merge and are applied
//! to the validated settings as given, so non-UTF-8 paths survive.

use crate::cli::Cli;
use crate::error::{IssuerError, Result};
use crate::settings::ini_source::IniFile;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `CERT_ISSUER_ISSUER_ADDRESS`
pub const ENV_PREFIX: &str = "CERT_ISSUER";

/// File name looked up in each default search directory
pub const DEFAULT_CONFIG_FILE: &str = "conf.ini";

/// Candidate default config files for a base directory.
pub fn default_search_paths(base_dir: &Path) -> Vec<PathBuf> {
    vec![base_dir.join(DEFAULT_CONFIG_FILE)]
}

/// Picks the parser for a config file by extension. Anything unrecognised is
/// treated as a flat `key = value` INI file.
pub fn file_format_for(path: &Path) -> FileFormat {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => FileFormat::Toml,
        Some("json") => FileFormat::Json,
        Some("yaml") | Some("yml") => FileFormat::Yaml,
        _ => FileFormat::Ini,
    }
}

/// Fully validated generator inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerSettings {
    pub issuer_address: String,
    pub revocation_address: String,
    pub issuer_id: String,
    pub issuer_url: Option<String>,
    /// Accepted for compatibility with existing config files; not written to the profile
    pub issuer_certs_url: Option<String>,
    pub issuer_name: Option<String>,
    pub issuer_email: Option<String>,
    pub issuer_logo_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

/// Merged values before validation. Unknown keys in config files are ignored.
#[derive(Deserialize, Debug, Default)]
struct RawSettings {
    issuer_address: Option<String>,
    revocation_address: Option<String>,
    issuer_id: Option<String>,
    issuer_url: Option<String>,
    issuer_certs_url: Option<String>,
    issuer_name: Option<String>,
    issuer_email: Option<String>,
    issuer_logo_file: Option<String>,
    output_file: Option<String>,
}

impl RawSettings {
    fn validate(self) -> Result<IssuerSettings> {
        Ok(IssuerSettings {
            issuer_address: required(self.issuer_address, "issuer_address")?,
            revocation_address: required(self.revocation_address, "revocation_address")?,
            issuer_id: required(self.issuer_id, "issuer_id")?,
            issuer_url: self.issuer_url,
            issuer_certs_url: self.issuer_certs_url,
            issuer_name: self.issuer_name,
            issuer_email: self.issuer_email,
            issuer_logo_file: non_empty_path(self.issuer_logo_file),
            output_file: non_empty_path(self.output_file),
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(IssuerError::MissingArgument(name))
}

// An empty path means "not given": no logo, or stdout.
fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn given_path(path: &Path) -> Option<PathBuf> {
    (!path.as_os_str().is_empty()).then(|| path.to_path_buf())
}

/// Builds `IssuerSettings` from config files, environment and CLI flags.
pub struct ConfigLoader {
    search_paths: Vec<PathBuf>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    /// Creates a loader reading the given default files, plus environment
    /// variables named `<env_prefix>_<KEY>` when a prefix is given.
    pub fn new(search_paths: Vec<PathBuf>, env_prefix: Option<&str>) -> Self {
        Self {
            search_paths,
            env_prefix: env_prefix.map(str::to_string),
        }
    }

    /// Merges every source and validates the result.
    ///
    /// # Errors
    /// - `ConfigFileNotFound` if `--my-config` does not point at a file
    /// - `Config` if a source cannot be parsed
    /// - `MissingArgument` if a required value is absent everywhere
    pub fn load(&self, cli: &Cli) -> Result<IssuerSettings> {
        let mut builder = Config::builder();

        for path in &self.search_paths {
            if path.is_file() {
                debug!("Loading default config {}", path.display());
                builder = add_file(builder, path);
            } else {
                debug!("Default config {} not found, skipping", path.display());
            }
        }

        if !cli.my_config.is_file() {
            return Err(IssuerError::ConfigFileNotFound(cli.my_config.clone()));
        }
        debug!("Loading config {}", cli.my_config.display());
        builder = add_file(builder, &cli.my_config);

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(Environment::with_prefix(prefix));
        }

        for (key, value) in cli_overrides(cli) {
            builder = builder.set_override(key, value)?;
        }

        let raw: RawSettings = builder.build()?.try_deserialize()?;
        let mut settings = raw.validate()?;

        if let Some(path) = &cli.issuer_logo_file {
            settings.issuer_logo_file = given_path(path);
        }
        if let Some(path) = &cli.output_file {
            settings.output_file = given_path(path);
        }
        Ok(settings)
    }
}

fn add_file(builder: ConfigBuilder<DefaultState>, path: &Path) -> ConfigBuilder<DefaultState> {
    match file_format_for(path) {
        FileFormat::Ini => builder.add_source(IniFile::new(path)),
        format => builder.add_source(File::from(path).format(format).required(true)),
    }
}

/// String flags given on the command line, keyed by their config names.
fn cli_overrides(cli: &Cli) -> Vec<(&'static str, String)> {
    [
        ("issuer_address", cli.issuer_address.clone()),
        ("revocation_address", cli.revocation_address.clone()),
        ("issuer_id", cli.issuer_id.clone()),
        ("issuer_url", cli.issuer_url.clone()),
        ("issuer_certs_url", cli.issuer_certs_url.clone()),
        ("issuer_name", cli.issuer_name.clone()),
        ("issuer_email", cli.issuer_email.clone()),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|v| (key, v)))
    .collect()
}
