// src/services/issuer_file.rs
//! Issuer File Generator
//!
//! Assembles the issuer profile from validated settings and writes it out.
//! The pipeline is linear:
//! settings → `build_profile` → `render_profile` → `OutputSink::write`
//!
//! The activation date is passed in rather than read from the clock, so a
//! given set of settings and date always renders to the same bytes.

use crate::error::Result;
use crate::models::issuer::{IssuerProfile, KeyEntry};
use crate::settings::IssuerSettings;
use crate::utils::image::encode_image;
use crate::utils::output::OutputSink;
use chrono::NaiveDate;
use log::{debug, warn};

/// Path segment appended to the issuer URL
pub const INTRODUCTION_SEGMENT: &str = "intro/";

/// Derives the introduction endpoint from the issuer's main URL.
///
/// A URL ending in `/` gets `intro/`; any other URL gets `/intro/`.
///
/// # Missing base
/// An absent URL is treated as an empty base and yields `"/intro/"`.
/// This keeps the output shape fixed when `issuer_url` is not configured.
pub fn introduction_url(issuer_url: Option<&str>) -> String {
    let base = issuer_url.unwrap_or_default();
    if base.ends_with('/') {
        format!("{}{}", base, INTRODUCTION_SEGMENT)
    } else {
        format!("{}/{}", base, INTRODUCTION_SEGMENT)
    }
}

/// Assembles the issuer profile.
///
/// # Arguments
/// * `settings` - Validated generator inputs
/// * `issued_on` - Activation date stamped on both key entries
///
/// # Returns
/// The complete profile, or `LogoUnreadable` if a logo file is configured
/// but cannot be read
pub fn build_profile(settings: &IssuerSettings, issued_on: NaiveDate) -> Result<IssuerProfile> {
    if settings.issuer_url.as_deref().map_or(true, str::is_empty) {
        warn!("issuer_url is not set; introductionURL is derived from an empty base");
    }
    if settings.issuer_certs_url.is_some() {
        debug!("issuer_certs_url is not part of the issuer profile, ignoring");
    }

    let image = match &settings.issuer_logo_file {
        Some(path) => encode_image(path)?,
        None => String::new(),
    };

    Ok(IssuerProfile {
        id: settings.issuer_id.clone(),
        url: settings.issuer_url.clone(),
        introduction_url: introduction_url(settings.issuer_url.as_deref()),
        name: settings.issuer_name.clone(),
        email: settings.issuer_email.clone(),
        image,
        issuer_keys: vec![KeyEntry::new(issued_on, settings.issuer_address.as_str())],
        revocation_keys: vec![KeyEntry::new(issued_on, settings.revocation_address.as_str())],
    })
}

/// Serializes a profile with 2-space indentation and no trailing newline.
pub fn render_profile(profile: &IssuerProfile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// Builds, renders and writes the issuer file.
///
/// The document is fully rendered in memory before the sink is touched, so
/// a failure never leaves partial output.
pub fn generate_issuer_file(settings: &IssuerSettings, issued_on: NaiveDate) -> Result<()> {
    let profile = build_profile(settings, issued_on)?;
    let rendered = render_profile(&profile)?;
    OutputSink::from_path(settings.output_file.as_deref()).write(&rendered)
}
