// src/models/issuer.rs
//! Issuer profile data model.
//!
//! The issuer profile is the JSON document a certificate verifier fetches from
//! `id` to learn which blockchain addresses may issue and revoke certificates
//! on behalf of the issuer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar date format used for key activation dates (`YYYY-MM-DD`)
pub const KEY_DATE_FORMAT: &str = "%Y-%m-%d";

/// An address paired with the date it became active.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    /// Activation date, e.g. "2026-10-14"
    pub date: String,

    /// Blockchain address, e.g. "1ABCxyz"
    pub key: String,
}

impl KeyEntry {
    pub fn new(date: NaiveDate, key: impl Into<String>) -> Self {
        Self {
            date: date.format(KEY_DATE_FORMAT).to_string(),
            key: key.into(),
        }
    }
}

/// The issuer identification document.
///
/// # Fields
/// - `id`: URL this document is published at
/// - `url`: issuer's main URL
/// - `introduction_url`: derived from `url`, never configured directly
/// - `name`, `email`: optional contact details
/// - `image`: base64-encoded logo, or an empty string
/// - `issuer_keys`, `revocation_keys`: exactly one dated entry each
///
/// # Serialization
/// Field declaration order is the JSON key order. Absent optional values are
/// written as `null` so the key set is always the same.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IssuerProfile {
    pub id: String,

    pub url: Option<String>,

    #[serde(rename = "introductionURL")]
    pub introduction_url: String,

    pub name: Option<String>,

    pub email: Option<String>,

    pub image: String,

    #[serde(rename = "issuerKeys")]
    pub issuer_keys: Vec<KeyEntry>,

    #[serde(rename = "revocationKeys")]
    pub revocation_keys: Vec<KeyEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> IssuerProfile {
        let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        IssuerProfile {
            id: "https://example.org/issuer.json".to_string(),
            url: Some("https://example.org".to_string()),
            introduction_url: "https://example.org/intro/".to_string(),
            name: None,
            email: Some("certs@example.org".to_string()),
            image: String::new(),
            issuer_keys: vec![KeyEntry::new(date, "1ABCxyz")],
            revocation_keys: vec![KeyEntry::new(date, "1REVxyz")],
        }
    }

    #[test]
    fn test_key_entry_date_has_no_time_component() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let entry = KeyEntry::new(date, "1ABCxyz");
        assert_eq!(entry.date, "2026-03-07");
        assert_eq!(entry.key, "1ABCxyz");
    }

    #[test]
    fn test_json_keys_follow_declaration_order() {
        // serde_json::Map sorts keys, so order is checked on the text
        let text = serde_json::to_string(&sample_profile()).unwrap();
        let positions: Vec<usize> = [
            "\"id\"",
            "\"url\"",
            "\"introductionURL\"",
            "\"name\"",
            "\"email\"",
            "\"image\"",
            "\"issuerKeys\"",
            "\"revocationKeys\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_absent_optionals_serialize_as_null() {
        let value = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 8);
        assert!(value["name"].is_null());
        assert_eq!(value["email"], "certs@example.org");
    }

    #[test]
    fn test_parse_back_into_profile() {
        let text = serde_json::to_string_pretty(&sample_profile()).unwrap();
        let parsed: IssuerProfile = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample_profile());
    }
}
