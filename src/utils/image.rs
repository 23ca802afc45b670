// src/utils/image.rs
//! Logo image encoding.

use crate::error::{IssuerError, Result};
use std::fs;
use std::path::Path;

/// Reads an image file and returns its contents as standard base64 (padded).
///
/// The bytes are embedded as-is; the image format is not inspected.
///
/// # Errors
/// `IssuerError::LogoUnreadable` if the file is missing or cannot be read.
pub fn encode_image(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| IssuerError::LogoUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(base64::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_encode_image_matches_file_bytes() {
        let dir = TempDir::new("encode_image").unwrap();
        let logo = dir.path().join("logo.png");
        let bytes = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        fs::write(&logo, bytes).unwrap();

        let encoded = encode_image(&logo).unwrap();
        assert_eq!(encoded, "iVBORw0KGgoA");
        assert_eq!(base64::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_encode_empty_file() {
        let dir = TempDir::new("encode_empty").unwrap();
        let logo = dir.path().join("empty.png");
        fs::write(&logo, b"").unwrap();

        assert_eq!(encode_image(&logo).unwrap(), "");
    }

    #[test]
    fn test_missing_logo_is_resource_error() {
        let dir = TempDir::new("encode_missing").unwrap();
        let logo = dir.path().join("nope.png");

        match encode_image(&logo) {
            Err(IssuerError::LogoUnreadable { path, .. }) => assert_eq!(path, logo),
            other => panic!("expected LogoUnreadable, got {:?}", other),
        }
    }
}
