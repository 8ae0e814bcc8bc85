//! Free space images, carried as `data:` URIs.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// An image shown in the center square, encoded as a `data:` URI so a
/// rendered page needs no side files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreeSpaceImage(String);

impl FreeSpaceImage {
    /// Encode raw image bytes with the given MIME type.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    /// Read an image file, guessing its MIME type from the extension.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(&bytes, mime_for_path(path)))
    }

    /// Wrap an existing URI (remote URL or prebuilt data URI).
    #[must_use]
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The URI, usable as an `<img src>`.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.0
    }
}

/// MIME type for common image extensions.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
