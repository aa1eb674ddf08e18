//! Wire-level content items.

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, ErrorContext, Result};

/// One unit of classified input.
///
/// Serializes as `{"type": "text" | "image", "content": <string>}`. Image
/// payloads are always standard base64, whatever their origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ContentItem {
    Text(String),
    Image(String),
}

/// Kind of a [`ContentItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Image,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text(text.into())
    }

    /// Image from an already base64-encoded payload. The payload is not checked.
    pub fn image_base64(data: impl Into<String>) -> Self {
        ContentItem::Image(data.into())
    }

    pub fn image_bytes(bytes: impl AsRef<[u8]>) -> Self {
        ContentItem::Image(base64::engine::general_purpose::STANDARD.encode(bytes.as_ref()))
    }

    /// Read a file and encode it as an image item.
    ///
    /// Fails with [`Error::ContentFetch`] when the file cannot be read.
    pub fn image_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            Error::content_fetch(path.display().to_string(), format!("failed to read file: {}", e), None)
        })?;
        Ok(Self::image_bytes(bytes))
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Text(_) => ContentKind::Text,
            ContentItem::Image(_) => ContentKind::Image,
        }
    }

    /// Text, or base64 image payload.
    pub fn payload(&self) -> &str {
        match self {
            ContentItem::Text(s) | ContentItem::Image(s) => s,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ContentItem::Image(_))
    }

    /// Decode the base64 payload of an image item back to raw bytes.
    pub fn decode_image(&self) -> Result<Vec<u8>> {
        match self {
            ContentItem::Image(data) => base64::engine::general_purpose::STANDARD
                .decode(data)
                .map_err(|e| {
                    Error::validation_with_context(
                        "image payload is not valid base64",
                        ErrorContext::new().with_details(e.to_string()),
                    )
                }),
            ContentItem::Text(_) => Err(Error::validation("text item has no image payload")),
        }
    }
}
