// SPDX-License-Identifier: MPL-2.0
//! Product records as exchanged with the remote catalog.
//!
//! The image attribute has two shapes: a created product carries an
//! [`ImageRef`] the view can resolve and display, while a product being
//! created carries an [`ImageUpload`] holding the raw file bytes.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use url::Url;

// =============================================================================
// ProductId
// =============================================================================

/// Identifier assigned by the remote system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ImageRef
// =============================================================================

/// Display reference for a stored product image, as returned by the server.
///
/// Usually an absolute URL; relative paths are resolved against the API base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Resolves the reference into a fetchable URL.
    ///
    /// Returns `None` for an empty reference or one that cannot be joined.
    #[must_use]
    pub fn resolve(&self, base: &Url) -> Option<Url> {
        let reference = self.0.trim();
        if reference.is_empty() {
            return None;
        }
        base.join(reference).ok()
    }
}

// =============================================================================
// ImageUpload
// =============================================================================

/// Image file picked by the user, ready to be sent as a multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// MIME type guessed from the file extension.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => "image/png",
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("bmp") => "image/bmp",
            _ => "application/octet-stream",
        }
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Extensions offered by the image picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

// =============================================================================
// Product
// =============================================================================

/// A catalog entry as stored by the remote system.
///
/// Price and stock stay text: the server owns their numeric meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco", deserialize_with = "text_or_number")]
    pub price: String,
    #[serde(rename = "estoque", deserialize_with = "text_or_number")]
    pub stock: String,
    #[serde(rename = "imagem", default)]
    pub image: Option<ImageRef>,
}

/// Payload of a create request. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub image: ImageUpload,
}

/// Decimal and integer columns may arrive as JSON strings or numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Signed(value) => value.to_string(),
        TextOrNumber::Unsigned(value) => value.to_string(),
        TextOrNumber::Float(value) => value.to_string(),
    })
}
