// SPDX-License-Identifier: MPL-2.0
//! Validated user input.
//!
//! A session only ever stores values that passed these constructors, so the
//! rest of the application never re-checks MIME types or empty URLs.

use crate::domain::error::InputError;
use std::fmt;
use std::sync::Arc;

/// MIME prefix every accepted upload must carry.
pub const IMAGE_MIME_PREFIX: &str = "image/";

// =============================================================================
// ImageUpload
// =============================================================================

/// An image file selected by the user, held in memory until it is submitted.
///
/// # Example
///
/// ```
/// use ui_lens::domain::input::ImageUpload;
///
/// let upload = ImageUpload::new("shot.png", "image/png", vec![0u8; 4]).unwrap();
/// assert_eq!(upload.mime(), "image/png");
///
/// assert!(ImageUpload::new("notes.txt", "text/plain", Vec::<u8>::new()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    mime: String,
    bytes: Arc<[u8]>,
}

impl ImageUpload {
    /// Creates an upload, rejecting anything whose MIME type is not `image/*`.
    pub fn new(
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<Self, InputError> {
        let mime = mime.into();
        if !mime.starts_with(IMAGE_MIME_PREFIX) {
            return Err(InputError::NotAnImage { mime });
        }

        Ok(Self {
            file_name: file_name.into(),
            mime,
            bytes: bytes.into(),
        })
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a cheap shared handle to the raw bytes.
    #[must_use]
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Raw bytes are omitted: uploads can be several megabytes.
impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

// =============================================================================
// PageUrl
// =============================================================================

/// A page URL typed by the user, trimmed and guaranteed non-empty.
///
/// No scheme or host validation happens here; the screenshot service is the
/// authority on what it can load and reports problems through `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageUrl(String);

impl PageUrl {
    /// Parses raw text field input.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyUrl);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Source
// =============================================================================

/// What an analysis is run against. A session holds at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(ImageUpload),
    Url(PageUrl),
}

impl Source {
    /// Short human-readable label used in captions and logs.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Source::File(upload) => upload.file_name(),
            Source::Url(url) => url.as_str(),
        }
    }
}
