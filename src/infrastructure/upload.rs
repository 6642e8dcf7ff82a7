// SPDX-License-Identifier: MPL-2.0
//! Reading picked or dropped files into [`ImageUpload`] values.

use crate::domain::input::ImageUpload;
use crate::error::{Error, Result};
use image_rs::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Extensions offered by the file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "webp", "gif", "bmp", "tiff", "tif", "ico",
];

/// MIME type reported when neither the extension nor the content is recognized.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Reads `path` and validates that it holds an image.
///
/// The MIME type comes from the extension first, then from the leading bytes.
/// A file that is neither fails with [`InputError::NotAnImage`].
///
/// [`InputError::NotAnImage`]: crate::error::InputError::NotAnImage
pub fn read_upload<P: AsRef<Path>>(path: P) -> Result<ImageUpload> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let mime = detect_mime(path, &bytes);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    log::debug!(
        "Read {} ({mime}, {} bytes)",
        path.display(),
        bytes.len()
    );

    ImageUpload::new(file_name, mime, bytes).map_err(Error::from)
}

/// Detects the MIME type of a file from its extension, then its content.
#[must_use]
pub fn detect_mime(path: &Path, bytes: &[u8]) -> &'static str {
    ImageFormat::from_path(path)
        .or_else(|_| image_rs::guess_format(bytes))
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME)
}

/// Reads pixel dimensions from encoded image bytes without decoding pixels.
///
/// Returns `None` for data the decoder does not recognize; the preview still
/// shows, it just goes without a size caption.
#[must_use]
pub fn image_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use image_rs::RgbaImage;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        RgbaImage::new(width, height)
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn reads_png_with_mime_and_name() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("screen.png");
        std::fs::write(&path, png_bytes(4, 3)).expect("write");

        let upload = read_upload(&path).expect("upload");
        assert_eq!(upload.file_name(), "screen.png");
        assert_eq!(upload.mime(), "image/png");
        assert_eq!(image_dimensions(upload.bytes()), Some((4, 3)));
    }

    #[test]
    fn sniffs_content_when_extension_is_missing() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("capture");
        std::fs::write(&path, png_bytes(1, 1)).expect("write");

        let upload = read_upload(&path).expect("upload");
        assert_eq!(upload.mime(), "image/png");
    }

    #[test]
    fn rejects_text_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").expect("write");

        match read_upload(&path) {
            Err(Error::Input(InputError::NotAnImage { mime })) => assert_eq!(mime, UNKNOWN_MIME),
            other => panic!("expected NotAnImage, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = read_upload(dir.path().join("nope.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn dimensions_of_garbage_are_unknown() {
        assert_eq!(image_dimensions(b"definitely not an image"), None);
    }
}
