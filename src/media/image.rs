// SPDX-License-Identifier: MPL-2.0
//! Decoding and transcoding of user-picked images.
//!
//! Every upload is decoded once for validation, then re-encoded as PNG in two
//! sizes: the original resolution for export and a downscaled copy for the
//! live preview. Both are exposed as `data:` URLs so the markup layer can
//! embed them without touching the filesystem again.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image_rs::{GenericImageView, ImageError, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// Longest side of the preview transcode. Keeps per-keystroke markup small.
pub const PREVIEW_MAX_DIM: u32 = 640;

/// A validated, PNG-transcoded user upload.
///
/// Byte buffers and data URLs are shared behind `Arc`, so cloning a scene
/// that holds uploads stays cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    width: u32,
    height: u32,
    full_png: Arc<Vec<u8>>,
    preview_png: Arc<Vec<u8>>,
    full_data_url: Arc<String>,
    preview_data_url: Arc<String>,
}

impl UploadedImage {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full-resolution PNG as a `data:image/png;base64,` URL.
    #[must_use]
    pub fn full_data_url(&self) -> &str {
        &self.full_data_url
    }

    /// Downscaled PNG as a `data:image/png;base64,` URL.
    #[must_use]
    pub fn preview_data_url(&self) -> &str {
        &self.preview_data_url
    }

    #[cfg(test)]
    pub(crate) fn preview_png(&self) -> &[u8] {
        &self.preview_png
    }
}

/// Builds an `UploadedImage` from an already decoded image.
///
/// Split out of [`load_upload`] so tests and the startup preload can build
/// uploads without a file on disk.
pub fn from_decoded(decoded: image_rs::DynamicImage) -> Result<UploadedImage> {
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }

    let full_png = Arc::new(encode_png(&decoded)?);

    let preview_png = if width <= PREVIEW_MAX_DIM && height <= PREVIEW_MAX_DIM {
        Arc::clone(&full_png)
    } else {
        let thumb = decoded.thumbnail(PREVIEW_MAX_DIM, PREVIEW_MAX_DIM);
        Arc::new(encode_png(&thumb)?)
    };

    let full_data_url = Arc::new(data_url(&full_png));
    let preview_data_url = if Arc::ptr_eq(&preview_png, &full_png) {
        Arc::clone(&full_data_url)
    } else {
        Arc::new(data_url(&preview_png))
    };

    Ok(UploadedImage {
        width,
        height,
        full_png,
        preview_png,
        full_data_url,
        preview_data_url,
    })
}

/// Loads and validates an image file picked by the user.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Image`]
/// when the bytes do not decode as a supported raster format.
pub fn load_upload<P: AsRef<Path>>(path: P) -> Result<UploadedImage> {
    let bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    from_decoded(decoded)
}

fn encode_png(image: &image_rs::DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

fn data_url(png_bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(png_bytes))
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let upload = load_upload(&image_path).expect("png should load successfully");
        assert_eq!(upload.width(), 4);
        assert_eq!(upload.height(), 2);
    }

    #[test]
    fn data_urls_carry_png_payloads() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(3, 3, Rgba([0, 128, 255, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let upload = load_upload(&image_path).expect("png should load");
        assert!(upload.full_data_url().starts_with("data:image/png;base64,"));
        assert!(upload
            .preview_data_url()
            .starts_with("data:image/png;base64,"));
    }

    #[test]
    fn small_upload_reuses_full_bytes_for_preview() {
        let small = image_rs::DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            10,
            10,
            Rgba([1, 2, 3, 255]),
        ));
        let upload = from_decoded(small).expect("small image should transcode");
        assert_eq!(upload.full_data_url(), upload.preview_data_url());
    }

    #[test]
    fn large_upload_gets_downscaled_preview() {
        let wide = image_rs::DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            800,
            100,
            Rgba([9, 9, 9, 255]),
        ));
        let upload = from_decoded(wide).expect("large image should transcode");
        assert_ne!(upload.full_data_url(), upload.preview_data_url());

        let preview =
            image_rs::load_from_memory(upload.preview_png()).expect("preview should decode");
        assert_eq!(preview.dimensions(), (640, 80));
        // Original dimensions stay untouched
        assert_eq!(upload.width(), 800);
        assert_eq!(upload.height(), 100);
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_upload(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_upload(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn jpeg_upload_is_transcoded_to_png() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let jpeg_path = temp_dir.path().join("photo.jpg");
        image_rs::DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 4, Rgba([200, 10, 10, 255])))
            .to_rgb8()
            .save(&jpeg_path)
            .expect("failed to write jpeg");

        let upload = load_upload(&jpeg_path).expect("jpeg should load");
        assert!(upload.full_data_url().starts_with("data:image/png;base64,"));
        assert_eq!(upload.width(), 6);
        assert_eq!(upload.height(), 4);
    }
}
