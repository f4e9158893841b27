// SPDX-License-Identifier: MPL-2.0
//! Media handling: upload loading/transcoding and thumbnail export.

pub mod export;
pub mod image;

pub use image::{from_decoded, load_upload, UploadedImage};

/// Raster formats accepted by the image pickers.
///
/// Kept in sync with the codecs enabled on the `image` crate.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "ico",
];

/// Returns whether `path` carries a supported raster extension.
#[must_use]
pub fn is_supported_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
