// SPDX-License-Identifier: MPL-2.0
//! Thumbnail export: full-resolution rendering and PNG encoding.
//!
//! Export always renders at the logical canvas size (1280x720) from the
//! full-quality transcodes, independent of what the preview currently shows.

use crate::compose::scene::{Scene, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::compose::{markup, Bitmap, ImageQuality, Rasterizer};
use crate::error::{Error, Result};
use image_rs::{ImageBuffer, ImageFormat, Rgba};
use std::path::Path;

/// Renders the scene at export resolution.
///
/// # Errors
///
/// Propagates the rasterizer's [`Error::Svg`] on render failure.
pub fn render_thumbnail(scene: &Scene, rasterizer: &dyn Rasterizer) -> Result<Bitmap> {
    let doc = markup::document(scene, ImageQuality::Full);
    rasterizer.rasterize(&doc, CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// Encodes a rendered bitmap as PNG at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] when the buffer does not match its declared
/// dimensions or the file cannot be written.
pub fn save_png<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> Result<()> {
    let image: ImageBuffer<Rgba<u8>, _> =
        ImageBuffer::from_raw(bitmap.width, bitmap.height, (*bitmap.rgba).clone())
            .ok_or_else(|| Error::Io("bitmap size does not match its dimensions".to_string()))?;

    image
        .save_with_format(path.as_ref(), ImageFormat::Png)
        .map_err(|e| Error::Io(format!("Failed to save thumbnail: {e}")))?;

    Ok(())
}

/// Suggested filename for the save dialog, derived from the title.
///
/// `"EPIC FAIL"` becomes `epic-fail-thumbnail.png`; titles with no
/// alphanumeric content fall back to `thumbnail.png`.
#[must_use]
pub fn default_filename(title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        "thumbnail.png".to_string()
    } else {
        format!("{slug}-thumbnail.png")
    }
}

/// Lowercases and keeps alphanumeric runs, joining them with single dashes.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
