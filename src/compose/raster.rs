// SPDX-License-Identifier: MPL-2.0
//! Rasterization boundary between scene markup and pixels.
//!
//! The [`Rasterizer`] trait is the narrow contract the editor, the export
//! pipeline, and tests share: markup plus target dimensions in, RGBA bitmap
//! out. [`SvgRasterizer`] is the production implementation on top of resvg
//! and tiny-skia; tests substitute recording mocks.

use crate::error::{Error, Result};
use resvg::usvg;
use std::sync::Arc;

/// A flattened RGBA render of a scene.
///
/// Pixel bytes are shared behind `Arc` so a bitmap can travel from a render
/// task to the preview widget or the PNG encoder without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<Vec<u8>>,
}

impl Bitmap {
    #[must_use]
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba: Arc::new(rgba),
        }
    }
}

/// Renders scene markup at a requested pixel size.
pub trait Rasterizer: Send + Sync {
    /// Rasterizes `markup` into a `width` x `height` RGBA bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] when the markup does not parse, the target
    /// size is empty, or the pixel buffer cannot be allocated.
    fn rasterize(&self, markup: &str, width: u32, height: u32) -> Result<Bitmap>;
}

/// Production rasterizer: usvg parse with system fonts, resvg render into a
/// tiny-skia pixmap scaled to the target size.
pub struct SvgRasterizer {
    options: usvg::Options<'static>,
}

impl SvgRasterizer {
    /// Builds the rasterizer and loads system fonts for title text layout.
    #[must_use]
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, markup: &str, width: u32, height: u32) -> Result<Bitmap> {
        if width == 0 || height == 0 {
            return Err(Error::Svg("target has empty dimensions".into()));
        }

        let tree = usvg::Tree::from_data(markup.as_bytes(), &self.options)
            .map_err(|e| Error::Svg(e.to_string()))?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("failed to allocate pixmap".into()))?;

        let size = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(Bitmap::new(width, height, pixmap.take()))
    }
}
