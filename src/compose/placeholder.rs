// SPDX-License-Identifier: MPL-2.0
//! Built-in placeholder art for empty image slots.
//!
//! Both placeholders are vector fragments, so a freshly launched editor
//! renders a complete scene without any bundled raster files. The background
//! fills the whole canvas; the foreground silhouette is authored in a local
//! square and positioned by the markup layer like a real upload.

use super::scene::{CANVAS_HEIGHT, CANVAS_WIDTH};
use std::fmt::Write;

/// Side length of the local coordinate space [`foreground_art`] is drawn in.
pub const FOREGROUND_ART_SIZE: f32 = 200.0;

/// Full-frame background placeholder: a muted vertical gradient with a small
/// canvas-size label tucked into the corner.
#[must_use]
pub fn background_layer() -> String {
    let mut fragment = String::new();
    let _ = write!(
        fragment,
        concat!(
            r##"<defs><linearGradient id="placeholder-bg" x1="0" y1="0" x2="0" y2="1">"##,
            r##"<stop offset="0" stop-color="#3A4150"/>"##,
            r##"<stop offset="1" stop-color="#232833"/>"##,
            r##"</linearGradient></defs>"##,
            r##"<rect x="0" y="0" width="{w}" height="{h}" fill="url(#placeholder-bg)"/>"##,
            r##"<text x="24" y="{label_y}" font-family="sans-serif" font-size="24" fill="#FFFFFF" fill-opacity="0.25">{w} x {h}</text>"##
        ),
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
        label_y = CANVAS_HEIGHT - 24,
    );
    fragment
}

/// Person silhouette drawn in a `FOREGROUND_ART_SIZE` square local space.
///
/// Callers wrap it in a transform that maps the square into the placement
/// box, exactly like an uploaded image.
#[must_use]
pub fn foreground_art() -> String {
    concat!(
        r##"<g fill="#8B93A3">"##,
        r##"<circle cx="100" cy="62" r="34"/>"##,
        r##"<path d="M 30 200 C 30 138 62 118 100 118 C 138 118 170 138 170 200 Z"/>"##,
        r##"</g>"##
    )
    .to_string()
}
