// SPDX-License-Identifier: MPL-2.0
//! Pure scene-to-SVG translation.
//!
//! The generated document always uses the logical 1280x720 canvas; the
//! rasterizer scales it to the requested pixel size. Layer order, bottom to
//! top: background, title, foreground. The title carries a four-corner hard
//! shadow plus a black outline, so it stays readable on any photo.

use super::placeholder;
use super::scene::{Scene, Title, CANVAS_HEIGHT, CANVAS_WIDTH};
use std::fmt::Write;

/// Which transcode of an upload the document should embed.
///
/// Preview documents embed the downscaled copies so re-rendering per
/// keystroke stays cheap; export documents embed the originals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageQuality {
    Preview,
    Full,
}

/// Offset of the four hard shadow copies behind the title, in canvas px.
const SHADOW_OFFSET: i32 = 2;

/// Outline stroke width. The stroke straddles the glyph edge, so half of it
/// shows outside the fill.
const OUTLINE_WIDTH: i32 = 2;

/// Renders the scene as a complete SVG document.
#[must_use]
pub fn document(scene: &Scene, quality: ImageQuality) -> String {
    let mut doc = String::with_capacity(4096);
    let _ = write!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
    );

    push_background(&mut doc, scene, quality);
    push_title(&mut doc, &scene.title);
    push_foreground(&mut doc, scene, quality);

    doc.push_str("</svg>");
    doc
}

fn push_background(doc: &mut String, scene: &Scene, quality: ImageQuality) {
    match scene.background.upload() {
        Some(upload) => {
            // objectFit: cover, centered crop
            let _ = write!(
                doc,
                r#"<image href="{href}" x="0" y="0" width="{w}" height="{h}" preserveAspectRatio="xMidYMid slice"/>"#,
                href = data_url(upload, quality),
                w = CANVAS_WIDTH,
                h = CANVAS_HEIGHT,
            );
        }
        None => doc.push_str(&placeholder::background_layer()),
    }
}

fn push_title(doc: &mut String, title: &Title) {
    let Some(font_px) = title.font_px() else {
        return;
    };

    let resolved = title.style.resolve();
    let text = escape_xml(&resolved.case.apply(&title.text));
    let cx = CANVAS_WIDTH / 2;
    let cy = CANVAS_HEIGHT / 2;

    let attrs = format!(
        r#"font-family="{family}" font-size="{size}" font-weight="{weight}" font-style="{style}" letter-spacing="{spacing}" text-anchor="middle" dominant-baseline="central""#,
        family = resolved.family.css_name(),
        size = font_px,
        weight = resolved.weight,
        style = if resolved.italic { "italic" } else { "normal" },
        spacing = title.letter_spacing,
    );

    // Four offset black copies form the hard drop shadow.
    for (dx, dy) in [
        (SHADOW_OFFSET, SHADOW_OFFSET),
        (-SHADOW_OFFSET, -SHADOW_OFFSET),
        (SHADOW_OFFSET, -SHADOW_OFFSET),
        (-SHADOW_OFFSET, SHADOW_OFFSET),
    ] {
        let _ = write!(
            doc,
            r##"<text x="{x}" y="{y}" {attrs} fill="#000000">{text}</text>"##,
            x = cx as i32 + dx,
            y = cy as i32 + dy,
        );
    }

    // Main fill with the outline painted underneath it.
    let _ = write!(
        doc,
        r##"<text x="{cx}" y="{cy}" {attrs} fill="{fill}" stroke="#000000" stroke-width="{stroke}" stroke-linejoin="round" paint-order="stroke">{text}</text>"##,
        fill = title.color.to_hex(),
        stroke = OUTLINE_WIDTH,
    );
}

fn push_foreground(doc: &mut String, scene: &Scene, quality: ImageQuality) {
    let placement = &scene.placement;
    let box_w = CANVAS_WIDTH as f32 * placement.scale() as f32 / 100.0;
    let box_h = CANVAS_HEIGHT as f32 * placement.scale() as f32 / 100.0;
    let center_x = CANVAS_WIDTH as f32 * placement.x() as f32 / 100.0;
    let center_y = CANVAS_HEIGHT as f32 * placement.y() as f32 / 100.0;
    let box_x = center_x - box_w / 2.0;
    let box_y = center_y - box_h / 2.0;

    match scene.foreground.upload() {
        Some(upload) => {
            // objectFit: contain inside the placement box
            let _ = write!(
                doc,
                r#"<image href="{href}" x="{x}" y="{y}" width="{w}" height="{h}" preserveAspectRatio="xMidYMid meet"/>"#,
                href = data_url(upload, quality),
                x = box_x,
                y = box_y,
                w = box_w,
                h = box_h,
            );
        }
        None => {
            // Fit the square silhouette into the box the way `meet` would
            let k = box_w.min(box_h) / placeholder::FOREGROUND_ART_SIZE;
            let art_half = placeholder::FOREGROUND_ART_SIZE * k / 2.0;
            let _ = write!(
                doc,
                r#"<g transform="translate({tx} {ty}) scale({k})">{art}</g>"#,
                tx = center_x - art_half,
                ty = center_y - art_half,
                art = placeholder::foreground_art(),
            );
        }
    }
}

fn data_url<'a>(upload: &'a crate::media::UploadedImage, quality: ImageQuality) -> &'a str {
    match quality {
        ImageQuality::Preview => upload.preview_data_url(),
        ImageQuality::Full => upload.full_data_url(),
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
