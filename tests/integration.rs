// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests across the scene, markup, rasterizer, and export layers.

use image_rs::{GenericImageView, Rgba, RgbaImage};
use tempfile::tempdir;
use thumbsmith::compose::markup::{self, ImageQuality};
use thumbsmith::compose::raster::SvgRasterizer;
use thumbsmith::compose::scene::{FontStyle, Rgb, Scene, SlotKind, CANVAS_HEIGHT, CANVAS_WIDTH};
use thumbsmith::config::{self, Config};
use thumbsmith::i18n::fluent::I18n;
use thumbsmith::media::{self, export};

fn decoded_image(width: u32, height: u32) -> image_rs::DynamicImage {
    image_rs::DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([180, 40, 90, 255]),
    ))
}

#[test]
fn default_scene_exports_a_png_at_canvas_size() {
    let rasterizer = SvgRasterizer::new();
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("pov-thumbnail.png");

    let bitmap =
        export::render_thumbnail(&Scene::default(), &rasterizer).expect("render should succeed");
    export::save_png(&bitmap, &path).expect("save should succeed");

    let saved = image_rs::open(&path).expect("saved file should decode as an image");
    assert_eq!(saved.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[test]
fn customized_scene_renders_through_the_full_pipeline() {
    let mut scene = Scene::default();
    scene.set_title_text("Integration Run");
    scene.set_title_color(Rgb { r: 255, g: 214, b: 10 });
    scene.toggle_style(FontStyle::Italic);
    scene.set_upload(
        SlotKind::Background,
        media::from_decoded(decoded_image(64, 36)).expect("upload should transcode"),
    );
    scene.set_upload(
        SlotKind::Foreground,
        media::from_decoded(decoded_image(24, 24)).expect("upload should transcode"),
    );
    scene.placement.set_x(25);
    scene.placement.set_y(75);
    scene.placement.set_scale(60);

    let rasterizer = SvgRasterizer::new();
    let bitmap =
        export::render_thumbnail(&scene, &rasterizer).expect("render should succeed");

    assert_eq!(bitmap.width, CANVAS_WIDTH);
    assert_eq!(bitmap.height, CANVAS_HEIGHT);
    assert_eq!(bitmap.rgba.len(), (CANVAS_WIDTH * CANVAS_HEIGHT * 4) as usize);
}

#[test]
fn uploads_replace_placeholder_art_in_the_markup() {
    let mut scene = Scene::default();
    let placeholder_doc = markup::document(&scene, ImageQuality::Preview);
    assert!(!placeholder_doc.contains("data:image/png;base64,"));

    scene.set_upload(
        SlotKind::Background,
        media::from_decoded(decoded_image(32, 18)).expect("upload should transcode"),
    );
    let upload_doc = markup::document(&scene, ImageQuality::Preview);
    assert!(upload_doc.contains("data:image/png;base64,"));
}

#[test]
fn export_to_an_unwritable_path_reports_io_error() {
    let rasterizer = SvgRasterizer::new();
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("missing-subdir").join("out.png");

    let bitmap =
        export::render_thumbnail(&Scene::default(), &rasterizer).expect("render should succeed");

    assert!(export::save_png(&bitmap, &path).is_err());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &config_path).expect("failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &config_path).expect("failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn locale_strings_cover_both_languages() {
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for key in [
            "window-title",
            "editor-export",
            "editor-slot-placeholder",
            "notification-export-error",
        ] {
            let value = i18n.tr(key);
            assert!(
                !value.starts_with("MISSING:"),
                "{lang} is missing the {key} message"
            );
        }
    }
}
