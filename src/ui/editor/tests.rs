// SPDX-License-Identifier: MPL-2.0
//! Behavioral tests for the editor component.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image_rs::{Rgba, RgbaImage};

use super::*;
use crate::compose::raster::Bitmap;
use crate::compose::scene::FontStyle;
use crate::error::{Error, Result};
use crate::media;

/// Rasterizer stub producing solid frames and counting invocations.
struct RecordingRasterizer {
    calls: AtomicUsize,
}

impl Rasterizer for RecordingRasterizer {
    fn rasterize(&self, _markup: &str, width: u32, height: u32) -> Result<Bitmap> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let rgba = vec![0_u8; (width * height * 4) as usize];
        Ok(Bitmap::new(width, height, rgba))
    }
}

struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _markup: &str, _width: u32, _height: u32) -> Result<Bitmap> {
        Err(Error::Svg("boom".to_string()))
    }
}

fn editor() -> (State, Arc<RecordingRasterizer>) {
    let rasterizer = Arc::new(RecordingRasterizer {
        calls: AtomicUsize::new(0),
    });
    let state = State::new(rasterizer.clone());
    (state, rasterizer)
}

fn renders(rasterizer: &RecordingRasterizer) -> usize {
    rasterizer.calls.load(Ordering::SeqCst)
}

fn test_upload(width: u32, height: u32) -> UploadedImage {
    let decoded =
        image_rs::DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([20, 40, 60, 255])));
    media::from_decoded(decoded).expect("test image should transcode")
}

#[test]
fn new_editor_renders_the_initial_preview() {
    let (state, rasterizer) = editor();

    assert_eq!(renders(&rasterizer), 1);
    assert_eq!(state.scene().title.text, "POV");
    assert_eq!(state.color_input(), "#FFFFFF");
    assert!(state.color_is_valid());
}

#[test]
fn title_edit_updates_scene_and_rerenders() {
    let (mut state, rasterizer) = editor();

    let event = state.update(ControlsMessage::TitleChanged("Epic Fail".to_string()).into());

    assert!(matches!(event, Event::None));
    assert_eq!(state.scene().title.text, "Epic Fail");
    assert_eq!(renders(&rasterizer), 2);
}

#[test]
fn invalid_hex_keeps_the_committed_color() {
    let (mut state, rasterizer) = editor();

    state.update(ControlsMessage::ColorInputChanged("#ZZZZZZ".to_string()).into());

    assert!(!state.color_is_valid());
    assert_eq!(state.color_input(), "#ZZZZZZ");
    assert_eq!(state.scene().title.color, Rgb::WHITE);
    // Nothing changed on the scene, so no re-render either.
    assert_eq!(renders(&rasterizer), 1);
}

#[test]
fn valid_hex_commits_and_clears_the_hint() {
    let (mut state, rasterizer) = editor();

    state.update(ControlsMessage::ColorInputChanged("#ZZ".to_string()).into());
    state.update(ControlsMessage::ColorInputChanged("#FF0000".to_string()).into());

    assert!(state.color_is_valid());
    assert_eq!(state.scene().title.color, Rgb { r: 255, g: 0, b: 0 });
    assert_eq!(renders(&rasterizer), 2);
}

#[test]
fn swatch_click_syncs_the_hex_field() {
    let (mut state, _rasterizer) = editor();
    state.update(ControlsMessage::ColorInputChanged("garbage".to_string()).into());

    state.update(ControlsMessage::SwatchPicked(Rgb::BLACK).into());

    assert!(state.color_is_valid());
    assert_eq!(state.color_input(), "#000000");
    assert_eq!(state.scene().title.color, Rgb::BLACK);
}

#[test]
fn slider_values_clamp_to_their_ranges() {
    let (mut state, _rasterizer) = editor();

    state.update(ControlsMessage::FontSizeChanged(999).into());
    state.update(ControlsMessage::PositionXChanged(-3).into());
    state.update(ControlsMessage::ScaleChanged(5).into());

    assert_eq!(state.scene().title.font_size, 20);
    assert_eq!(state.scene().placement.x(), 0);
    assert_eq!(state.scene().placement.scale(), 10);
}

#[test]
fn style_toggle_round_trips() {
    let (mut state, _rasterizer) = editor();
    assert!(!state.scene().title.style.contains(FontStyle::Serif));

    state.update(ControlsMessage::StyleToggled(FontStyle::Serif).into());
    assert!(state.scene().title.style.contains(FontStyle::Serif));

    state.update(ControlsMessage::StyleToggled(FontStyle::Serif).into());
    assert!(!state.scene().title.style.contains(FontStyle::Serif));
}

#[test]
fn pick_image_is_delegated_to_the_parent() {
    let (mut state, rasterizer) = editor();

    let event = state.update(ControlsMessage::PickImage(SlotKind::Background).into());

    assert!(matches!(event, Event::PickImageRequested(SlotKind::Background)));
    // The dialog round-trip happens upstream; nothing rendered yet.
    assert_eq!(renders(&rasterizer), 1);
}

#[test]
fn export_snapshots_the_current_scene() {
    let (mut state, _rasterizer) = editor();
    state.update(ControlsMessage::TitleChanged("My Great Video".to_string()).into());

    let event = state.update(ControlsMessage::Export.into());

    match event {
        Event::ExportRequested {
            scene,
            suggested_filename,
        } => {
            assert_eq!(scene.title.text, "My Great Video");
            assert_eq!(suggested_filename, "my-great-video-thumbnail.png");
        }
        other => panic!("expected export request, got {other:?}"),
    }
}

#[test]
fn applied_upload_lands_in_the_slot_and_rerenders() {
    let (mut state, rasterizer) = editor();

    state.apply_upload(SlotKind::Foreground, test_upload(8, 6));

    let upload = state
        .scene()
        .slot(SlotKind::Foreground)
        .upload()
        .expect("upload should be installed");
    assert_eq!(upload.width(), 8);
    assert_eq!(upload.height(), 6);
    assert!(state.scene().background.is_placeholder());
    assert_eq!(renders(&rasterizer), 2);
}

#[test]
fn editor_survives_a_failing_rasterizer() {
    let mut state = State::new(Arc::new(FailingRasterizer));

    let event = state.update(ControlsMessage::TitleChanged("still alive".to_string()).into());

    assert!(matches!(event, Event::None));
    assert_eq!(state.scene().title.text, "still alive");
}
