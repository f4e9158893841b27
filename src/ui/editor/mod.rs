// SPDX-License-Identifier: MPL-2.0

//! Thumbnail editor component.
//!
//! Owns the [`Scene`] being edited plus a live preview bitmap, and exposes
//! the component protocol the application shell drives:
//!
//! - [`State::update`] mutates the scene and returns an [`Event`] for
//!   anything the parent must carry out (file dialogs, export).
//! - [`State::view`] renders the preview pane and control sidebar.
//!
//! Every scene change re-renders the preview synchronously at half the
//! export resolution. Uploads embed their downscaled transcode in preview
//! documents, which keeps per-keystroke renders cheap enough that no
//! debouncing is needed.

mod messages;
mod view;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use iced::widget::image::Handle;
use iced::Element;

use crate::compose::markup::{self, ImageQuality};
use crate::compose::raster::Rasterizer;
use crate::compose::scene::{Rgb, Scene, SlotKind, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::i18n::fluent::I18n;
use crate::media::export;
use crate::media::UploadedImage;

pub use messages::{ControlsMessage, Event, Message};

/// Preview surface dimensions, half the export canvas per axis.
pub const PREVIEW_WIDTH: u32 = CANVAS_WIDTH / 2;
pub const PREVIEW_HEIGHT: u32 = CANVAS_HEIGHT / 2;

/// Preset title colors offered next to the free-form hex field.
pub const COLOR_SWATCHES: [Rgb; 6] = [
    Rgb::WHITE,
    Rgb::BLACK,
    Rgb { r: 0xFF, g: 0xD6, b: 0x0A },
    Rgb { r: 0xFF, g: 0x45, b: 0x3A },
    Rgb { r: 0x32, g: 0xD7, b: 0x4B },
    Rgb { r: 0x0A, g: 0x84, b: 0xFF },
];

/// Context the application passes down for rendering.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Editor state: the scene, its rendered preview, and control scratch state.
pub struct State {
    scene: Scene,
    /// Raw hex field contents; may lag behind the scene while invalid.
    color_input: String,
    color_valid: bool,
    preview: Handle,
    rasterizer: Arc<dyn Rasterizer>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("scene", &self.scene)
            .field("color_input", &self.color_input)
            .field("color_valid", &self.color_valid)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates an editor around the default scene and renders its preview.
    #[must_use]
    pub fn new(rasterizer: Arc<dyn Rasterizer>) -> Self {
        let scene = Scene::default();
        let color_input = scene.title.color.to_hex();
        let mut state = Self {
            scene,
            color_input,
            color_valid: true,
            preview: blank_preview(),
            rasterizer,
        };
        state.refresh_preview();
        state
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current contents of the hex color field.
    #[must_use]
    pub fn color_input(&self) -> &str {
        &self.color_input
    }

    /// Whether the hex field currently parses; drives the inline hint.
    #[must_use]
    pub fn color_is_valid(&self) -> bool {
        self.color_valid
    }

    #[must_use]
    pub fn preview(&self) -> &Handle {
        &self.preview
    }

    /// Applies a message and reports what the parent should do next.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Controls(message) => self.update_controls(message),
        }
    }

    /// Installs a decoded upload into a slot and refreshes the preview.
    pub fn apply_upload(&mut self, kind: SlotKind, image: UploadedImage) {
        self.scene.set_upload(kind, image);
        self.refresh_preview();
    }

    #[must_use]
    pub fn view<'a>(&'a self, context: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, context)
    }

    fn update_controls(&mut self, message: ControlsMessage) -> Event {
        match message {
            ControlsMessage::TitleChanged(text) => {
                self.scene.set_title_text(text);
                self.refresh_preview();
                Event::None
            }
            ControlsMessage::ColorInputChanged(input) => {
                match Rgb::from_hex(&input) {
                    Some(color) => {
                        self.color_valid = true;
                        self.scene.set_title_color(color);
                        self.refresh_preview();
                    }
                    // Keep the last valid color on the scene while typing.
                    None => self.color_valid = false,
                }
                self.color_input = input;
                Event::None
            }
            ControlsMessage::SwatchPicked(color) => {
                self.color_input = color.to_hex();
                self.color_valid = true;
                self.scene.set_title_color(color);
                self.refresh_preview();
                Event::None
            }
            ControlsMessage::FontSizeChanged(value) => {
                self.scene.set_font_size(value);
                self.refresh_preview();
                Event::None
            }
            ControlsMessage::LetterSpacingChanged(value) => {
                self.scene.set_letter_spacing(value);
                self.refresh_preview();
                Event::None
            }
            ControlsMessage::StyleToggled(flag) => {
                self.scene.toggle_style(flag);
                self.refresh_preview();
                Event::None
            }
            ControlsMessage::PickImage(kind) => Event::PickImageRequested(kind),
            ControlsMessage::PositionXChanged(value) => {
                self.scene.placement.set_x(value);
                self.refresh_preview();
                Event::None
            }
            ControlsMessage::PositionYChanged(value) => {
                self.scene.placement.set_y(value);
                self.refresh_preview();
                Event::None
            }
            ControlsMessage::ScaleChanged(value) => {
                self.scene.placement.set_scale(value);
                self.refresh_preview();
                Event::None
            }
            ControlsMessage::Export => Event::ExportRequested {
                scene: self.scene.clone(),
                suggested_filename: export::default_filename(&self.scene.title.text),
            },
        }
    }

    /// Renders the scene at preview scale and swaps the widget handle.
    ///
    /// A failed render keeps the previous frame on screen; the next
    /// successful render replaces it.
    fn refresh_preview(&mut self) {
        let markup = markup::document(&self.scene, ImageQuality::Preview);
        match self
            .rasterizer
            .rasterize(&markup, PREVIEW_WIDTH, PREVIEW_HEIGHT)
        {
            Ok(bitmap) => {
                self.preview = Handle::from_rgba(bitmap.width, bitmap.height, bitmap.rgba.to_vec());
            }
            Err(error) => eprintln!("Warning: preview render failed: {error}"),
        }
    }
}

/// Opaque black frame shown for the instant before the first render lands.
fn blank_preview() -> Handle {
    let mut pixels = vec![0_u8; (PREVIEW_WIDTH * PREVIEW_HEIGHT * 4) as usize];
    for alpha in pixels.iter_mut().skip(3).step_by(4) {
        *alpha = 0xFF;
    }
    Handle::from_rgba(PREVIEW_WIDTH, PREVIEW_HEIGHT, pixels)
}
