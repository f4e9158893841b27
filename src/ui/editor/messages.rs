// SPDX-License-Identifier: MPL-2.0

//! Message types for the thumbnail editor component.

use crate::compose::scene::{FontStyle, Rgb, Scene, SlotKind};

/// Messages from the control sidebar.
#[derive(Debug, Clone)]
pub enum ControlsMessage {
    /// Title text edited.
    TitleChanged(String),
    /// Hex color field edited; committed only once it parses.
    ColorInputChanged(String),
    /// A preset swatch clicked.
    SwatchPicked(Rgb),
    /// Font size slider moved.
    FontSizeChanged(i32),
    /// Letter spacing slider moved.
    LetterSpacingChanged(i32),
    /// A style toggle button clicked.
    StyleToggled(FontStyle),
    /// "Choose image" clicked for a slot.
    PickImage(SlotKind),
    /// Foreground horizontal position slider moved.
    PositionXChanged(i32),
    /// Foreground vertical position slider moved.
    PositionYChanged(i32),
    /// Foreground scale slider moved.
    ScaleChanged(i32),
    /// Export button clicked.
    Export,
}

/// Top-level editor messages.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(ControlsMessage),
}

impl From<ControlsMessage> for Message {
    fn from(message: ControlsMessage) -> Self {
        Message::Controls(message)
    }
}

/// Events the editor emits for the application to handle.
///
/// The editor owns scene mutation and preview rendering; anything that
/// needs a file dialog or filesystem access is delegated upward.
#[derive(Debug, Clone)]
pub enum Event {
    /// Message handled internally, nothing for the parent to do.
    None,
    /// User wants to pick an image file for the given slot.
    PickImageRequested(SlotKind),
    /// User wants to export the current scene as a PNG.
    ExportRequested {
        /// Snapshot of the scene at the moment of the click.
        scene: Scene,
        /// Filename derived from the title, for the save dialog.
        suggested_filename: String,
    },
}
