// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::path::PathBuf;
use std::time::Instant;

use crate::compose::scene::{Scene, SlotKind};
use crate::error::Error;
use crate::media::UploadedImage;
use crate::ui::editor;
use crate::ui::notifications;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(editor::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the image pick dialog for a slot.
    ImagePicked(SlotKind, Option<PathBuf>),
    /// Result from decoding a picked file off the UI thread.
    ImageLoaded(SlotKind, Result<UploadedImage, Error>),
    /// Result from the export save dialog; the scene snapshot rides along.
    ExportDialogResult {
        scene: Scene,
        path: Option<PathBuf>,
    },
    /// Result from rendering the snapshot and writing the PNG.
    ExportFinished(ExportOutcome),
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
}

/// Terminal states of an export attempt after a path was chosen.
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Saved(PathBuf),
    RenderFailed(Error),
    WriteFailed(Error),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional background image to preload on startup.
    pub background_path: Option<PathBuf>,
}
