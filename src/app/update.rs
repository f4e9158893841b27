// SPDX-License-Identifier: MPL-2.0
//! Update handlers and side-effect tasks for the application.
//!
//! Editor events turn into dialog or IO tasks here; their results come
//! back as top-level messages handled in `App::update`.

use std::path::PathBuf;
use std::sync::Arc;

use iced::Task;

use crate::compose::raster::Rasterizer;
use crate::compose::scene::{Scene, SlotKind};
use crate::media::{self, export};
use crate::ui::editor;

use super::message::{ExportOutcome, Message};
use super::App;

/// Routes an editor event to the matching side effect.
pub fn handle_editor_event(app: &App, event: editor::Event) -> Task<Message> {
    match event {
        editor::Event::None => Task::none(),
        editor::Event::PickImageRequested(kind) => {
            pick_image_task(kind, app.config.last_open_directory.clone())
        }
        editor::Event::ExportRequested {
            scene,
            suggested_filename,
        } => save_dialog_task(scene, suggested_filename, app.config.last_save_directory.clone()),
    }
}

/// Opens the image pick dialog for a slot.
fn pick_image_task(kind: SlotKind, last_open_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("Images", media::SUPPORTED_EXTENSIONS);

            // Reopen where the user last picked from
            if let Some(dir) = last_open_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::ImagePicked(kind, path),
    )
}

/// Decodes a picked file off the UI thread.
pub fn load_image_task(kind: SlotKind, path: PathBuf) -> Task<Message> {
    Task::perform(async move { media::load_upload(&path) }, move |result| {
        Message::ImageLoaded(kind, result)
    })
}

/// Opens the export save dialog; the scene snapshot rides through the task.
fn save_dialog_task(
    scene: Scene,
    suggested_filename: String,
    last_save_directory: Option<PathBuf>,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&suggested_filename)
                .add_filter("PNG Image", &["png"]);

            if let Some(dir) = last_save_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            let path = dialog.save_file().await.map(|h| h.path().to_path_buf());
            (scene, path)
        },
        |(scene, path)| Message::ExportDialogResult { scene, path },
    )
}

/// Renders the snapshot at export size and writes the PNG.
pub fn export_task(scene: Scene, path: PathBuf, rasterizer: Arc<dyn Rasterizer>) -> Task<Message> {
    Task::perform(
        async move {
            let bitmap = match export::render_thumbnail(&scene, rasterizer.as_ref()) {
                Ok(bitmap) => bitmap,
                Err(error) => return ExportOutcome::RenderFailed(error),
            };
            match export::save_png(&bitmap, &path) {
                Ok(()) => ExportOutcome::Saved(path),
                Err(error) => ExportOutcome::WriteFailed(error),
            }
        },
        Message::ExportFinished,
    )
}
