// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the editor.
//!
//! The `App` struct wires together the editor component, localization,
//! notifications, and persisted preferences, and translates editor events
//! into side effects like file dialogs, image decoding, and PNG export.
//! Policy decisions (window geometry, dialog defaults, persistence) stay
//! close to the update loop so user-facing behavior is easy to audit.

mod message;
mod update;
mod view;

pub use message::{ExportOutcome, Flags, Message};

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use iced::{time, window, Element, Subscription, Task, Theme};

use crate::compose::raster::{Rasterizer, SvgRasterizer};
use crate::compose::scene::SlotKind;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::editor;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// How often the notification manager ticks while toasts are visible.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Root Iced application state bridging the editor, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    editor: editor::State,
    config: Config,
    theme_mode: ThemeMode,
    rasterizer: Arc<dyn Rasterizer>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("editor", &self.editor)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off loading a
    /// background image passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, None),
            Err(error) => {
                eprintln!("Warning: failed to load config: {error}");
                (Config::default(), Some("notification-config-load-warning"))
            }
        };

        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = config.theme_mode;
        let rasterizer: Arc<dyn Rasterizer> = Arc::new(SvgRasterizer::new());

        let mut app = App {
            i18n,
            editor: editor::State::new(rasterizer.clone()),
            config,
            theme_mode,
            rasterizer,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match flags.background_path {
            Some(path) if media::is_supported_extension(&path) => {
                update::load_image_task(SlotKind::Background, path)
            }
            Some(path) => {
                eprintln!("Warning: unsupported image file: {}", path.display());
                Task::none()
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Ticks only while toasts are visible so an idle editor stays idle.
    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_notifications() {
            time::every(NOTIFICATION_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(editor_message) => {
                let event = self.editor.update(editor_message);
                update::handle_editor_event(self, event)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ImagePicked(kind, Some(path)) => {
                self.remember_open_directory(&path);
                update::load_image_task(kind, path)
            }
            Message::ImagePicked(_, None) => Task::none(),
            Message::ImageLoaded(kind, Ok(image)) => {
                self.editor.apply_upload(kind, image);
                Task::none()
            }
            Message::ImageLoaded(_, Err(error)) => {
                // The slot keeps its previous content on a failed decode.
                eprintln!("Warning: failed to load image: {error}");
                Task::none()
            }
            Message::ExportDialogResult {
                scene,
                path: Some(path),
            } => {
                self.remember_save_directory(&path);
                update::export_task(scene, path, self.rasterizer.clone())
            }
            Message::ExportDialogResult { path: None, .. } => Task::none(),
            Message::ExportFinished(outcome) => {
                self.finish_export(outcome);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn finish_export(&mut self, outcome: ExportOutcome) {
        match outcome {
            ExportOutcome::Saved(path) => {
                let filename = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("thumbnail.png");
                self.notifications.push(
                    notifications::Notification::success("notification-export-success")
                        .with_arg("filename", filename),
                );
            }
            ExportOutcome::RenderFailed(error) => {
                // Render failures stay off the toast rail.
                eprintln!("Warning: thumbnail render failed: {error}");
            }
            ExportOutcome::WriteFailed(error) => {
                eprintln!("Warning: failed to write thumbnail: {error}");
                self.notifications
                    .push(notifications::Notification::error("notification-export-error"));
            }
        }
    }

    /// Remembers the directory of a picked file for the next open dialog.
    fn remember_open_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.config.last_open_directory = Some(parent.to_path_buf());
            self.persist_config();
        }
    }

    fn remember_save_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.config.last_save_directory = Some(parent.to_path_buf());
            self.persist_config();
        }
    }

    /// Best-effort config write; a failure never interrupts editing.
    fn persist_config(&self) {
        if let Err(error) = config::save(&self.config) {
            eprintln!("Warning: failed to save config: {error}");
        }
    }
}
