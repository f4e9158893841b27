// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the editor screen and stacks the toast overlay above it.

use iced::widget::Stack;
use iced::{Element, Length};

use crate::ui::editor;
use crate::ui::notifications::Toast;

use super::{App, Message};

pub fn view(app: &App) -> Element<'_, Message> {
    let editor = app
        .editor
        .view(editor::ViewContext { i18n: &app.i18n })
        .map(Message::Editor);

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(editor)
        .push(toasts)
        .into()
}
