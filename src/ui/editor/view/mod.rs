// SPDX-License-Identifier: MPL-2.0
//! Editor layout composition: preview pane beside the control sidebar.

mod controls;
mod preview;

use iced::widget::Row;
use iced::{Element, Length};

use crate::ui::design_tokens::spacing;

use super::{Message, State, ViewContext};

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(preview::pane(state, &ctx))
        .push(controls::sidebar(state, &ctx))
        .into()
}
