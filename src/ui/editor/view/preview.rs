// SPDX-License-Identifier: MPL-2.0
//! Live preview pane showing the rendered scene at half export size.

use iced::widget::{container, image, text, tooltip, Column, Row};
use iced::{Alignment, Element, Length};

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};

use super::super::{Message, State, ViewContext, PREVIEW_HEIGHT, PREVIEW_WIDTH};

pub fn pane<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let frame = image(state.preview().clone())
        .width(Length::Fixed(PREVIEW_WIDTH as f32))
        .height(Length::Fixed(PREVIEW_HEIGHT as f32));

    let info = styles::tooltip::styled(
        icons::sized(icons::info(), sizing::ICON_SM),
        ctx.i18n.tr("editor-info-tooltip"),
        tooltip::Position::Top,
    );

    let caption = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(text(ctx.i18n.tr("preview-caption")).size(typography::CAPTION))
        .push(info);

    let pane = Column::new()
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .push(text(ctx.i18n.tr("preview-heading")).size(typography::TITLE_SM))
        .push(frame)
        .push(caption);

    container(pane)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::panel)
        .into()
}
