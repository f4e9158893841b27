// SPDX-License-Identifier: MPL-2.0
//! Control sidebar: title styling, image slots, foreground placement, export.

use std::ops::RangeInclusive;

use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, slider, text, text_input, Column, Row, Scrollable, Space};
use iced::{Alignment, Color, Element, Length};

use crate::compose::scene::{
    FontStyle, Rgb, SlotKind, FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP, LETTER_SPACING_MAX,
    LETTER_SPACING_MIN, POSITION_MAX, POSITION_MIN, SCALE_MAX, SCALE_MIN,
};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::styles::button as button_styles;

use super::super::{ControlsMessage, Message, State, ViewContext, COLOR_SWATCHES};

const HEX_FIELD_WIDTH: f32 = 96.0;

/// Style toggles grouped into rows: family, weight, slant, case.
const STYLE_ROWS: [&[FontStyle]; 4] = [
    &[FontStyle::Sans, FontStyle::Serif, FontStyle::Mono],
    &[FontStyle::Bold, FontStyle::ExtraBold, FontStyle::Black],
    &[FontStyle::Italic],
    &[FontStyle::Uppercase, FontStyle::Lowercase, FontStyle::Capitalize],
];

pub fn sidebar<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let sections = Column::new()
        .spacing(spacing::SM)
        .push(title_section(state, ctx))
        .push(slot_section(state, SlotKind::Background, ctx))
        .push(slot_section(state, SlotKind::Foreground, ctx));

    let scrollable = Scrollable::new(sections)
        .direction(Direction::Vertical(Scrollbar::new()))
        .height(Length::Fill)
        .width(Length::Fill);

    let layout = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .push(text(ctx.i18n.tr("editor-heading")).size(typography::TITLE_SM))
        .push(scrollable)
        .push(export_button(ctx));

    container(layout)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn title_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let scene = state.scene();

    let placeholder = ctx.i18n.tr("editor-title-placeholder");
    let title_input = text_input(&placeholder, &scene.title.text)
        .on_input(|value| ControlsMessage::TitleChanged(value).into())
        .size(typography::BODY);

    let mut section = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("editor-title-label")).size(typography::BODY))
        .push(title_input)
        .push(color_picker(state, ctx));

    if !state.color_is_valid() {
        section = section.push(
            text(ctx.i18n.tr("editor-color-invalid"))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    section = section
        .push(slider_row(
            ctx.i18n.tr("editor-font-size-label"),
            format!("{:+}", scene.title.font_size),
            FONT_SIZE_MIN..=FONT_SIZE_MAX,
            FONT_SIZE_STEP,
            scene.title.font_size,
            |value| ControlsMessage::FontSizeChanged(value).into(),
        ))
        .push(slider_row(
            ctx.i18n.tr("editor-letter-spacing-label"),
            format!("{:+}", scene.title.letter_spacing),
            LETTER_SPACING_MIN..=LETTER_SPACING_MAX,
            1,
            scene.title.letter_spacing,
            |value| ControlsMessage::LetterSpacingChanged(value).into(),
        ))
        .push(style_toggles(state, ctx));

    container(section)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::section)
        .into()
}

fn color_picker<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hex_input = text_input("#FFFFFF", state.color_input())
        .on_input(|value| ControlsMessage::ColorInputChanged(value).into())
        .size(typography::BODY)
        .width(Length::Fixed(HEX_FIELD_WIDTH));

    let active = state.scene().title.color;
    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Alignment::Center)
        .push(hex_input);
    for color in COLOR_SWATCHES {
        row = row.push(swatch(color, color == active));
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("editor-color-label")).size(typography::BODY_SM))
        .push(row)
        .into()
}

fn swatch<'a>(color: Rgb, active: bool) -> Element<'a, Message> {
    let fill = Color::from_rgb8(color.r, color.g, color.b);
    button(Space::new().width(0).height(0))
        .width(Length::Fixed(sizing::SWATCH_SIZE))
        .height(Length::Fixed(sizing::SWATCH_SIZE))
        .padding(0)
        .style(button_styles::swatch(fill, active))
        .on_press(ControlsMessage::SwatchPicked(color).into())
        .into()
}

fn style_toggles<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let style = &state.scene().title.style;

    let mut rows = Column::new().spacing(spacing::XXS);
    for group in STYLE_ROWS {
        let mut row = Row::new().spacing(spacing::XXS);
        for &flag in group {
            let toggle = button(text(ctx.i18n.tr(flag.label_key())).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::XS])
                .width(Length::FillPortion(1))
                .style(if style.contains(flag) {
                    button_styles::selected
                } else {
                    button_styles::unselected
                })
                .on_press(ControlsMessage::StyleToggled(flag).into());
            row = row.push(toggle);
        }
        rows = rows.push(row);
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("editor-style-label")).size(typography::BODY_SM))
        .push(rows)
        .into()
}

fn slot_section<'a>(state: &'a State, kind: SlotKind, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = match kind {
        SlotKind::Background => ctx.i18n.tr("editor-background-label"),
        SlotKind::Foreground => ctx.i18n.tr("editor-foreground-label"),
    };

    let status = match state.scene().slot(kind).upload() {
        Some(upload) => {
            let width = upload.width().to_string();
            let height = upload.height().to_string();
            ctx.i18n.tr_with_args(
                "editor-slot-size",
                &[("width", width.as_str()), ("height", height.as_str())],
            )
        }
        None => ctx.i18n.tr("editor-slot-placeholder"),
    };

    let pick_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(icons::sized(icons::image(), sizing::ICON_SM))
            .push(text(ctx.i18n.tr("editor-pick-image")).size(typography::BODY)),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(iced::widget::button::secondary)
    .on_press(ControlsMessage::PickImage(kind).into());

    let mut section = Column::new()
        .spacing(spacing::XS)
        .push(text(label).size(typography::BODY))
        .push(pick_button)
        .push(text(status).size(typography::CAPTION));

    if kind == SlotKind::Foreground {
        let placement = state.scene().placement;

        let position_row = Row::new()
            .spacing(spacing::XS)
            .push(slider_row(
                ctx.i18n.tr("editor-position-x-label"),
                format!("{}%", placement.x()),
                POSITION_MIN..=POSITION_MAX,
                1,
                placement.x(),
                |value| ControlsMessage::PositionXChanged(value).into(),
            ))
            .push(slider_row(
                ctx.i18n.tr("editor-position-y-label"),
                format!("{}%", placement.y()),
                POSITION_MIN..=POSITION_MAX,
                1,
                placement.y(),
                |value| ControlsMessage::PositionYChanged(value).into(),
            ));

        section = section.push(position_row).push(slider_row(
            ctx.i18n.tr("editor-scale-label"),
            format!("{}%", placement.scale()),
            SCALE_MIN..=SCALE_MAX,
            1,
            placement.scale(),
            |value| ControlsMessage::ScaleChanged(value).into(),
        ));
    }

    container(section)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::section)
        .into()
}

/// Label, slider, current value in a compact vertical group.
fn slider_row<'a>(
    label: String,
    readout: String,
    range: RangeInclusive<i32>,
    step: i32,
    value: i32,
    on_change: impl Fn(i32) -> Message + 'a,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(text(label).size(typography::BODY_SM))
        .push(slider(range, value, on_change).step(step))
        .push(text(readout).size(typography::BODY_SM))
        .into()
}

fn export_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(icons::sized(icons::download(), sizing::ICON_SM))
            .push(text(ctx.i18n.tr("editor-export")).size(typography::BODY_LG)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(button_styles::primary)
    .on_press(ControlsMessage::Export.into())
    .into()
}
