// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the controls sidebar.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for grouped control sections inside the sidebar.
/// Shifts the surface luminance slightly so sections stand out from the panel.
pub fn section(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;
    let luminance = base.r + base.g + base.b;
    let (r, g, b) = if luminance < 1.5 {
        (
            (base.r + 0.10).min(1.0),
            (base.g + 0.10).min(1.0),
            (base.b + 0.10).min(1.0),
        )
    } else {
        (
            (base.r - 0.06).max(0.0),
            (base.g - 0.06).max(0.0),
            (base.b - 0.06).max(0.0),
        )
    };

    container::Style {
        background: Some(Background::Color(Color::from_rgba(r, g, b, opacity::SURFACE))),
        border: Border {
            radius: radius::MD.into(),
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}
