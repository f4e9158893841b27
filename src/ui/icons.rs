// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for inline SVG glyphs.
//!
//! Glyphs are embedded as SVG sources and rendered through the Iced `svg`
//! widget, so they scale cleanly at any size. Handles are cached using
//! `OnceLock` for optimal performance.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_notification`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

// Severity glyphs carry the matching semantic color from the design tokens.
const CHECKMARK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M4 12.5 L9.5 18 L20 6.5" stroke="#43B367" stroke-width="3" fill="none" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

const INFO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" fill="none" stroke="#6496FF" stroke-width="2"/><circle cx="12" cy="7.5" r="1.5" fill="#6496FF"/><rect x="10.75" y="10.5" width="2.5" height="7" rx="1.25" fill="#6496FF"/></svg>"##;

const WARNING_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 3 L22 20 L2 20 Z" fill="none" stroke="#F1A620" stroke-width="2" stroke-linejoin="round"/><rect x="11" y="9" width="2" height="6" rx="1" fill="#F1A620"/><circle cx="12" cy="17.2" r="1.2" fill="#F1A620"/></svg>"##;

const ERROR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10" fill="none" stroke="#E53935" stroke-width="2"/><rect x="11" y="6.5" width="2" height="7.5" rx="1" fill="#E53935"/><circle cx="12" cy="16.8" r="1.3" fill="#E53935"/></svg>"##;

const CROSS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M6 6 L18 18 M18 6 L6 18" stroke="#808080" stroke-width="2.5" fill="none" stroke-linecap="round"/></svg>"##;

const IMAGE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><rect x="3" y="5" width="18" height="14" rx="2" fill="none" stroke="#808080" stroke-width="2"/><circle cx="8.5" cy="10" r="1.8" fill="#808080"/><path d="M5 17 L10 12 L13.5 15.5 L16.5 12.5 L19 15 L19 17 Z" fill="#808080"/></svg>"##;

const DOWNLOAD_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 4 L12 14 M7.5 10 L12 14.5 L16.5 10" stroke="#FFFFFF" stroke-width="2.5" fill="none" stroke-linecap="round" stroke-linejoin="round"/><path d="M5 18.5 L19 18.5" stroke="#FFFFFF" stroke-width="2.5" stroke-linecap="round"/></svg>"##;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    checkmark,
    CHECKMARK_SVG,
    "Checkmark icon: check/tick mark for success."
);
define_icon!(info, INFO_SVG, "Info icon: letter 'i' in circle.");
define_icon!(
    warning,
    WARNING_SVG,
    "Warning icon: triangle with exclamation mark."
);
define_icon!(
    error,
    ERROR_SVG,
    "Error icon: exclamation mark in circle."
);
define_icon!(cross, CROSS_SVG, "Cross icon: X mark shape.");
define_icon!(image, IMAGE_SVG, "Image icon: picture frame with mountains.");
define_icon!(
    download,
    DOWNLOAD_SVG,
    "Download icon: arrow pointing down onto a tray (white, for primary buttons)."
);

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
