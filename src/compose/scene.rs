// SPDX-License-Identifier: MPL-2.0
//! Declarative scene model for the thumbnail composition.
//!
//! A [`Scene`] is pure data: a styled title plus two image slots and the
//! foreground placement. It knows nothing about rendering; the markup and
//! raster layers consume it. All setters clamp, so a scene is valid by
//! construction regardless of the input sequence that produced it.

use crate::media::UploadedImage;

/// Logical canvas size. Every scene is laid out in this coordinate space;
/// renderers scale it to whatever pixel size they need.
pub const CANVAS_WIDTH: u32 = 1280;
pub const CANVAS_HEIGHT: u32 = 720;

pub const FONT_SIZE_MIN: i32 = -5;
pub const FONT_SIZE_MAX: i32 = 20;
pub const FONT_SIZE_STEP: i32 = 2;
pub const DEFAULT_FONT_SIZE: i32 = 4;

/// Pixel height of one font size unit at canvas scale.
pub const FONT_UNIT_PX: i32 = 16;

pub const LETTER_SPACING_MIN: i32 = -5;
pub const LETTER_SPACING_MAX: i32 = 20;
pub const DEFAULT_LETTER_SPACING: i32 = 0;

pub const POSITION_MIN: i32 = 0;
pub const POSITION_MAX: i32 = 100;
pub const DEFAULT_POSITION: i32 = 50;

pub const SCALE_MIN: i32 = 10;
pub const SCALE_MAX: i32 = 200;
pub const DEFAULT_SCALE: i32 = 100;

pub const DEFAULT_TITLE: &str = "POV";

/// An opaque sRGB color, parsed from and formatted as `#RRGGBB` hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parses `#RRGGBB` or the short `#RGB` form (case-insensitive).
    ///
    /// Returns `None` for anything else, including missing `#`.
    #[must_use]
    pub fn from_hex(input: &str) -> Option<Rgb> {
        let hex = input.strip_prefix('#')?;
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgb { r, g, b })
            }
            3 => {
                // #F0A expands to #FF00AA
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let digit = c.to_digit(16)? as u8;
                    channels[i] = digit * 16 + digit;
                }
                Some(Rgb {
                    r: channels[0],
                    g: channels[1],
                    b: channels[2],
                })
            }
            _ => None,
        }
    }

    /// Formats as uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A single title style toggle. Flags accumulate in a [`StyleSet`]; related
/// flags (two families, two case transforms) may coexist there and are
/// reconciled at render time by [`StyleSet::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Sans,
    Serif,
    Mono,
    Bold,
    ExtraBold,
    Black,
    Italic,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl FontStyle {
    /// All toggles in display order.
    #[must_use]
    pub fn all() -> &'static [FontStyle] {
        &[
            FontStyle::Sans,
            FontStyle::Serif,
            FontStyle::Mono,
            FontStyle::Bold,
            FontStyle::ExtraBold,
            FontStyle::Black,
            FontStyle::Italic,
            FontStyle::Uppercase,
            FontStyle::Lowercase,
            FontStyle::Capitalize,
        ]
    }

    /// Returns the i18n label key for this toggle.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FontStyle::Sans => "style-sans",
            FontStyle::Serif => "style-serif",
            FontStyle::Mono => "style-mono",
            FontStyle::Bold => "style-bold",
            FontStyle::ExtraBold => "style-extra-bold",
            FontStyle::Black => "style-black",
            FontStyle::Italic => "style-italic",
            FontStyle::Uppercase => "style-uppercase",
            FontStyle::Lowercase => "style-lowercase",
            FontStyle::Capitalize => "style-capitalize",
        }
    }
}

/// Generic font family resolved from the style set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    /// CSS/SVG generic family name, resolved against system fonts at render time.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            FontFamily::Sans => "sans-serif",
            FontFamily::Serif => "serif",
            FontFamily::Mono => "monospace",
        }
    }
}

/// Case transform applied to the title text before layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl CaseTransform {
    /// Applies the transform to `text`.
    ///
    /// `Capitalize` uppercases the first letter of each whitespace-separated
    /// word and leaves the rest of the word untouched.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            CaseTransform::None => text.to_string(),
            CaseTransform::Uppercase => text.to_uppercase(),
            CaseTransform::Lowercase => text.to_lowercase(),
            CaseTransform::Capitalize => {
                let mut out = String::with_capacity(text.len());
                let mut at_word_start = true;
                for c in text.chars() {
                    if c.is_whitespace() {
                        at_word_start = true;
                        out.push(c);
                    } else if at_word_start {
                        out.extend(c.to_uppercase());
                        at_word_start = false;
                    } else {
                        out.push(c);
                    }
                }
                out
            }
        }
    }
}

/// Render-ready interpretation of a style set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub family: FontFamily,
    /// CSS numeric weight (400, 700, 800, or 900).
    pub weight: u16,
    pub italic: bool,
    pub case: CaseTransform,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            family: FontFamily::Sans,
            weight: 400,
            italic: false,
            case: CaseTransform::None,
        }
    }
}

/// Duplicate-free set of title style toggles.
///
/// Toggling the same flag twice restores the previous set. Resolution is
/// order-independent: when conflicting flags are both present, a fixed
/// precedence picks the winner (`Mono` over `Serif` over `Sans`, heavier
/// weights over lighter, `Uppercase` over `Lowercase` over `Capitalize`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    flags: Vec<FontStyle>,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            flags: vec![FontStyle::Sans, FontStyle::Bold, FontStyle::Uppercase],
        }
    }
}

impl StyleSet {
    /// An empty set. Resolves to regular upright sans with no case transform.
    #[must_use]
    pub fn empty() -> Self {
        Self { flags: Vec::new() }
    }

    #[must_use]
    pub fn contains(&self, flag: FontStyle) -> bool {
        self.flags.contains(&flag)
    }

    /// Adds the flag if absent, removes it if present.
    pub fn toggle(&mut self, flag: FontStyle) {
        if let Some(pos) = self.flags.iter().position(|f| *f == flag) {
            self.flags.remove(pos);
        } else {
            self.flags.push(flag);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Resolves the set into concrete render parameters.
    #[must_use]
    pub fn resolve(&self) -> ResolvedStyle {
        let family = if self.contains(FontStyle::Mono) {
            FontFamily::Mono
        } else if self.contains(FontStyle::Serif) {
            FontFamily::Serif
        } else {
            FontFamily::Sans
        };

        let weight = if self.contains(FontStyle::Black) {
            900
        } else if self.contains(FontStyle::ExtraBold) {
            800
        } else if self.contains(FontStyle::Bold) {
            700
        } else {
            400
        };

        let case = if self.contains(FontStyle::Uppercase) {
            CaseTransform::Uppercase
        } else if self.contains(FontStyle::Lowercase) {
            CaseTransform::Lowercase
        } else if self.contains(FontStyle::Capitalize) {
            CaseTransform::Capitalize
        } else {
            CaseTransform::None
        };

        ResolvedStyle {
            family,
            weight,
            italic: self.contains(FontStyle::Italic),
            case,
        }
    }
}

/// The styled title layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
    pub color: Rgb,
    /// Relative size unit; one unit is [`FONT_UNIT_PX`] at canvas scale.
    /// Non-positive values hide the title layer entirely.
    pub font_size: i32,
    /// Extra tracking in px at canvas scale.
    pub letter_spacing: i32,
    pub style: StyleSet,
}

impl Default for Title {
    fn default() -> Self {
        Self {
            text: DEFAULT_TITLE.to_string(),
            color: Rgb::WHITE,
            font_size: DEFAULT_FONT_SIZE,
            letter_spacing: DEFAULT_LETTER_SPACING,
            style: StyleSet::default(),
        }
    }
}

impl Title {
    /// Font height in canvas px, or `None` when the size hides the layer.
    #[must_use]
    pub fn font_px(&self) -> Option<i32> {
        let px = self.font_size * FONT_UNIT_PX;
        (px > 0).then_some(px)
    }
}

/// Which image slot an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Background,
    Foreground,
}

/// An image slot: built-in placeholder art, or a decoded user upload.
///
/// A failed load never reaches the slot; callers only store uploads that
/// decoded successfully, so the slot never holds broken state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ImageSlot {
    #[default]
    Placeholder,
    Upload(UploadedImage),
}

impl ImageSlot {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSlot::Placeholder)
    }

    #[must_use]
    pub fn upload(&self) -> Option<&UploadedImage> {
        match self {
            ImageSlot::Placeholder => None,
            ImageSlot::Upload(image) => Some(image),
        }
    }
}

/// Foreground placement: center position as percentages of the canvas and a
/// uniform scale percentage. Setters clamp to the declared ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    x: i32,
    y: i32,
    scale: i32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x: DEFAULT_POSITION,
            y: DEFAULT_POSITION,
            scale: DEFAULT_SCALE,
        }
    }
}

impl Placement {
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn set_x(&mut self, value: i32) {
        self.x = value.clamp(POSITION_MIN, POSITION_MAX);
    }

    pub fn set_y(&mut self, value: i32) {
        self.y = value.clamp(POSITION_MIN, POSITION_MAX);
    }

    pub fn set_scale(&mut self, value: i32) {
        self.scale = value.clamp(SCALE_MIN, SCALE_MAX);
    }
}

/// The whole composition: title, two image slots, foreground placement.
///
/// Cloning is cheap; uploads share their encoded bytes behind `Arc`, so an
/// export can snapshot the scene without copying pixel data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub title: Title,
    pub background: ImageSlot,
    pub foreground: ImageSlot,
    pub placement: Placement,
}

impl Scene {
    pub fn set_title_text(&mut self, text: impl Into<String>) {
        self.title.text = text.into();
    }

    pub fn set_title_color(&mut self, color: Rgb) {
        self.title.color = color;
    }

    pub fn set_font_size(&mut self, value: i32) {
        self.title.font_size = value.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
    }

    pub fn set_letter_spacing(&mut self, value: i32) {
        self.title.letter_spacing = value.clamp(LETTER_SPACING_MIN, LETTER_SPACING_MAX);
    }

    pub fn toggle_style(&mut self, flag: FontStyle) {
        self.title.style.toggle(flag);
    }

    pub fn slot(&self, kind: SlotKind) -> &ImageSlot {
        match kind {
            SlotKind::Background => &self.background,
            SlotKind::Foreground => &self.foreground,
        }
    }

    /// Installs a successfully decoded upload into the slot.
    pub fn set_upload(&mut self, kind: SlotKind, image: UploadedImage) {
        let slot = match kind {
            SlotKind::Background => &mut self.background,
            SlotKind::Foreground => &mut self.foreground,
        };
        *slot = ImageSlot::Upload(image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_matches_initial_editor_state() {
        let scene = Scene::default();
        assert_eq!(scene.title.text, "POV");
        assert_eq!(scene.title.color, Rgb::WHITE);
        assert_eq!(scene.title.font_size, 4);
        assert_eq!(scene.title.letter_spacing, 0);
        assert!(scene.background.is_placeholder());
        assert!(scene.foreground.is_placeholder());
        assert_eq!(scene.placement.x(), 50);
        assert_eq!(scene.placement.y(), 50);
        assert_eq!(scene.placement.scale(), 100);
    }

    #[test]
    fn default_style_set_is_sans_bold_uppercase() {
        let style = StyleSet::default();
        assert!(style.contains(FontStyle::Sans));
        assert!(style.contains(FontStyle::Bold));
        assert!(style.contains(FontStyle::Uppercase));
        assert_eq!(style.len(), 3);

        let resolved = style.resolve();
        assert_eq!(resolved.family, FontFamily::Sans);
        assert_eq!(resolved.weight, 700);
        assert!(!resolved.italic);
        assert_eq!(resolved.case, CaseTransform::Uppercase);
    }

    #[test]
    fn hex_parse_accepts_long_form() {
        assert_eq!(
            Rgb::from_hex("#FF0000"),
            Some(Rgb { r: 255, g: 0, b: 0 })
        );
        assert_eq!(
            Rgb::from_hex("#ffffff"),
            Some(Rgb::WHITE)
        );
    }

    #[test]
    fn hex_parse_accepts_short_form() {
        assert_eq!(
            Rgb::from_hex("#f0a"),
            Some(Rgb {
                r: 255,
                g: 0,
                b: 170
            })
        );
    }

    #[test]
    fn hex_parse_rejects_garbage() {
        assert_eq!(Rgb::from_hex("FF0000"), None);
        assert_eq!(Rgb::from_hex("#FF00"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn hex_round_trip_is_uppercase() {
        let color = Rgb::from_hex("#ff00aa").unwrap();
        assert_eq!(color.to_hex(), "#FF00AA");
        assert_eq!(Rgb::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn double_toggle_restores_previous_set() {
        let mut style = StyleSet::default();
        let before = style.clone();

        style.toggle(FontStyle::Italic);
        assert!(style.contains(FontStyle::Italic));
        style.toggle(FontStyle::Italic);
        assert_eq!(style, before);

        // Also for a flag that was already present
        style.toggle(FontStyle::Bold);
        assert!(!style.contains(FontStyle::Bold));
        style.toggle(FontStyle::Bold);
        assert!(style.contains(FontStyle::Bold));
    }

    #[test]
    fn toggle_never_duplicates_flags() {
        let mut style = StyleSet::empty();
        style.toggle(FontStyle::Serif);
        style.toggle(FontStyle::Serif);
        style.toggle(FontStyle::Serif);
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn resolution_is_insertion_order_independent() {
        let mut one = StyleSet::empty();
        one.toggle(FontStyle::Serif);
        one.toggle(FontStyle::Mono);

        let mut two = StyleSet::empty();
        two.toggle(FontStyle::Mono);
        two.toggle(FontStyle::Serif);

        assert_eq!(one.resolve(), two.resolve());
        assert_eq!(one.resolve().family, FontFamily::Mono);
    }

    #[test]
    fn weight_precedence_prefers_heaviest() {
        let mut style = StyleSet::empty();
        style.toggle(FontStyle::Bold);
        assert_eq!(style.resolve().weight, 700);
        style.toggle(FontStyle::Black);
        assert_eq!(style.resolve().weight, 900);
        style.toggle(FontStyle::ExtraBold);
        // Black still wins over ExtraBold
        assert_eq!(style.resolve().weight, 900);
        style.toggle(FontStyle::Black);
        assert_eq!(style.resolve().weight, 800);
    }

    #[test]
    fn case_precedence_prefers_uppercase() {
        let mut style = StyleSet::empty();
        style.toggle(FontStyle::Capitalize);
        style.toggle(FontStyle::Lowercase);
        assert_eq!(style.resolve().case, CaseTransform::Lowercase);
        style.toggle(FontStyle::Uppercase);
        assert_eq!(style.resolve().case, CaseTransform::Uppercase);
    }

    #[test]
    fn empty_set_resolves_to_regular_sans() {
        let resolved = StyleSet::empty().resolve();
        assert_eq!(resolved, ResolvedStyle::default());
    }

    #[test]
    fn case_transforms_apply() {
        assert_eq!(CaseTransform::Uppercase.apply("Epic Fail"), "EPIC FAIL");
        assert_eq!(CaseTransform::Lowercase.apply("Epic Fail"), "epic fail");
        assert_eq!(
            CaseTransform::Capitalize.apply("epic fail moment"),
            "Epic Fail Moment"
        );
        assert_eq!(CaseTransform::None.apply("Epic Fail"), "Epic Fail");
    }

    #[test]
    fn capitalize_preserves_inner_case() {
        assert_eq!(CaseTransform::Capitalize.apply("ePIC fAIL"), "EPIC FAIL");
    }

    #[test]
    fn placement_setters_clamp_to_ranges() {
        let mut placement = Placement::default();

        placement.set_x(150);
        assert_eq!(placement.x(), 100);
        placement.set_x(-10);
        assert_eq!(placement.x(), 0);

        placement.set_y(101);
        assert_eq!(placement.y(), 100);
        placement.set_y(0);
        assert_eq!(placement.y(), 0);

        placement.set_scale(500);
        assert_eq!(placement.scale(), 200);
        placement.set_scale(1);
        assert_eq!(placement.scale(), 10);
    }

    #[test]
    fn font_size_and_spacing_clamp() {
        let mut scene = Scene::default();

        scene.set_font_size(99);
        assert_eq!(scene.title.font_size, FONT_SIZE_MAX);
        scene.set_font_size(-99);
        assert_eq!(scene.title.font_size, FONT_SIZE_MIN);

        scene.set_letter_spacing(99);
        assert_eq!(scene.title.letter_spacing, LETTER_SPACING_MAX);
        scene.set_letter_spacing(-99);
        assert_eq!(scene.title.letter_spacing, LETTER_SPACING_MIN);
    }

    #[test]
    fn font_px_hides_non_positive_sizes() {
        let mut title = Title::default();
        assert_eq!(title.font_px(), Some(64));

        title.font_size = -3;
        assert_eq!(title.font_px(), None);

        title.font_size = 0;
        assert_eq!(title.font_px(), None);

        title.font_size = 1;
        assert_eq!(title.font_px(), Some(16));
    }

    #[test]
    fn placement_survives_any_input_sequence() {
        let mut placement = Placement::default();
        let inputs = [i32::MIN, -1, 0, 37, 100, 101, i32::MAX];
        for &value in &inputs {
            placement.set_x(value);
            placement.set_y(value);
            placement.set_scale(value);
            assert!((POSITION_MIN..=POSITION_MAX).contains(&placement.x()));
            assert!((POSITION_MIN..=POSITION_MAX).contains(&placement.y()));
            assert!((SCALE_MIN..=SCALE_MAX).contains(&placement.scale()));
        }
    }
}
