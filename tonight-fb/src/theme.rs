//! Card theme: dark and light palettes plus type scale.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    /// Same color at `opacity` (0..=1) of full alpha.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: (255.0 * opacity.clamp(0.0, 1.0)).round() as u8,
            ..self
        }
    }
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Which palette to paint with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown color scheme '{other}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub placeholder: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub star: Color,
    pub chip_fill: Color,
    pub chip_stroke: Color,
    pub chip_shadow: Color,
}

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self::dark(),
            ColorScheme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        let primary = Color::rgb(0xE6, 0xED, 0xF3);
        Self {
            background: Color::rgb(0x0D, 0x11, 0x17),
            card: Color::rgb(0x16, 0x1B, 0x22),
            placeholder: Color::rgb(0x8B, 0x94, 0x9E).with_opacity(0.2),
            text_primary: primary,
            text_secondary: Color::rgb(0x8B, 0x94, 0x9E),
            star: Color::rgb(0xFF, 0xD6, 0x0A),
            chip_fill: Color::rgba(0x30, 0x36, 0x3D, 0xCC),
            chip_stroke: primary.with_opacity(0.1),
            chip_shadow: Color::rgb(0x00, 0xFF, 0xFF).with_opacity(0.3),
        }
    }

    pub fn light() -> Self {
        let primary = Color::rgb(0x1C, 0x1C, 0x1E);
        Self {
            background: Color::rgb(0xF2, 0xF2, 0xF7),
            card: Color::rgb(0xFF, 0xFF, 0xFF),
            placeholder: Color::rgb(0x8E, 0x8E, 0x93).with_opacity(0.2),
            text_primary: primary,
            text_secondary: Color::rgb(0x6C, 0x6C, 0x70),
            star: Color::rgb(0xFF, 0xCC, 0x00),
            chip_fill: Color::rgba(0xF5, 0xF5, 0xF7, 0xE6),
            chip_stroke: primary.with_opacity(0.1),
            chip_shadow: Color::rgb(0x32, 0xAD, 0xE6).with_opacity(0.3),
        }
    }
}

// Font sizes
pub const FONT_SIZE_TITLE: f32 = 22.0;
pub const FONT_SIZE_SUBHEADLINE: f32 = 15.0;
pub const FONT_SIZE_CAPTION: f32 = 12.0;

// Layout
pub const CARD_RADIUS: f32 = 24.0;
pub const CARD_PADDING: f32 = 16.0;
pub const SECTION_SPACING: f32 = 16.0;
pub const TEXT_SPACING: f32 = 12.0;
pub const RATING_SPACING: f32 = 4.0;
pub const POSTER_HEIGHT: f32 = 300.0;
pub const POSTER_RADIUS: f32 = 16.0;
pub const LINE_GAP: f32 = 4.0;
