//! Display colors and the built-in picker palette.

use serde::{Deserialize, Serialize};

/// An sRGB display color for row highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RowColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected 6 hex digits, got {0}")]
    Length(usize),

    #[error("invalid hex digit in '{0}'")]
    Digit(String),
}

impl RowColor {
    /// Create from individual channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a packed 0xRRGGBB value. Bits above the low 24 are ignored.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Packed 0xRRGGBB value.
    pub const fn rgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse from `rrggbb` or `#rrggbb`, case insensitive.
    pub fn from_hex(input: &str) -> Result<Self, ParseColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 {
            return Err(ParseColorError::Length(digits.len()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseColorError::Digit(input.to_string()))?;
        Ok(Self::from_rgb(value))
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for RowColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<RowColor> for String {
    fn from(color: RowColor) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for RowColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// Built-in picker palette: twelve saturated pastel hues followed by four
/// muted grays. `PALETTE[0]` is the color of a freshly added rule.
pub const PALETTE: [RowColor; 16] = [
    RowColor::from_rgb(0xff8080), // salmon
    RowColor::from_rgb(0xffc080), // peach
    RowColor::from_rgb(0xffff80), // yellow
    RowColor::from_rgb(0xc0ff80), // lime
    RowColor::from_rgb(0x80ff80), // green
    RowColor::from_rgb(0x80ffc0), // mint
    RowColor::from_rgb(0x80ffff), // cyan
    RowColor::from_rgb(0x80c0ff), // sky
    RowColor::from_rgb(0x8080ff), // indigo
    RowColor::from_rgb(0xc080ff), // violet
    RowColor::from_rgb(0xff80ff), // magenta
    RowColor::from_rgb(0xff80c0), // pink
    RowColor::from_rgb(0xe0ffff), // pale cyan
    RowColor::from_rgb(0xa8c0c0), // light gray
    RowColor::from_rgb(0x708080), // slate
    RowColor::from_rgb(0x384040), // charcoal
];
