//! Text tone selection for colored swatches
//!
//! Picks dark or light text for a label drawn on top of a palette color,
//! based on perceptual luminance.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Luminance above which dark text is used
pub const DARK_TEXT_THRESHOLD: f64 = 0.6;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create color from channels
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidColor`] unless the input is exactly
    /// six hex digits after the optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ValidationError::InvalidColor(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Perceptual luminance in `[0, 1]`
    #[must_use]
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Lowercase `#rrggbb`
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Text color to draw over a background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    /// Black text, for light backgrounds
    Dark,
    /// White text, for dark backgrounds
    Light,
}

impl TextTone {
    /// Hex literal for this tone
    #[inline]
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Dark => "#000000",
            Self::Light => "#ffffff",
        }
    }
}

/// Choose a legible text tone for `background`
#[must_use]
pub fn text_tone_for(background: Rgb) -> TextTone {
    if background.luminance() > DARK_TEXT_THRESHOLD {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}
