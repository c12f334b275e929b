//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::oklab::{LinearRgb, Oklab};

/// Hex color grammar: optional `#`, then 6 or 3 hex digits.
const HEX_COLOR_PATTERN: &str = r"^#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$";

fn hex_regex() -> Option<&'static Regex> {
    static HEX_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    HEX_REGEX
        .get_or_init(|| Regex::new(HEX_COLOR_PATTERN).ok())
        .as_ref()
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (`#RRGGBB`, `#RGB`, with or without `#`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Accepts "#RRGGBB", "RRGGBB", "#RGB" and "RGB" in any letter case.
    /// Shorthand digits are doubled ("#f80" is "#ff8800").
    ///
    /// Returns `None` when the input does not match the grammar; this never
    /// panics, so callers must branch on the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorway::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex("#FF0000"), Some(RgbColor::new(255, 0, 0)));
    /// assert_eq!(RgbColor::from_hex("0f0"), Some(RgbColor::new(0, 255, 0)));
    /// assert_eq!(RgbColor::from_hex("#12"), None);
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let captures = hex_regex()?.captures(hex)?;
        let digits = captures.get(1)?.as_str();

        let expanded = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect::<String>()
        } else {
            digits.to_string()
        };

        let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
        let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
        let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use colorway::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an array, in red, green, blue order.
    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Decodes the sRGB transfer function, giving linear-light channels in [0, 1].
    #[must_use]
    pub fn to_linear(&self) -> LinearRgb {
        LinearRgb::from(*self)
    }

    /// Converts the color into the OKLab perceptual color space.
    #[must_use]
    pub fn to_oklab(&self) -> Oklab {
        Oklab::from(self.to_linear())
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| {
            anyhow::anyhow!("Invalid hex color format '{s}'. Expected #RRGGBB or #RGB")
        })
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
