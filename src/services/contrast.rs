//! Text color selection for colored backgrounds.
//!
//! The score is an APCA-style screen luminance: each channel is normalized,
//! raised to a simple 2.4 display gamma (no piecewise sRGB decode) and
//! weighted with the sRGB relative-luminance coefficients.

#![allow(clippy::unreadable_literal)]

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use crate::models::RgbColor;

/// Display gamma applied to each normalized channel.
const MAIN_TRC: f64 = 2.4;

/// Luminance weights for red, green and blue.
const LUMINANCE_COEFFICIENTS: [f64; 3] = [0.2126729, 0.7151522, 0.0721750];

/// Backgrounds darker than this get light text.
const LIGHT_TEXT_THRESHOLD: f64 = 0.342;

/// Backgrounds between the light threshold and this one get the primary dark text.
const DARK_TEXT_THRESHOLD: f64 = 0.365;

/// Foreground text color choice for a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontColor {
    /// Light text, for dark backgrounds.
    Light,
    /// Primary dark text, for the narrow mid-luminance band.
    Dark,
    /// Alternate dark text, for light backgrounds.
    DarkAlt,
}

impl FontColor {
    /// Stable label used in CLI and JSON output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::DarkAlt => "dark-alt",
        }
    }

    /// Tailwind utility class that renders this choice.
    #[must_use]
    pub const fn tailwind_class(self) -> &'static str {
        match self {
            Self::Light => "text-white",
            Self::Dark => "text-black",
            Self::DarkAlt => "text-gray-900",
        }
    }
}

impl fmt::Display for FontColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Screen luminance score (`Ys`) of a color, in [0, 1].
#[must_use]
pub fn relative_luminance(color: RgbColor) -> f64 {
    color
        .channels()
        .iter()
        .zip(LUMINANCE_COEFFICIENTS)
        .map(|(&channel, coefficient)| (f64::from(channel) / 255.0).powf(MAIN_TRC) * coefficient)
        .sum()
}

/// Classifies a luminance score into a text color.
#[must_use]
pub fn font_color_for_luminance(ys: f64) -> FontColor {
    if ys < LIGHT_TEXT_THRESHOLD {
        FontColor::Light
    } else if ys < DARK_TEXT_THRESHOLD {
        FontColor::Dark
    } else {
        FontColor::DarkAlt
    }
}

/// Picks the text color to use on a background given as a hex string.
///
/// # Errors
///
/// Returns an error if `background` is not a hex color: a text color must
/// always be decidable, so malformed input is a caller bug.
///
/// # Examples
///
/// ```
/// use colorway::services::{pick_font_color, FontColor};
///
/// assert_eq!(pick_font_color("#000000").unwrap(), FontColor::Light);
/// assert!(pick_font_color("#12").is_err());
/// ```
pub fn pick_font_color(background: &str) -> Result<FontColor> {
    let rgb = RgbColor::from_hex(background)
        .ok_or_else(|| anyhow::anyhow!("Cannot pick a font color for invalid hex '{background}'"))?;

    Ok(font_color_for_luminance(relative_luminance(rgb)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_gets_light_text() {
        assert_eq!(pick_font_color("#000000").unwrap(), FontColor::Light);
        assert_eq!(pick_font_color("#000").unwrap(), FontColor::Light);
    }

    #[test]
    fn test_white_gets_alternate_dark_text() {
        assert_eq!(pick_font_color("#ffffff").unwrap(), FontColor::DarkAlt);
        assert_eq!(pick_font_color("FFF").unwrap(), FontColor::DarkAlt);
    }

    #[test]
    fn test_luminance_endpoints() {
        assert_eq!(relative_luminance(RgbColor::new(0, 0, 0)), 0.0);
        assert!((relative_luminance(RgbColor::new(255, 255, 255)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_bands_on_grays() {
        // Ys: a3 = 0.3416, a4 = 0.3467, a7 = 0.3621, a8 = 0.3673
        assert_eq!(pick_font_color("#a3a3a3").unwrap(), FontColor::Light);
        assert_eq!(pick_font_color("#a4a4a4").unwrap(), FontColor::Dark);
        assert_eq!(pick_font_color("#a7a7a7").unwrap(), FontColor::Dark);
        assert_eq!(pick_font_color("#a8a8a8").unwrap(), FontColor::DarkAlt);
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        assert_eq!(font_color_for_luminance(0.3419), FontColor::Light);
        assert_eq!(font_color_for_luminance(LIGHT_TEXT_THRESHOLD), FontColor::Dark);
        assert_eq!(font_color_for_luminance(0.3649), FontColor::Dark);
        assert_eq!(font_color_for_luminance(DARK_TEXT_THRESHOLD), FontColor::DarkAlt);
    }

    #[test]
    fn test_palette_colors() {
        assert_eq!(pick_font_color("#ef4444").unwrap(), FontColor::Light); // red-500
        assert_eq!(pick_font_color("#3b82f6").unwrap(), FontColor::Light); // blue-500
        assert_eq!(pick_font_color("#14b8a6").unwrap(), FontColor::Dark); // teal-500
        assert_eq!(pick_font_color("#facc15").unwrap(), FontColor::DarkAlt); // yellow-400
    }

    #[test]
    fn test_green_dominates_luminance() {
        let green = relative_luminance(RgbColor::new(0, 255, 0));
        let red = relative_luminance(RgbColor::new(255, 0, 0));
        let blue = relative_luminance(RgbColor::new(0, 0, 255));
        assert!(green > red && red > blue);
    }

    #[test]
    fn test_invalid_hex_is_an_error() {
        let err = pick_font_color("#gggggg").unwrap_err();
        assert!(err.to_string().contains("#gggggg"));
        assert!(pick_font_color("").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(FontColor::Light.to_string(), "light");
        assert_eq!(FontColor::DarkAlt.label(), "dark-alt");
        assert_eq!(FontColor::Dark.tailwind_class(), "text-black");
        assert_eq!(serde_json::to_string(&FontColor::DarkAlt).unwrap(), "\"dark-alt\"");
    }
}
