//! Linear-light RGB and OKLab color spaces.
//!
//! OKLab conversion uses Björn Ottosson's published matrices at full
//! precision, so results match reference implementations.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]

use serde::Serialize;

use super::RgbColor;

/// Upper bound of the linear segment of the sRGB transfer function.
const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// sRGB color with the transfer function removed. Channels are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearRgb {
    /// Linear red
    pub r: f64,
    /// Linear green
    pub g: f64,
    /// Linear blue
    pub b: f64,
}

/// Decodes one 8-bit sRGB channel to linear light.
#[must_use]
pub fn srgb_channel_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= SRGB_LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl From<RgbColor> for LinearRgb {
    fn from(color: RgbColor) -> Self {
        Self {
            r: srgb_channel_to_linear(color.r),
            g: srgb_channel_to_linear(color.g),
            b: srgb_channel_to_linear(color.b),
        }
    }
}

/// A color in the OKLab perceptual color space.
///
/// `l` is perceived lightness, `a` and `b` are the green/red and blue/yellow
/// chroma axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oklab {
    /// Lightness
    pub l: f64,
    /// Green/red axis
    pub a: f64,
    /// Blue/yellow axis
    pub b: f64,
}

impl Oklab {
    /// Creates a new OKLab value.
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance between two OKLab colors.
    ///
    /// OKLab is approximately perceptually uniform, so no axis weighting is applied.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl From<LinearRgb> for Oklab {
    fn from(c: LinearRgb) -> Self {
        // Linear sRGB -> LMS cone response
        let l = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
        let m = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
        let s = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<RgbColor> for Oklab {
    fn from(color: RgbColor) -> Self {
        Self::from(LinearRgb::from(color))
    }
}
