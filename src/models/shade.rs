//! Shade weights and individual palette shades.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RgbColor;

/// Enumerated shade weight keys, from lightest (50) to darkest (950).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub enum ShadeWeight {
    /// 50
    W50,
    /// 100
    W100,
    /// 200
    W200,
    /// 300
    W300,
    /// 400
    W400,
    /// 500
    #[default]
    W500,
    /// 600
    W600,
    /// 700
    W700,
    /// 800
    W800,
    /// 900
    W900,
    /// 950
    W950,
}

impl ShadeWeight {
    /// Every weight in ascending order.
    pub const ALL: [Self; 11] = [
        Self::W50,
        Self::W100,
        Self::W200,
        Self::W300,
        Self::W400,
        Self::W500,
        Self::W600,
        Self::W700,
        Self::W800,
        Self::W900,
        Self::W950,
    ];

    /// Numeric weight value (e.g. 500).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::W50 => 50,
            Self::W100 => 100,
            Self::W200 => 200,
            Self::W300 => 300,
            Self::W400 => 400,
            Self::W500 => 500,
            Self::W600 => 600,
            Self::W700 => 700,
            Self::W800 => 800,
            Self::W900 => 900,
            Self::W950 => 950,
        }
    }

    /// Looks up the weight for a numeric value, if it is one of the enumerated keys.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.value() == value)
    }

    /// Returns the weight `by` steps darker, if that weight exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorway::models::ShadeWeight;
    ///
    /// assert_eq!(ShadeWeight::W500.offset(300), Some(ShadeWeight::W800));
    /// assert_eq!(ShadeWeight::W900.offset(50), Some(ShadeWeight::W950));
    /// assert_eq!(ShadeWeight::W700.offset(300), None);
    /// ```
    #[must_use]
    pub fn offset(self, by: u16) -> Option<Self> {
        self.value().checked_add(by).and_then(Self::from_value)
    }
}

impl fmt::Display for ShadeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<ShadeWeight> for u16 {
    fn from(weight: ShadeWeight) -> Self {
        weight.value()
    }
}

impl TryFrom<u16> for ShadeWeight {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| {
            format!("Invalid shade weight {value}. Expected one of 50, 100-900, 950")
        })
    }
}

impl FromStr for ShadeWeight {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u16 = s
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid shade weight '{s}'. Expected a number"))?;
        Self::try_from(value).map_err(anyhow::Error::msg)
    }
}

/// A single shade of a colorway.
///
/// The hex value is kept verbatim from the palette source; it is only
/// validated when converted with [`Shade::to_rgb`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shade {
    /// Weight key (50-950).
    pub weight: ShadeWeight,
    /// Color value as written in the palette (e.g. "#ef4444").
    pub hex: String,
}

impl Shade {
    /// Creates a shade.
    #[must_use]
    pub fn new(weight: ShadeWeight, hex: impl Into<String>) -> Self {
        Self {
            weight,
            hex: hex.into(),
        }
    }

    /// Parses the shade value, or `None` if it is not a hex color.
    #[must_use]
    pub fn to_rgb(&self) -> Option<RgbColor> {
        RgbColor::from_hex(&self.hex)
    }
}
