//! Primary/secondary color derivation for courses.
//!
//! A course is themed by one colorway: the primary color is the shade at the
//! colorway's default (or an explicit) weight, the secondary color is the
//! shade `offset` weights darker.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::constants::DEFAULT_COURSE_OFFSET;
use crate::models::{ColorPalette, ShadeWeight};

/// Colorways whose 500 shade is too bright to carry text, so courses start lighter.
pub const DEFAULT_INDEX_OVERRIDES: [(&str, ShadeWeight); 3] = [
    ("amber", ShadeWeight::W400),
    ("yellow", ShadeWeight::W400),
    ("lime", ShadeWeight::W400),
];

/// The color pair representing a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseColors {
    /// Main course color.
    pub primary_color: String,
    /// Darker companion color.
    pub secondary_color: String,
}

/// Derives course colors from a palette.
///
/// Carries the per-colorway default weights (built-in overrides plus any
/// configured ones) and the default offset.
#[derive(Debug, Clone)]
pub struct CourseColorService<'a> {
    palette: &'a ColorPalette,
    index_overrides: HashMap<String, ShadeWeight>,
    default_offset: u16,
}

impl<'a> CourseColorService<'a> {
    /// Creates a service with the built-in overrides and the default 300 offset.
    #[must_use]
    pub fn new(palette: &'a ColorPalette) -> Self {
        let index_overrides = DEFAULT_INDEX_OVERRIDES
            .iter()
            .map(|&(name, weight)| (name.to_string(), weight))
            .collect();

        Self {
            palette,
            index_overrides,
            default_offset: DEFAULT_COURSE_OFFSET,
        }
    }

    /// Adds overrides on top of the built-in table; later entries win.
    #[must_use]
    pub fn with_index_overrides<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, ShadeWeight)>,
        S: Into<String>,
    {
        self.index_overrides
            .extend(overrides.into_iter().map(|(name, weight)| (name.into(), weight)));
        self
    }

    /// Replaces the offset used when none is given.
    #[must_use]
    pub fn with_default_offset(mut self, offset: u16) -> Self {
        self.default_offset = offset;
        self
    }

    /// The offset used when none is given.
    #[must_use]
    pub fn default_offset(&self) -> u16 {
        self.default_offset
    }

    /// Default primary weight of a colorway (500 unless overridden).
    #[must_use]
    pub fn default_index(&self, colorway: &str) -> ShadeWeight {
        self.index_overrides
            .get(colorway)
            .copied()
            .unwrap_or(ShadeWeight::W500)
    }

    /// Resolves the primary and secondary weights.
    ///
    /// # Errors
    /// Returns an error if `index + offset` is not an enumerated weight.
    pub fn weights(
        &self,
        colorway: &str,
        index: Option<ShadeWeight>,
        offset: Option<u16>,
    ) -> Result<(ShadeWeight, ShadeWeight)> {
        let primary = index.unwrap_or_else(|| self.default_index(colorway));
        let offset = offset.unwrap_or(self.default_offset);

        let secondary = primary.offset(offset).ok_or_else(|| {
            anyhow::anyhow!(
                "Shade {primary} + {offset} is not a palette weight for colorway '{colorway}'"
            )
        })?;

        Ok((primary, secondary))
    }

    /// Gets the primary and secondary colors of a colorway.
    ///
    /// # Errors
    /// Returns an error if the colorway is unknown or either shade is missing.
    pub fn colors(
        &self,
        colorway: &str,
        index: Option<ShadeWeight>,
        offset: Option<u16>,
    ) -> Result<CourseColors> {
        let (primary, secondary) = self.weights(colorway, index, offset)?;
        debug!(colorway, %primary, %secondary, "Deriving course colors");

        Ok(CourseColors {
            primary_color: self.palette.shade(colorway, primary)?.to_string(),
            secondary_color: self.palette.shade(colorway, secondary)?.to_string(),
        })
    }
}

/// Gets course colors with the built-in overrides.
///
/// # Examples
///
/// ```
/// use colorway::models::ColorPalette;
/// use colorway::services::course_colors;
///
/// let palette = ColorPalette::load().unwrap();
/// let colors = course_colors(&palette, "red", None, 300).unwrap();
/// assert_eq!(colors.primary_color, "#ef4444");
/// assert_eq!(colors.secondary_color, "#991b1b");
/// ```
pub fn course_colors(
    palette: &ColorPalette,
    colorway: &str,
    index: Option<ShadeWeight>,
    offset: u16,
) -> Result<CourseColors> {
    CourseColorService::new(palette).colors(colorway, index, Some(offset))
}
