//! Color palette data structures.
//!
//! A palette is an ordered table of entries, mirroring a Tailwind CSS color
//! configuration: most entries are colorways (a name plus shades keyed by
//! weight), a few are single values such as `black` or `transparent`.
//! The default palette is the Tailwind v3 color table, embedded at build time.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{Shade, ShadeWeight};
use crate::constants::USEABLE_COLORWAY_LIMIT;

/// A named colorway with shades from light (50) to dark (950).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colorway {
    /// Colorway name (e.g. "red", "slate").
    pub name: String,
    /// Shades in declaration order.
    pub shades: Vec<Shade>,
}

impl Colorway {
    /// Get the shade at a weight.
    #[must_use]
    pub fn shade(&self, weight: ShadeWeight) -> Option<&Shade> {
        self.shades.iter().find(|s| s.weight == weight)
    }

    /// Returns true if any shade is written exactly as `color`.
    #[must_use]
    pub fn contains_color(&self, color: &str) -> bool {
        self.shades.iter().any(|s| s.hex == color)
    }

    /// Get the number of shades.
    #[must_use]
    pub fn shade_count(&self) -> usize {
        self.shades.len()
    }
}

/// One top-level palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEntry {
    /// A single color value (e.g. `black = "#000"`, `current = "currentColor"`).
    Single {
        /// Entry name
        name: String,
        /// Value as written
        value: String,
    },
    /// A nested shade collection.
    Colorway(Colorway),
}

impl PaletteEntry {
    /// Name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Single { name, .. } => name,
            Self::Colorway(colorway) => &colorway.name,
        }
    }

    /// The colorway, if this entry is a shade collection.
    #[must_use]
    pub fn as_colorway(&self) -> Option<&Colorway> {
        match self {
            Self::Single { .. } => None,
            Self::Colorway(colorway) => Some(colorway),
        }
    }
}

/// A complete, read-only color palette.
///
/// The useable colorways (the first [`USEABLE_COLORWAY_LIMIT`] shade-collection
/// entries, in declaration order) are derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    entries: Vec<PaletteEntry>,
    useable: Vec<usize>,
}

impl ColorPalette {
    /// Builds a palette from entries in declaration order.
    #[must_use]
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        let useable = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.as_colorway().is_some())
            .map(|(index, _)| index)
            .take(USEABLE_COLORWAY_LIMIT)
            .collect();

        Self { entries, useable }
    }

    /// Load the default Tailwind palette from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/tailwind_palette.json");
        Self::from_json_str(json_data).context("Failed to parse embedded Tailwind palette")
    }

    /// Load a palette from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read palette file: {}", path.display()))?;

        Self::from_json_str(&content)
            .context(format!("Failed to parse palette file: {}", path.display()))
    }

    /// Parse a palette from a JSON object.
    ///
    /// String values become single entries, object values become colorways
    /// whose keys must be shade weights and whose values must be strings.
    /// Shade strings are kept verbatim, even when they are not hex colors.
    ///
    /// # Examples
    ///
    /// ```
    /// use colorway::models::ColorPalette;
    ///
    /// let palette = ColorPalette::from_json_str(
    ///     r##"{ "black": "#000", "red": { "500": "#ef4444", "800": "#991b1b" } }"##,
    /// ).unwrap();
    /// assert_eq!(palette.useable_colorways().count(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Palette is not valid JSON")?;
        let Value::Object(map) = value else {
            anyhow::bail!("Palette must be a JSON object mapping names to colors");
        };

        let mut entries = Vec::with_capacity(map.len());
        for (name, value) in map {
            let entry = match value {
                Value::String(value) => PaletteEntry::Single { name, value },
                Value::Object(shade_map) => {
                    let mut shades = Vec::with_capacity(shade_map.len());
                    for (key, shade) in shade_map {
                        let weight: ShadeWeight = key
                            .parse()
                            .context(format!("Invalid shade key in colorway '{name}'"))?;
                        match shade {
                            Value::String(hex) => shades.push(Shade::new(weight, hex)),
                            other => anyhow::bail!(
                                "Shade {name}-{weight} must be a string, found {other}"
                            ),
                        }
                    }
                    PaletteEntry::Colorway(Colorway { name, shades })
                }
                other => anyhow::bail!(
                    "Palette entry '{name}' must be a string or an object of shades, found {other}"
                ),
            };
            entries.push(entry);
        }

        let palette = Self::new(entries);
        debug!(
            entries = palette.entries.len(),
            useable = palette.useable.len(),
            "Loaded color palette"
        );
        Ok(palette)
    }

    /// All entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Colorways eligible for course colors and reverse lookup, in declaration order.
    pub fn useable_colorways(&self) -> impl Iterator<Item = &Colorway> + '_ {
        self.useable
            .iter()
            .filter_map(|&index| self.entries.get(index))
            .filter_map(PaletteEntry::as_colorway)
    }

    /// Get a colorway by name (any colorway, not only useable ones).
    #[must_use]
    pub fn colorway(&self, name: &str) -> Option<&Colorway> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .and_then(PaletteEntry::as_colorway)
    }

    /// Get the color value of a colorway shade.
    ///
    /// # Errors
    /// Returns an error if the colorway does not exist or lacks the shade.
    pub fn shade(&self, colorway: &str, weight: ShadeWeight) -> Result<&str> {
        let entry = self
            .colorway(colorway)
            .ok_or_else(|| anyhow::anyhow!("Unknown colorway '{colorway}'"))?;

        entry
            .shade(weight)
            .map(|s| s.hex.as_str())
            .ok_or_else(|| anyhow::anyhow!("Colorway '{colorway}' has no shade {weight}"))
    }
}
