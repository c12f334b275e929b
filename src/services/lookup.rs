//! Reverse lookup from a color to the colorway it belongs to.
//!
//! Lookup runs in two passes over the palette's useable colorways: an exact
//! pass comparing shade values as written, then a nearest pass in OKLab
//! space. The nearest pass is split into [`nearest_shade`] (pure search) and
//! [`resolve_nearest`] (owner resolution) so each step can be used alone.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, trace};

use crate::models::{ColorPalette, Colorway, RgbColor, ShadeWeight};

/// Closest palette shade to a query color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestShade {
    /// Colorway the shade was found in.
    pub colorway: String,
    /// Weight of the shade.
    pub weight: ShadeWeight,
    /// Shade value as written in the palette.
    pub hex: String,
    /// Euclidean OKLab distance to the query color.
    pub distance: f64,
}

/// Result of a colorway lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorwayMatch {
    /// Owning colorway name.
    pub colorway: String,
    /// True if the color is literally one of the colorway's shades.
    pub exact: bool,
    /// The closest shade, for non-exact matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest: Option<NearestShade>,
}

/// Finds the first useable colorway with a shade written as `color`.
///
/// Comparison is literal, so neither `#fff` nor `#EF4444` matches a shade
/// written `#ffffff` or `#ef4444`.
#[must_use]
pub fn exact_colorway<'p>(palette: &'p ColorPalette, color: &str) -> Option<&'p Colorway> {
    palette
        .useable_colorways()
        .find(|colorway| colorway.contains_color(color))
}

/// Finds the useable shade closest to `color` in OKLab space.
///
/// Shades that are not hex colors are skipped. On equal distances the
/// first shade in declaration order wins. Returns `None` if no useable
/// colorway has a parseable shade.
#[must_use]
pub fn nearest_shade(palette: &ColorPalette, color: RgbColor) -> Option<NearestShade> {
    let target = color.to_oklab();
    let mut best: Option<NearestShade> = None;

    for colorway in palette.useable_colorways() {
        for shade in &colorway.shades {
            let Some(rgb) = shade.to_rgb() else {
                trace!(colorway = %colorway.name, weight = %shade.weight, "Skipping non-hex shade");
                continue;
            };

            let distance = rgb.to_oklab().distance(target);
            if best.as_ref().map_or(true, |b| distance < b.distance) {
                best = Some(NearestShade {
                    colorway: colorway.name.clone(),
                    weight: shade.weight,
                    hex: shade.hex.clone(),
                    distance,
                });
            }
        }
    }

    best
}

/// Resolves the colorway that owns a nearest-shade result.
///
/// # Errors
///
/// Returns an error if the shade value is not a hex color or no useable
/// colorway contains it; both mean the palette is corrupted.
pub fn resolve_nearest(palette: &ColorPalette, nearest: &NearestShade) -> Result<String> {
    if RgbColor::from_hex(&nearest.hex).is_none() {
        anyhow::bail!(
            "Corrupted palette: closest shade {}-{} is not a hex color ('{}')",
            nearest.colorway,
            nearest.weight,
            nearest.hex
        );
    }

    exact_colorway(palette, &nearest.hex)
        .map(|colorway| colorway.name.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Corrupted palette: shade '{}' is not owned by any useable colorway",
                nearest.hex
            )
        })
}

/// Looks up the colorway for a color, reporting how it was matched.
///
/// # Errors
///
/// Returns an error if the color is neither an exact shade nor a hex color,
/// if the palette has no parseable useable shades, or if the palette is
/// corrupted.
pub fn lookup_colorway(palette: &ColorPalette, color: &str) -> Result<ColorwayMatch> {
    if let Some(colorway) = exact_colorway(palette, color) {
        debug!(color, colorway = %colorway.name, "Exact colorway match");
        return Ok(ColorwayMatch {
            colorway: colorway.name.clone(),
            exact: true,
            nearest: None,
        });
    }

    let rgb = RgbColor::from_hex(color)
        .ok_or_else(|| anyhow::anyhow!("Invalid hex color format '{color}'"))?;

    let nearest = nearest_shade(palette, rgb)
        .ok_or_else(|| anyhow::anyhow!("Palette has no useable hex shades to compare against"))?;
    debug!(
        color,
        shade = %nearest.hex,
        distance = nearest.distance,
        "Nearest colorway shade"
    );

    let colorway = resolve_nearest(palette, &nearest)?;
    Ok(ColorwayMatch {
        colorway,
        exact: false,
        nearest: Some(nearest),
    })
}

/// Gets the name of the colorway a color belongs to.
///
/// # Examples
///
/// ```
/// use colorway::models::ColorPalette;
/// use colorway::services::colorway_from_color;
///
/// let palette = ColorPalette::load().unwrap();
/// assert_eq!(colorway_from_color(&palette, "#ef4444").unwrap(), "red");
/// assert_eq!(colorway_from_color(&palette, "#ff0000").unwrap(), "red");
/// ```
pub fn colorway_from_color(palette: &ColorPalette, color: &str) -> Result<String> {
    lookup_colorway(palette, color).map(|m| m.colorway)
}
