//! Service layer for color logic.
//!
//! This module contains the pure color utilities that UI code calls into:
//! text color selection, course color derivation and colorway lookup.
//! All functions take the palette explicitly and never mutate it.

pub mod contrast;
pub mod course_colors;
pub mod lookup;

// Re-export commonly used types and functions
pub use contrast::{pick_font_color, relative_luminance, FontColor};
pub use course_colors::{course_colors, CourseColorService, CourseColors};
pub use lookup::{
    colorway_from_color, exact_colorway, lookup_colorway, nearest_shade, resolve_nearest,
    ColorwayMatch, NearestShade,
};
