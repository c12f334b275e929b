//! Colorway Library
//!
//! This library provides the color utilities behind course theming: hex
//! parsing, contrast-aware text color selection, primary/secondary course
//! colors from a Tailwind-style palette, and reverse lookup from any color
//! to its closest colorway using the OKLab color space.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;

pub use models::{ColorPalette, Colorway, Oklab, RgbColor, ShadeWeight};
pub use services::{
    colorway_from_color, course_colors, nearest_shade, pick_font_color, CourseColors, FontColor,
    NearestShade,
};
