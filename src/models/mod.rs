//! Data models for colors, color spaces and palettes.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are value types; the services in [`crate::services`] hold the color logic.

pub mod color_palette;
pub mod oklab;
pub mod rgb;
pub mod shade;

// Re-export all model types
pub use color_palette::{ColorPalette, Colorway, PaletteEntry};
pub use oklab::{LinearRgb, Oklab};
pub use rgb::RgbColor;
pub use shade::{Shade, ShadeWeight};
