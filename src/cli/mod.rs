//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the color utilities
//! for build scripts, design tooling and CI.

pub mod common;
pub mod config;
pub mod course_colors;
pub mod font_color;
pub mod lookup;
pub mod palette;
pub mod rgb;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use course_colors::CourseColorsArgs;
pub use font_color::FontColorArgs;
pub use lookup::LookupArgs;
pub use palette::PaletteArgs;
pub use rgb::RgbArgs;
