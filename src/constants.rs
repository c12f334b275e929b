//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed limits of the color utilities.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Colorway";

/// Number of leading colorways in a palette that take part in course colors and lookup.
pub const USEABLE_COLORWAY_LIMIT: usize = 17;

/// Default weight distance between a course's primary and secondary color.
pub const DEFAULT_COURSE_OFFSET: u16 = 300;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "COLORWAY_CONFIG_DIR";
