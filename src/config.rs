//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_DIR_ENV, DEFAULT_COURSE_OFFSET};
use crate::models::{ColorPalette, ShadeWeight};
use crate::services::CourseColorService;

/// Palette source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaletteConfig {
    /// Custom palette JSON file. The embedded Tailwind palette is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Course color derivation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseConfig {
    /// Weight distance between primary and secondary color
    #[serde(default = "default_course_offset")]
    pub default_offset: u16,
    /// Extra per-colorway default weights, applied over the built-in table
    #[serde(default)]
    pub index_overrides: BTreeMap<String, ShadeWeight>,
}

fn default_course_offset() -> u16 {
    DEFAULT_COURSE_OFFSET
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            default_offset: default_course_offset(),
            index_overrides: BTreeMap::new(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/colorway/config.toml`
/// - macOS: `~/Library/Application Support/colorway/config.toml`
/// - Windows: `%APPDATA%\colorway\config.toml`
///
/// The directory can be replaced with the `COLORWAY_CONFIG_DIR` environment variable.
///
/// # Validation
///
/// - `course.default_offset` must be a multiple of 50, at most 900
/// - `palette.path` must exist if set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Palette source
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Course color settings
    #[serde(default)]
    pub course: CourseConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `COLORWAY_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `colorway`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("colorway");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file, defaulting when it is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let offset = self.course.default_offset;
        if offset % 50 != 0 {
            anyhow::bail!("course.default_offset must be a multiple of 50, got {offset}");
        }

        let max_offset = ShadeWeight::W950.value() - ShadeWeight::W50.value();
        if offset > max_offset {
            anyhow::bail!(
                "course.default_offset must be at most {max_offset}, got {offset} (no pair of weights is that far apart)"
            );
        }

        if let Some(path) = &self.palette.path {
            if !path.exists() {
                anyhow::bail!("Palette file does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Loads the configured palette, or the embedded Tailwind palette.
    pub fn load_palette(&self) -> Result<ColorPalette> {
        match &self.palette.path {
            Some(path) => ColorPalette::from_file(path),
            None => ColorPalette::load(),
        }
    }

    /// Builds a course color service with the configured overrides and offset.
    #[must_use]
    pub fn course_service<'p>(&self, palette: &'p ColorPalette) -> CourseColorService<'p> {
        CourseColorService::new(palette)
            .with_index_overrides(
                self.course
                    .index_overrides
                    .iter()
                    .map(|(name, &weight)| (name.clone(), weight)),
            )
            .with_default_offset(self.course.default_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.palette.path, None);
        assert_eq!(config.course.default_offset, 300);
        assert!(config.course.index_overrides.is_empty());
    }

    #[test]
    fn test_config_validate_offset() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.course.default_offset = 275;
        assert!(config.validate().is_err());

        config.course.default_offset = 30;
        assert!(config.validate().is_err());

        // 700 + 250 = 950
        config.course.default_offset = 250;
        assert!(config.validate().is_ok());

        config.course.default_offset = 200;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_offset_upper_bound() {
        let mut config = Config::new();

        // 50 + 900 = 950
        config.course.default_offset = 900;
        assert!(config.validate().is_ok());

        config.course.default_offset = 950;
        assert!(config.validate().is_err());

        config.course.default_offset = 1000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at most 900"));
    }

    #[test]
    fn test_config_validate_palette_path() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();

        config.palette.path = Some(temp_dir.path().join("missing.json"));
        assert!(config.validate().is_err());

        let palette_path = temp_dir.path().join("palette.json");
        fs::write(&palette_path, r##"{ "red": { "500": "#ef4444" } }"##).unwrap();
        config.palette.path = Some(palette_path);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.course.default_offset = 400;
        config
            .course
            .index_overrides
            .insert("red".to_string(), ShadeWeight::W300);

        config.save_to(&config_path).unwrap();
        assert!(config_path.exists());
        assert!(!config_path.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_partial_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[course.index_overrides]\nyellow = 300\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.course.default_offset, 300);
        assert_eq!(
            config.course.index_overrides.get("yellow"),
            Some(&ShadeWeight::W300)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_weight() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[course.index_overrides]\nyellow = 450\n").unwrap();

        assert!(Config::load_from(&config_path).is_err());
    }

    #[test]
    fn test_load_palette_default_and_custom() {
        let config = Config::new();
        assert_eq!(config.load_palette().unwrap().useable_colorways().count(), 17);

        let temp_dir = TempDir::new().unwrap();
        let palette_path = temp_dir.path().join("palette.json");
        fs::write(
            &palette_path,
            r##"{ "brand": { "500": "#123456", "800": "#0a1a2a" } }"##,
        )
        .unwrap();

        let mut config = Config::new();
        config.palette.path = Some(palette_path);
        let palette = config.load_palette().unwrap();
        assert_eq!(palette.useable_colorways().count(), 1);
        assert!(palette.colorway("brand").is_some());
    }

    #[test]
    fn test_course_service_uses_config() {
        let palette = ColorPalette::load().unwrap();
        let mut config = Config::new();
        config.course.default_offset = 200;
        config
            .course
            .index_overrides
            .insert("red".to_string(), ShadeWeight::W600);

        let service = config.course_service(&palette);
        let colors = service.colors("red", None, None).unwrap();
        assert_eq!(colors.primary_color, "#dc2626");
        assert_eq!(colors.secondary_color, "#991b1b");
    }
}
