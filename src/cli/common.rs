//! Shared CLI error handling and palette loading.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::models::ColorPalette;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was rejected (bad color, unknown colorway, ...)
    ValidationFailed = 1,
    /// Files or configuration could not be read
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// File system or configuration failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the config and the palette it points at.
///
/// An explicit `--palette` file takes precedence over the configured one.
pub fn load_config_and_palette(palette_path: Option<&Path>) -> CliResult<(Config, ColorPalette)> {
    let config =
        Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;

    let palette = match palette_path {
        Some(path) => ColorPalette::from_file(path),
        None => config.load_palette(),
    }
    .map_err(|e| CliError::io(format!("Failed to load palette: {e:#}")))?;

    Ok((config, palette))
}

/// Prints a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
