//! Hex to RGB conversion command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::RgbColor;
use clap::Args;
use serde::Serialize;

/// Parse a hex color into RGB channels
#[derive(Debug, Clone, Args)]
pub struct RgbArgs {
    /// Hex color (#RRGGBB, #RGB, with or without '#')
    #[arg(value_name = "HEX")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RgbOutput {
    input: String,
    hex: String,
    r: u8,
    g: u8,
    b: u8,
}

impl RgbArgs {
    /// Execute the rgb command
    pub fn execute(&self) -> CliResult<()> {
        let rgb = RgbColor::from_hex(&self.color).ok_or_else(|| {
            CliError::validation(format!(
                "Invalid hex color format: '{}'. Expected #RRGGBB or #RGB",
                self.color
            ))
        })?;

        let output = RgbOutput {
            input: self.color.clone(),
            hex: rgb.to_hex(),
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("{} -> rgb({}, {}, {})", output.hex, output.r, output.g, output.b);
        }

        Ok(())
    }
}
