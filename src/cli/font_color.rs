//! Text color selection command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::RgbColor;
use crate::services::contrast::{font_color_for_luminance, relative_luminance};
use clap::Args;
use serde::Serialize;

/// Pick a readable text color for a background
#[derive(Debug, Clone, Args)]
pub struct FontColorArgs {
    /// Background hex color
    #[arg(value_name = "HEX")]
    pub background: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FontColorOutput {
    background: String,
    luminance: f64,
    font_color: &'static str,
    class: &'static str,
}

impl FontColorArgs {
    /// Execute the font-color command
    pub fn execute(&self) -> CliResult<()> {
        let rgb = RgbColor::from_hex(&self.background).ok_or_else(|| {
            CliError::validation(format!(
                "Cannot pick a font color for invalid hex '{}'",
                self.background
            ))
        })?;

        let luminance = relative_luminance(rgb);
        let font_color = font_color_for_luminance(luminance);

        let output = FontColorOutput {
            background: rgb.to_hex(),
            luminance,
            font_color: font_color.label(),
            class: font_color.tailwind_class(),
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("Background: {}", output.background);
            println!("Luminance:  {:.4}", output.luminance);
            println!("Text:       {} ({})", output.font_color, output.class);
        }

        Ok(())
    }
}
