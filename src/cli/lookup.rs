//! Color to colorway lookup command.

use crate::cli::common::{load_config_and_palette, print_json, CliError, CliResult};
use crate::models::RgbColor;
use crate::services::{exact_colorway, lookup_colorway};
use clap::Args;
use std::path::Path;

/// Find the colorway a color belongs to
#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Color to look up (a palette shade or any hex color)
    #[arg(value_name = "HEX")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self, palette_path: Option<&Path>) -> CliResult<()> {
        let (_, palette) = load_config_and_palette(palette_path)?;

        // Past this check, lookup failures come from the palette, not the query
        if exact_colorway(&palette, &self.color).is_none()
            && RgbColor::from_hex(&self.color).is_none()
        {
            return Err(CliError::validation(format!(
                "Invalid hex color format '{}'",
                self.color
            )));
        }

        let found = lookup_colorway(&palette, &self.color)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.json {
            print_json(&found)?;
        } else {
            println!("Color:    {}", self.color);
            println!("Colorway: {}", found.colorway);
            match &found.nearest {
                None => println!("Match:    exact"),
                Some(nearest) => {
                    println!("Match:    nearest");
                    println!(
                        "Shade:    {}-{} {} (distance {:.4})",
                        nearest.colorway, nearest.weight, nearest.hex, nearest.distance
                    );
                }
            }
        }

        Ok(())
    }
}
