//! Palette listing command.

use crate::cli::common::{load_config_and_palette, print_json, CliResult};
use crate::models::Shade;
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// List the useable colorways of the palette
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ColorwayOutput<'a> {
    name: &'a str,
    shades: &'a [Shade],
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self, palette_path: Option<&Path>) -> CliResult<()> {
        let (_, palette) = load_config_and_palette(palette_path)?;

        let colorways: Vec<ColorwayOutput<'_>> = palette
            .useable_colorways()
            .map(|c| ColorwayOutput {
                name: &c.name,
                shades: &c.shades,
            })
            .collect();

        if self.json {
            print_json(&colorways)?;
        } else {
            for colorway in &colorways {
                let shades: Vec<String> = colorway
                    .shades
                    .iter()
                    .map(|s| format!("{}:{}", s.weight, s.hex))
                    .collect();
                println!("{:<10} {}", colorway.name, shades.join(" "));
            }
            println!();
            println!("{} useable colorways", colorways.len());
        }

        Ok(())
    }
}
