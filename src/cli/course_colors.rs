//! Course color derivation command.

use crate::cli::common::{load_config_and_palette, print_json, CliError, CliResult};
use crate::models::ShadeWeight;
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Get the primary and secondary colors of a colorway
#[derive(Debug, Clone, Args)]
pub struct CourseColorsArgs {
    /// Colorway name (e.g. "red", "slate")
    #[arg(value_name = "COLORWAY")]
    pub colorway: String,

    /// Primary shade weight (defaults to the colorway's default, usually 500)
    #[arg(short, long, value_name = "WEIGHT")]
    pub index: Option<ShadeWeight>,

    /// Weight distance to the secondary shade (defaults to the configured offset)
    #[arg(short, long, value_name = "N")]
    pub offset: Option<u16>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CourseColorsOutput {
    colorway: String,
    primary_weight: ShadeWeight,
    secondary_weight: ShadeWeight,
    primary_color: String,
    secondary_color: String,
}

impl CourseColorsArgs {
    /// Execute the course-colors command
    pub fn execute(&self, palette_path: Option<&Path>) -> CliResult<()> {
        let (config, palette) = load_config_and_palette(palette_path)?;
        let service = config.course_service(&palette);

        let (primary_weight, secondary_weight) = service
            .weights(&self.colorway, self.index, self.offset)
            .map_err(|e| CliError::validation(e.to_string()))?;
        let colors = service
            .colors(&self.colorway, Some(primary_weight), self.offset)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let output = CourseColorsOutput {
            colorway: self.colorway.clone(),
            primary_weight,
            secondary_weight,
            primary_color: colors.primary_color,
            secondary_color: colors.secondary_color,
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("Colorway:  {}", output.colorway);
            println!("Primary:   {} ({})", output.primary_color, output.primary_weight);
            println!("Secondary: {} ({})", output.secondary_color, output.secondary_weight);
        }

        Ok(())
    }
}
