//! Configuration inspection commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Configuration commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => show(args),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Init => init(),
        }
    }
}

fn show(args: &ConfigShowArgs) -> CliResult<()> {
    let config =
        Config::load().map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;

    if args.json {
        return print_json(&config);
    }

    match &config.palette.path {
        Some(path) => println!("Palette:        {}", path.display()),
        None => println!("Palette:        (embedded Tailwind palette)"),
    }
    println!("Default offset: {}", config.course.default_offset);
    if config.course.index_overrides.is_empty() {
        println!("Overrides:      (built-in only)");
    } else {
        for (name, weight) in &config.course.index_overrides {
            println!("Override:       {name} = {weight}");
        }
    }

    Ok(())
}

fn init() -> CliResult<()> {
    let path = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;

    if Config::exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }

    Config::new()
        .save()
        .map_err(|e| CliError::io(format!("Failed to write config: {e:#}")))?;
    println!("Wrote default config: {}", path.display());

    Ok(())
}
