//! Colorway - Tailwind colorway utilities on the command line
//!
//! This application exposes the course color utilities as subcommands:
//! hex parsing, text color selection, course colors and colorway lookup.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorway::cli::{
    CliResult, ConfigArgs, CourseColorsArgs, FontColorArgs, LookupArgs, PaletteArgs, RgbArgs,
};
use colorway::constants::APP_NAME;

/// Colorway - Tailwind colorway utilities
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Palette JSON file (overrides the configured palette)
    #[arg(long, global = true, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a hex color into RGB channels
    Rgb(RgbArgs),
    /// Pick a readable text color for a background
    FontColor(FontColorArgs),
    /// Get the primary and secondary colors of a colorway
    CourseColors(CourseColorsArgs),
    /// Find the colorway a color belongs to
    Lookup(LookupArgs),
    /// List the useable colorways of the palette
    Palette(PaletteArgs),
    /// Inspect configuration
    Config(ConfigArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    let palette = cli.palette.as_deref();
    match &cli.command {
        Command::Rgb(args) => args.execute(),
        Command::FontColor(args) => args.execute(),
        Command::CourseColors(args) => args.execute(palette),
        Command::Lookup(args) => args.execute(palette),
        Command::Palette(args) => args.execute(palette),
        Command::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
