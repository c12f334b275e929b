//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the colorway binary (set by cargo at compile time)
pub fn colorway_bin() -> &'static str {
    env!("CARGO_BIN_EXE_colorway")
}

/// Creates a Command whose config directory is isolated from the user's.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(colorway_bin());
    cmd.env("COLORWAY_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp config dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Runs a command that must succeed and parses its stdout as JSON.
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = run(args);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// A small palette with one single entry, two colorways and one broken shade.
pub const SMALL_PALETTE_JSON: &str = r##"{
  "white": "#fff",
  "brand": {
    "100": "#dbeafe",
    "500": "#1d4ed8",
    "800": "#1e3a8a"
  },
  "accent": {
    "400": "#fb923c",
    "500": "not-a-color",
    "700": "#c2410c"
  }
}"##;

/// Writes a palette JSON file into a new temp directory.
pub fn create_temp_palette(json: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("palette.json");
    fs::write(&path, json).expect("Failed to write palette");
    (path, temp_dir)
}

/// Writes `config.toml` into a new temp config directory.
pub fn create_temp_config(toml: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("config.toml"), toml).expect("Failed to write config");
    temp_dir
}
