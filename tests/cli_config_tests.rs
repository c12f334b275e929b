//! End-to-end tests for `colorway config` commands.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_default_json() {
    let result = run_json(&["config", "show", "--json"]);
    assert_eq!(result["course"]["default_offset"], 300);
    assert!(result["course"]["index_overrides"].is_object());
    assert!(result["palette"].get("path").is_none());
}

#[test]
fn test_config_show_plain() {
    let output = run(&["config", "show"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("embedded Tailwind palette"));
    assert!(stdout.contains("Default offset: 300"));
}

#[test]
fn test_config_path_uses_override_dir() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "path"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = config_dir.path().join("config.toml");
    assert_eq!(stdout.trim(), expected.to_str().unwrap());
}

#[test]
fn test_config_with_palette_path() {
    let (palette_path, _palette_dir) = create_temp_palette(SMALL_PALETTE_JSON);
    let config_dir = create_temp_config(&format!(
        "[palette]\npath = {:?}\n",
        palette_path.to_str().unwrap()
    ));

    let output = isolated_command(&["palette", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result.as_array().unwrap().len(), 2);
}

#[test]
fn test_invalid_config_is_io_error() {
    let config_dir = create_temp_config("[course]\ndefault_offset = 125\n");

    let output = isolated_command(&["course-colors", "red"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("multiple of 50"));
}

#[test]
fn test_config_init_writes_defaults_once() {
    let config_dir = TempDir::new().unwrap();
    let nested = config_dir.path().join("nested");

    let output = isolated_command(&["config", "init"], &nested)
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let content = std::fs::read_to_string(nested.join("config.toml")).unwrap();
    assert!(content.contains("default_offset = 300"));

    let output = isolated_command(&["config", "init"], &nested)
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("already exists"));
}
