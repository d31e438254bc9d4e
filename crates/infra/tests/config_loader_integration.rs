//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use salonlite_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> (NamedTempFile, std::path::PathBuf) {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    (temp_file, path)
}

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "api": {
            "base_url": "https://salon.example.com/api",
            "timeout_secs": 15,
            "max_attempts": 2
        },
        "board": {
            "row_height_px": 24,
            "header_height_px": 50
        },
        "logging": {
            "level": "salonlite=debug",
            "json": true
        }
    }"#;
    let (_temp, path) = write_config(json_content, "json");

    let config = config::load_from_file(Some(path.clone())).expect("config from JSON file");

    assert_eq!(config.api.base_url, "https://salon.example.com/api");
    assert_eq!(config.api.timeout_secs, 15);
    assert_eq!(config.api.max_attempts, 2);
    assert_eq!(config.board.row_height_px, 24);
    assert_eq!(config.board.header_height_px, 50);
    assert_eq!(config.logging.level, "salonlite=debug");
    assert!(config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[api]
base_url = "http://localhost:8000"
"#;
    let (_temp, path) = write_config(toml_content, "toml");

    let config = config::load_from_file(Some(path.clone())).expect("config from TOML file");

    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.api.max_attempts, 1);
    assert_eq!(config.board.row_height_px, 21);
    assert!(!config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_invalid_json() {
    let (_temp, path) = write_config("{ \"api\": ", "json");

    let result = config::load_from_file(Some(path.clone()));
    let err = result.expect_err("truncated JSON must not load");
    assert!(err.to_string().contains("Invalid JSON"));

    std::fs::remove_file(path).ok();
}
