use bananatoon::config::{Config, ConfigError};
use std::path::PathBuf;

fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.gemini.base_url, "https://generativelanguage.googleapis.com");
    assert_eq!(config.gemini.model, "gemini-2.5-flash-image");
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.connect_timeout_seconds, 10);
    assert_eq!(config.download.dir, PathBuf::from("."));
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("bananatoon/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.gemini.model, "gemini-2.5-flash-image");
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[gemini]
model = "gemini-3-pro-image-preview"
api_key = "from-file"

[download]
dir = "/tmp/cartoons"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.gemini.model, "gemini-3-pro-image-preview");
    assert_eq!(config.gemini.api_key.as_deref(), Some("from-file"));
    assert_eq!(config.gemini.base_url, "https://generativelanguage.googleapis.com");
    assert_eq!(config.download.dir, PathBuf::from("/tmp/cartoons"));
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_parse_error_names_file() {
    let (_dir, path) = write_config("[gemini\nmodel = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_validation_rejects_empty_model() {
    let (_dir, path) = write_config("[gemini]\nmodel = \"  \"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}
