//! Tests for loading configuration files.

use bakers_dozen_games::AppConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_load_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[round]
time_limit_secs = 300
undo_budget = 5
foundation_score = 10

[geometry]
card_width = 9
spacing_x = 10

[ui]
frame_ms = 16
max_events_per_tick = 8
double_click_ms = 250
log_file = "solitaire.log"
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.round().time_limit(), Duration::from_secs(300));
    assert_eq!(config.round().undo_budget(), 5);
    assert_eq!(config.round().foundation_score(), 10);
    assert_eq!(*config.geometry().card_width(), 9);
    assert_eq!(*config.geometry().spacing_x(), 10);
    assert_eq!(*config.geometry().card_height(), 4);
    assert_eq!(*config.ui().frame_ms(), 16);
    assert_eq!(*config.ui().max_events_per_tick(), 8);
    assert_eq!(*config.ui().double_click_ms(), 250);
    assert_eq!(config.ui().log_file().to_str(), Some("solitaire.log"));
}

#[test]
fn test_missing_named_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = AppConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[round\nundo_budget = ").unwrap();
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_written_config_reads_back() {
    let config = AppConfig::default().with_overrides(Some(45), Some(2)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bakers_dozen.toml");
    std::fs::write(&path, config.to_toml().unwrap()).unwrap();
    assert_eq!(AppConfig::from_file(&path).unwrap(), config);
}

#[test]
fn test_zero_frame_rate_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ui]\nframe_ms = 0").unwrap();
    assert!(AppConfig::from_file(file.path()).is_err());
}
