//! Unit tests for settings loading.

use heartrate::constants::DEFAULT_API_BASE_URL;
use heartrate::gesture::{ConfigError, ThresholdConfig};
use heartrate::settings::{default_settings_path, Settings, SettingsError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        api_base_url: "https://rate.example.com".into(),
        api_token: Some("secret".into()),
        thresholds: ThresholdConfig::with_thresholds(80.0, 160.0, 240.0),
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"thresholds": {"ratingRange": 300}}"#).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(loaded.api_token, None);
    assert_eq!(loaded.thresholds.rating_range, 300.0);
    assert_eq!(
        loaded.thresholds.dont_know_threshold,
        ThresholdConfig::default().dont_know_threshold
    );
}

#[test]
fn test_invalid_thresholds_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{"thresholds": {"dontKnowThreshold": 300, "dontCareThreshold": 200}}"#,
    )
    .unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Thresholds(ConfigError::DontCareNotAboveDontKnow { .. })
    ));
}

#[test]
fn test_malformed_json_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        Settings::load_from(&path),
        Err(SettingsError::Json(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        Settings::load_from(&dir.path().join("absent.json")),
        Err(SettingsError::Io(_))
    ));
}

#[test]
fn test_default_path() {
    let path = default_settings_path();
    assert!(path.is_none() || path.is_some_and(|p| p.ends_with("heartrate/settings.json")));
}
