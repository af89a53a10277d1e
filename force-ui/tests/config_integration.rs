//! Integration tests that load configuration from on-disk files.
//!
//! The unit tests in config.rs parse inline strings; these cover the
//! read-from-disk path and the command-line override layering.

use std::path::{Path, PathBuf};

use force_ui::components::WindowPreferences;
use force_ui::config::{AppConfig, ConfigError, Overrides};
use gpui::px;
use pretty_assertions::assert_eq;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("force-analytics.toml")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let config = AppConfig::load(&fixture_path()).expect("fixture file should load");

    assert_eq!(config.window.width, 1440.0);
    assert_eq!(config.window.height, 960.0);
    assert_eq!(config.services.backend, "simulated");
    assert_eq!(config.services.latency_ms, 250);
    assert!(!config.services.fail_signups);
    assert_eq!(config.logging.level.as_deref(), Some("force_core=trace,info"));
    assert_eq!(config.logging.file, None);
    assert!(!config.logging.stdout);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let path = fixture_path().with_file_name("does-not-exist.toml");

    let config = AppConfig::load(&path).expect("missing file is not an error");

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_directory_path_is_a_read_error() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests");

    let error = AppConfig::load(&dir).unwrap_err();

    assert!(matches!(error, ConfigError::Read { .. }), "{error:?}");
}

#[test]
fn test_overrides_win_over_fixture() {
    let mut config = AppConfig::load(&fixture_path()).unwrap();

    config.apply_overrides(&Overrides {
        log_level: Some("warn".to_string()),
        backend: None,
        latency_ms: Some(0),
        fail_signups: true,
    });

    assert_eq!(config.logging.level.as_deref(), Some("warn"));
    assert_eq!(config.services.backend, "simulated");
    assert_eq!(config.services.latency_ms, 0);
    assert!(config.services.fail_signups);
}

#[test]
fn test_window_preferences_follow_fixture() {
    let config = AppConfig::load(&fixture_path()).unwrap();

    let prefs = WindowPreferences::from(&config.window);

    assert_eq!(prefs.size.width, px(1440.0));
    assert_eq!(prefs.size.height, px(960.0));
}
