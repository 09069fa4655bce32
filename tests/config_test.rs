//! Configuration layering: defaults, JSON file, environment.

use std::time::Duration;

use carbon_tracker::config::{
    AppConfig, ConfigError, ENV_LOG, ENV_LOG_FILE, ENV_SHARE_TIMEOUT_MS, ENV_TOAST_MS,
};
use carbon_tracker::error::{AppError, ErrorCategory};
use serial_test::serial;

fn from_process_env(config: AppConfig) -> Result<AppConfig, ConfigError> {
    config.merge_env(|var| std::env::var(var).ok())
}

fn clear_env() {
    for var in [ENV_TOAST_MS, ENV_SHARE_TIMEOUT_MS, ENV_LOG, ENV_LOG_FILE] {
        std::env::remove_var(var);
    }
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "toast_ms": 2500, "share_fallback_url": "https://example.org/feed" }"#,
    )
    .unwrap();

    let config = AppConfig::default().merge_file(&path).unwrap();
    assert_eq!(config.toast_duration, Duration::from_millis(2500));
    assert_eq!(config.share_fallback_url, "https://example.org/feed");
    // Untouched fields keep their defaults
    assert_eq!(config.share_timeout, Duration::from_millis(1500));
}

#[test]
fn test_empty_file_object_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    let config = AppConfig::default().merge_file(&path).unwrap();
    assert_eq!(config.frame_interval, Duration::from_millis(16));
    assert_eq!(config.toast_duration, Duration::from_millis(1800));
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = AppConfig::default().merge_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(AppError::from(err).category(), ErrorCategory::Configuration);
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::default()
        .merge_file(&dir.path().join("absent.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "toast_ms": 2500 }"#).unwrap();

    std::env::set_var(ENV_TOAST_MS, "900");
    std::env::set_var(ENV_LOG, "carbon_tracker=debug");
    let config = from_process_env(AppConfig::default().merge_file(&path).unwrap()).unwrap();
    clear_env();

    assert_eq!(config.toast_duration, Duration::from_millis(900));
    assert_eq!(config.log_filter, "carbon_tracker=debug");
}

#[test]
#[serial]
fn test_invalid_env_value_is_rejected() {
    clear_env();
    std::env::set_var(ENV_SHARE_TIMEOUT_MS, "soon");
    let err = from_process_env(AppConfig::default()).unwrap_err();
    clear_env();

    assert!(matches!(
        err,
        ConfigError::InvalidEnv { var, .. } if var == ENV_SHARE_TIMEOUT_MS
    ));
}

#[test]
#[serial]
fn test_empty_log_file_env_disables_logging() {
    clear_env();
    std::env::set_var(ENV_LOG_FILE, "");
    let config = from_process_env(AppConfig::default()).unwrap();
    clear_env();

    assert_eq!(config.log_file, None);
}

#[test]
fn test_zero_durations_fail_validation() {
    let config = AppConfig::default().with_toast_duration(Duration::ZERO);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn test_custom_animation_durations_reach_the_app() {
    use carbon_tracker::adapters::MockClipboard;
    use carbon_tracker::app::{App, CounterKind};
    use carbon_tracker::config::AnimationDurations;
    use std::sync::Arc;

    let fast = AnimationDurations {
        points: Duration::from_millis(50),
        xp: Duration::from_millis(50),
        carbon: Duration::from_millis(50),
        streak: Duration::from_millis(50),
    };
    let config = AppConfig::default().with_animations(fast);
    assert_eq!(config.animations, fast);

    let app = App::new(config, Arc::new(MockClipboard::new()));
    assert_eq!(app.config.animations.points, Duration::from_millis(50));
    assert_eq!(app.counter_display(CounterKind::Streak), 7);
}
