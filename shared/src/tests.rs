//! Tests for the shared crate: settings layering, money display, log hygiene

use crate::config::{ConfigError, LogSettings, Settings, CONFIG_PATH_VAR, DEFAULT_LOG_LEVEL};
use crate::logger::{init_logger, sanitize_for_log};
use crate::types::{Currency, Money};
use ::config::Map;
use rust_decimal_macros::dec;
use std::fs;
use tempfile::tempdir;

// Helper function to build a stand-in environment
fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.log.level, DEFAULT_LOG_LEVEL);
    assert!(!settings.log.json);
    assert!(settings.notifications.seed_mock_data);
    assert!(settings.notifications.announce_unread_on_setup);
    assert_eq!(settings.subscriptions.currency, Currency::EUR);
    assert!(settings.subscriptions.seed_mock_data);
}

#[test]
fn test_settings_from_full_toml() {
    let settings = Settings::from_toml(
        r#"
        [log]
        level = "debug"
        json = true

        [notifications]
        seed_mock_data = false
        announce_unread_on_setup = false

        [subscriptions]
        currency = "CHF"
        seed_mock_data = false
        "#,
    )
    .unwrap();

    assert_eq!(settings.log.level, "debug");
    assert!(settings.log.json);
    assert!(!settings.notifications.seed_mock_data);
    assert!(!settings.notifications.announce_unread_on_setup);
    assert_eq!(settings.subscriptions.currency, Currency::CHF);
    assert!(!settings.subscriptions.seed_mock_data);
}

#[test]
fn test_settings_missing_sections_use_defaults() {
    let settings = Settings::from_toml(
        r#"
        [log]
        json = true
        "#,
    )
    .unwrap();

    assert!(settings.log.json);
    assert_eq!(settings.log.level, DEFAULT_LOG_LEVEL);
    assert_eq!(settings.notifications, Settings::default().notifications);
    assert_eq!(settings.subscriptions, Settings::default().subscriptions);
}

#[test]
fn test_settings_empty_document_is_default() {
    let settings = Settings::from_toml("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_rejects_bad_log_directive() {
    let result = Settings::from_toml(
        r#"
        [log]
        level = "toxshare=loudest"
        "#,
    );

    match result {
        Err(ConfigError::InvalidLogLevel { directive, .. }) => {
            assert_eq!(directive, "toxshare=loudest");
        }
        other => panic!("Expected InvalidLogLevel, got {:?}", other),
    }
}

#[test]
fn test_settings_rejects_unknown_currency() {
    let result = Settings::from_toml(
        r#"
        [subscriptions]
        currency = "DOGE"
        "#,
    );
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn test_settings_rejects_malformed_toml() {
    let result = Settings::from_toml("[log\nlevel = ");
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

// ============================================================================
// Settings layering
// ============================================================================

#[test]
fn test_load_without_files_or_env_is_default() {
    // Tests run from the crate directory, which has no config/ folder
    let settings = Settings::load_from(Map::new()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_override_file_wins_over_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("override.toml");
    fs::write(
        &path,
        r#"
        [log]
        level = "debug"

        [subscriptions]
        currency = "GBP"
        "#,
    )
    .unwrap();

    let settings =
        Settings::load_from(vars(&[(CONFIG_PATH_VAR, path.to_str().unwrap())])).unwrap();

    assert_eq!(settings.log.level, "debug");
    assert_eq!(settings.subscriptions.currency, Currency::GBP);
    assert!(settings.subscriptions.seed_mock_data);
}

#[test]
fn test_load_missing_override_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let result = Settings::load_from(vars(&[(CONFIG_PATH_VAR, path.to_str().unwrap())]));
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
fn test_load_env_vars_override_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("override.toml");
    fs::write(
        &path,
        r#"
        [log]
        level = "debug"

        [notifications]
        seed_mock_data = true
        "#,
    )
    .unwrap();

    let settings = Settings::load_from(vars(&[
        (CONFIG_PATH_VAR, path.to_str().unwrap()),
        ("TOXSHARE__LOG__LEVEL", "warn"),
        ("TOXSHARE__NOTIFICATIONS__SEED_MOCK_DATA", "false"),
        ("TOXSHARE__SUBSCRIPTIONS__CURRENCY", "USD"),
    ]))
    .unwrap();

    assert_eq!(settings.log.level, "warn");
    assert!(!settings.notifications.seed_mock_data);
    assert_eq!(settings.subscriptions.currency, Currency::USD);
}

#[test]
fn test_load_ignores_unprefixed_env() {
    let settings = Settings::load_from(vars(&[
        ("LOG__LEVEL", "trace"),
        ("OTHERAPP__LOG__JSON", "true"),
    ]))
    .unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_rejects_bad_directive_from_env() {
    let result = Settings::load_from(vars(&[("TOXSHARE__LOG__LEVEL", "toxshare=loudest")]));
    assert!(matches!(result, Err(ConfigError::InvalidLogLevel { .. })));
}

// ============================================================================
// Money
// ============================================================================

#[test]
fn test_money_display_whole_units() {
    let money = Money::new(dec!(750), Currency::EUR);
    assert_eq!(money.to_string(), "750 €");
}

#[test]
fn test_money_display_drops_trailing_zeros() {
    let money = Money::new(dec!(1500.00), Currency::USD);
    assert_eq!(money.to_string(), "1500 $");
}

#[test]
fn test_money_zero() {
    assert!(Money::new(dec!(0), Currency::GBP).is_zero());
    assert!(!Money::new(dec!(1), Currency::GBP).is_zero());
}

#[test]
fn test_currency_serializes_as_code() {
    let json = serde_json::to_string(&Currency::EUR).unwrap();
    assert_eq!(json, "\"EUR\"");
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_sanitize_short_value_untouched() {
    assert_eq!(sanitize_for_log("Equipment fault", 32), "Equipment fault");
}

#[test]
fn test_sanitize_truncates_long_value() {
    assert_eq!(sanitize_for_log("Irritation results", 10), "Irritation…");
}

#[test]
fn test_sanitize_respects_char_boundaries() {
    // Multi-byte characters must not be split
    assert_eq!(sanitize_for_log("Éco-Plus résultats", 3), "Éco…");
}

#[test]
fn test_init_logger_twice_is_harmless() {
    let settings = LogSettings::default();
    let _ = init_logger(&settings);
    assert!(!init_logger(&settings));
}

#[test]
fn test_bootstrap_returns_loaded_settings() {
    // Both read the same process environment
    let settings = crate::bootstrap().unwrap();
    assert_eq!(settings, Settings::load().unwrap());
}
