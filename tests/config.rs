use datetime_extensions::config::Config;
use datetime_extensions::utils::datetime::NightInterval;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("datetime-extensions-config-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.calendar.locale, "en_US");
    assert_eq!(config.calendar.morning_hour, 8);
    assert_eq!(config.calendar.evening_hour, 21);
    assert_eq!(config.clock.tick_interval_ms, 1000);
    assert!(config.localization.bundle_dir.is_empty());
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown locale should fail
    config.calendar.locale = "xx_YY".to_string();
    assert!(config.validate().is_err());

    // Reset and test hours out of range
    config.calendar.locale = "it_IT".to_string();
    assert!(config.validate().is_ok());
    config.calendar.evening_hour = 24;
    assert!(config.validate().is_err());

    // Morning after evening
    config.calendar.morning_hour = 22;
    config.calendar.evening_hour = 21;
    assert!(config.validate().is_err());

    // Tick interval bounds
    config = Config::default();
    config.clock.tick_interval_ms = 0;
    assert!(config.validate().is_err());
    config.clock.tick_interval_ms = 120_000;
    assert!(config.validate().is_err());

    // Log level
    config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("locale = \"en_US\""));
    assert!(toml_str.contains("tick_interval_ms = 1000"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[calendar]
locale = "it_IT"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.calendar.locale, "it_IT");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.calendar.morning_hour, 8);
    assert_eq!(config.clock.tick_interval_ms, 1000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_derived_values() {
    let mut config = Config::default();
    config.calendar.morning_hour = 7;
    config.calendar.evening_hour = 22;
    config.clock.tick_interval_ms = 500;

    assert_eq!(config.calendar.night_interval(), NightInterval::new(7, 22));
    assert_eq!(config.clock.tick_interval(), Duration::from_millis(500));
    assert!(config.calendar.locale().is_ok());
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Info);
}

#[test]
fn test_load_bundle_without_dir_is_empty() {
    let bundle = Config::default().localization.load_bundle().unwrap();
    assert!(bundle.is_empty());
}

#[test]
fn test_load_bundle_from_configured_dir() {
    let dir = temp_dir("bundle");
    fs::write(dir.join("it.toml"), "start = \"Avvia\"").unwrap();

    let mut config = Config::default();
    config.localization.bundle_dir = dir.display().to_string();
    config.localization.language = "it".to_string();

    let bundle = config.localization.load_bundle().unwrap();
    assert_eq!(bundle.localized("start"), "Avvia");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_load_from_file_validates() {
    let dir = temp_dir("invalid");
    let path = dir.join("config.toml");
    fs::write(&path, "[clock]\ntick_interval_ms = 0\n").unwrap();
    assert!(Config::load_from_file(&path).is_err());

    fs::write(&path, "[clock]\ntick_interval_ms = 250\n").unwrap();
    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.clock.tick_interval_ms, 250);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_default_config_round_trip() {
    let dir = temp_dir("generate");
    let path = dir.join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# datetime-extensions configuration file"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.calendar.locale, "en_US");

    let _ = fs::remove_dir_all(&dir);
}
