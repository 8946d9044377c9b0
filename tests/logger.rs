use datetime_extensions::config::LoggingConfig;
use datetime_extensions::constants::MAX_LOG_ENTRIES;
use datetime_extensions::logger::Logger;
use log::{Level, LevelFilter, Record};

fn enabled(level: &str) -> LoggingConfig {
    LoggingConfig {
        enabled: true,
        level: level.to_string(),
    }
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs, vec!["second".to_string(), "first".to_string()]);
}

#[test]
fn test_buffer_drops_oldest_when_full() {
    let logger = Logger::new();
    for i in 0..MAX_LOG_ENTRIES + 5 {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), MAX_LOG_ENTRIES);
    assert_eq!(logs[0], format!("entry {}", MAX_LOG_ENTRIES + 4));
    assert_eq!(logs[MAX_LOG_ENTRIES - 1], "entry 5");
    assert!(!logs.iter().any(|entry| entry == "entry 4"));
}

#[test]
fn test_clear() {
    let logger = Logger::default();
    logger.log("entry".to_string());
    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_dispatch_formats_into_buffer() {
    let logger = Logger::new();
    let (level, log) = logger.dispatch(&enabled("debug")).unwrap().into_log();
    assert_eq!(level, LevelFilter::Debug);

    log.log(
        &Record::builder()
            .args(format_args!("Clock session started"))
            .level(Level::Info)
            .target("datetime_extensions::clock")
            .build(),
    );

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("INFO"));
    assert!(logs[0].contains("datetime_extensions::clock"));
    assert!(logs[0].ends_with("Clock session started"));
}

#[test]
fn test_dispatch_filters_below_level() {
    let logger = Logger::new();
    let (_, log) = logger.dispatch(&enabled("warn")).unwrap().into_log();

    log.log(
        &Record::builder()
            .args(format_args!("tick"))
            .level(Level::Trace)
            .target("datetime_extensions::clock")
            .build(),
    );

    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_disabled_logging_is_off() {
    let logger = Logger::new();
    let (level, _) = logger.dispatch(&LoggingConfig::default()).unwrap().into_log();
    assert_eq!(level, LevelFilter::Off);
}

#[test]
fn test_invalid_level_is_rejected() {
    assert!(Logger::new().dispatch(&enabled("chatty")).is_err());
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("datetime-extensions/datetime-extensions.log"));
    }
}
