use travelmood_core::{AppConfig, ConfigError, CoreError, ErrorExt, ErrorReporter};

#[test]
fn test_error_codes() {
    let config_error = CoreError::Config(ConfigError::FileNotFound {
        path: "travelmood.toml".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");

    let invalid_input = CoreError::InvalidInput {
        message: "empty feedback".to_string(),
    };
    assert_eq!(invalid_input.error_code(), "INVALID_INPUT");

    let internal = CoreError::Internal {
        message: "event loop died".to_string(),
    };
    assert_eq!(internal.error_code(), "INTERNAL");
}

#[test]
fn test_config_error_codes() {
    let not_found = ConfigError::FileNotFound {
        path: "travelmood.toml".to_string(),
    };
    assert_eq!(not_found.error_code(), "CONFIG_FILE_NOT_FOUND");

    let invalid_value = ConfigError::InvalidValue {
        field: "window_width".to_string(),
        value: "-1".to_string(),
    };
    assert_eq!(invalid_value.error_code(), "CONFIG_INVALID_VALUE");
}

#[test]
fn test_user_friendly_messages() {
    let invalid_value = CoreError::Config(ConfigError::InvalidValue {
        field: "window_width".to_string(),
        value: "-1".to_string(),
    });
    let message = invalid_value.user_friendly_message();
    assert!(!message.is_empty());
    assert!(message.contains("window_width"));

    let internal = CoreError::Internal {
        message: "event loop died".to_string(),
    };
    assert!(!internal.user_friendly_message().is_empty());
}

#[test]
fn test_parse_error_is_surfaced() {
    let path = std::env::temp_dir().join("travelmood_bad_config_test.toml");
    std::fs::write(&path, "window_width = \"very wide\"").unwrap();

    let result = AppConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_error_reporter() {
    let reporter = ErrorReporter::new()
        .with_error_reporting(true)
        .with_warning_reporting(true);
    let error = CoreError::Internal {
        message: "event loop died".to_string(),
    };

    // These just must not panic
    reporter.report_error(&error);
    reporter.report_warning(&error);
}
