/*!
 * Tests for application configuration
 */

use subgrab::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_defaultConfig_shouldHaveExpectedValues() {
    let config = Config::default();
    assert_eq!(config.output_dir, ".");
    assert_eq!(config.request.user_agent, "Mozilla/5.0");
    assert_eq!(config.request.accept, "*/*");
    assert_eq!(config.request.timeout_secs, 30);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_defaultConfig_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

/// An empty JSON object falls back to defaults for every field
#[test]
fn test_config_fromEmptyJson_shouldUseDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.output_dir, ".");
    assert_eq!(config.request.timeout_secs, 30);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_config_fromPartialJson_shouldKeepOtherDefaults() {
    let config: Config =
        serde_json::from_str(r#"{"output_dir": "transcripts", "log_level": "debug"}"#).unwrap();
    assert_eq!(config.output_dir, "transcripts");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.request.user_agent, "Mozilla/5.0");
}

#[test]
fn test_config_serialization_shouldRoundTrip() {
    let mut config = Config::default();
    config.output_dir = "out".to_string();
    config.request.timeout_secs = 10;
    config.log_level = LogLevel::Trace;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.output_dir, "out");
    assert_eq!(parsed.request.timeout_secs, 10);
    assert_eq!(parsed.log_level, LogLevel::Trace);
}

#[test]
fn test_validate_withEmptyOutputDir_shouldFail() {
    let mut config = Config::default();
    config.output_dir = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyUserAgent_shouldFail() {
    let mut config = Config::default();
    config.request.user_agent = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroTimeout_shouldFail() {
    let mut config = Config::default();
    config.request.timeout_secs = 0;
    assert!(config.validate().is_err());
}

/// Log levels serialize lowercase
#[test]
fn test_logLevel_serialization_shouldBeLowercase() {
    assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
    let parsed: LogLevel = serde_json::from_str("\"error\"").unwrap();
    assert_eq!(parsed, LogLevel::Error);
}
