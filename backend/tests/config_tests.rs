//! Configuration resolution against the real process environment.

use std::io::Write;

use roman_numeral::config::{ConfigError, LogFormat, ServerConfig, CONFIG_PATH_ENV};

mod support;
use support::with_server_env;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_explicit_file() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 9000
cors_allow_any = false

[logging]
level = "debug"
format = "json"
"#,
    );
    let path = file.path().to_str().unwrap().to_string();

    let config = with_server_env(&[(CONFIG_PATH_ENV, path.as_str())], || {
        ServerConfig::load().unwrap()
    });

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert!(!config.server.cors_allow_any);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_env_overrides_file() {
    let file = write_config("[server]\nport = 9000\n");
    let path = file.path().to_str().unwrap().to_string();

    let config = with_server_env(
        &[
            (CONFIG_PATH_ENV, path.as_str()),
            ("PORT", "9100"),
            ("LOG_FORMAT", "json"),
        ],
        || ServerConfig::load().unwrap(),
    );

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_missing_file_is_an_error() {
    let result = with_server_env(
        &[(CONFIG_PATH_ENV, "/definitely/not/here/roman.toml")],
        ServerConfig::load,
    );
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("[server\nport = ");
    let path = file.path().to_str().unwrap().to_string();

    let result = with_server_env(&[(CONFIG_PATH_ENV, path.as_str())], ServerConfig::load);
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_invalid_port_env_is_an_error() {
    let file = write_config("");
    let path = file.path().to_str().unwrap().to_string();

    let result = with_server_env(
        &[(CONFIG_PATH_ENV, path.as_str()), ("PORT", "99999")],
        ServerConfig::load,
    );
    assert!(matches!(result, Err(ConfigError::InvalidValue { key: "PORT", .. })));
}
