use std::fs;

use fluxmart::config::{Config, ConfigError};

fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

#[test]
fn defaults_match_the_service_contract() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://fluxmarket.vercel.app");
    assert_eq!(config.ui.page_limit, 20);
    assert_eq!(config.cache.list_ttl_seconds, 60);
    assert_eq!(config.cache.item_ttl_seconds, 300);
}

#[test]
fn loads_a_full_config() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://localhost:3000"
request_timeout_seconds = 10

[ui]
page_limit = 5

[cache]
list_ttl_seconds = 30
"#,
    );

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.api.base_url, "http://localhost:3000");
    assert_eq!(config.api.request_timeout_seconds, 10);
    // Unset fields keep their defaults.
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.ui.page_limit, 5);
    assert_eq!(config.cache.list_ttl_seconds, 30);
    assert_eq!(config.cache.item_ttl_seconds, 300);
}

#[test]
fn partial_config_fills_defaults() {
    let (_dir, path) = write_config("[ui]\ntick_ms = 100\n");
    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.ui.tick_ms, 100);
    assert_eq!(config.api.base_url, "https://fluxmarket.vercel.app");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    let err = Config::load_from(&path).expect_err("should fail to parse");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nope.toml");
    let err = Config::load_from(&path).expect_err("should fail to read");
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn empty_base_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"\"\n");
    let err = Config::load_from(&path).expect_err("should fail validation");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn non_http_base_url_fails_validation() {
    let (_dir, path) = write_config("[api]\nbase_url = \"ftp://example.test\"\n");
    let err = Config::load_from(&path).expect_err("should fail validation");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_page_limit_fails_validation() {
    let (_dir, path) = write_config("[ui]\npage_limit = 0\n");
    let err = Config::load_from(&path).expect_err("should fail validation");
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("page_limit"));
        }
        other => panic!("expected ValidationError, got {:?}", other),
    }
}
