use crate::config::{StorageConfig, constants::LOG_FILE_PATH};

use super::*;

#[test]
fn test_load_configuration() {
    let config = load_configuration("./testdata/config.toml").expect("failed to load config");

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("debug"));
    let log_filters = log.filters.as_deref().unwrap_or_default();
    assert_eq!(log_filters.len(), 1);
    assert_eq!(log_filters[0].module.as_deref(), Some("backend"));

    let log_file = &log.file;
    assert_eq!(log_file.path, "/var/logs/prattle.log");
    assert_eq!(log_file.append, true);

    let backend = config.backend;
    assert_eq!(backend.endpoint, "https://chat.example.com/api/chat");
    assert_eq!(backend.timeout_secs, Some(60));

    let storage = &config.storage;
    match storage {
        StorageConfig::Sqlite(sqlite) => {
            assert_eq!(sqlite.path.as_deref(), Some("/var/lib/prattle/chat.db"));
        }
    }
}

#[test]
fn test_load_configuration_with_some_default_fields() {
    let config =
        load_configuration("./testdata/config_with_default.toml").expect("failed to load config");

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("info"));
    assert_eq!(log.file.path, LOG_FILE_PATH);

    let backend = &config.backend;
    assert_eq!(backend.endpoint, crate::config::constants::DEFAULT_ENDPOINT);
    assert_eq!(backend.timeout_secs, None);
}

#[test]
fn test_resolve_path() {
    let ret = resolve_path("$TEST_PATH/${USER_PATH}/config.toml").expect("failed to resolve path");
    assert_eq!(ret, "//config.toml");

    let dir = "/tmp/test";
    let user_path = "user_path";
    unsafe {
        std::env::set_var("TEST_PATH", dir);
        std::env::set_var("USER_PATH", user_path);
    }
    let ret = resolve_path("$TEST_PATH/${USER_PATH}/config.toml").expect("failed to resolve path");
    assert_eq!(ret, format!("{dir}/{user_path}/config.toml"));
}
