use crate::config::{Config, DEFAULT_ADMIN_WORD};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.port, 3000);
    assert_eq!(config.admin_word, DEFAULT_ADMIN_WORD);
    assert_eq!(config.users_file(), PathBuf::from("data").join("users.json"));
}

#[test]
fn test_users_file_follows_data_dir() {
    let config = Config {
        data_dir: PathBuf::from("/srv/flatgate"),
        users_database: "accounts".to_string(),
        ..Config::default()
    };
    assert_eq!(config.users_file(), PathBuf::from("/srv/flatgate/accounts.json"));
}

#[test]
fn test_debug_redacts_admin_word() {
    let config = Config {
        admin_word: "hunter2".to_string(),
        ..Config::default()
    };
    let printed = format!("{:?}", config);
    assert!(!printed.contains("hunter2"));
    assert!(printed.contains("<redacted>"));
}
