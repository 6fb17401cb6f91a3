use std::fs;

use shiftbook_config::{Config, ConfigError, ConfigManager};
use shiftbook_domain::{NumericInputPolicy, ViewMode};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert_eq!(cfg.storage_key, "timeEntries");
    assert_eq!(cfg.default_view, ViewMode::List);
    assert_eq!(cfg.numeric_input, NumericInputPolicy::Strict);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.set("currency", "EUR").expect("set currency");
    cfg.set("default_view", "calendar").expect("set view");
    cfg.set("numeric_input", "lenient").expect("set policy");

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(manager.config_path().starts_with(dir.path()));
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("fresh")).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn partial_config_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    fs::write(
        manager.config_path(),
        r#"{ "currency": "USD", "numeric_input": "whatever" }"#,
    )
    .expect("write config");

    let loaded = manager.load().expect("load");

    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.numeric_input, NumericInputPolicy::Strict);
    assert!(loaded.ui_color_enabled);
}

#[test]
fn unknown_default_view_loads_as_list() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    fs::write(
        manager.config_path(),
        r#"{ "currency": "GBP", "default_view": "pie" }"#,
    )
    .expect("write config");

    let loaded = manager.load().expect("load");

    assert_eq!(loaded.default_view, ViewMode::List);
    assert_eq!(loaded.currency, "GBP");
}

#[test]
fn set_rejects_unknown_keys_and_bad_values() {
    let mut cfg = Config::default();

    assert!(matches!(
        cfg.set("theme", "dark"),
        Err(ConfigError::UnknownKey(_))
    ));
    assert!(matches!(
        cfg.set("default_view", "pie"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        cfg.set("ui_color_enabled", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert_eq!(cfg, Config::default());
}

#[test]
fn data_dir_defaults_under_base() {
    let dir = tempdir().expect("tempdir");
    let mut cfg = Config::default();
    assert_eq!(cfg.resolve_data_dir(dir.path()), dir.path().join("data"));

    cfg.set("data_dir", "/srv/shifts").expect("set data dir");
    assert_eq!(
        cfg.resolve_data_dir(dir.path()),
        std::path::PathBuf::from("/srv/shifts")
    );
    assert_eq!(cfg.get("data_dir").expect("get"), "/srv/shifts");
}
