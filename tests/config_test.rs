// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置读取、默认值、落盘与上下文组装
// ==========================================

mod helpers;

use academic_data_entry::config::{
    academic_year_for, config_keys, is_valid_academic_year, ConfigError, ConfigManager,
    EntryConfigReader, ModuleContext,
};
use chrono::NaiveDate;
use helpers::app_fixture::create_test_config;
use helpers::mock_config::MockConfig;

#[test]
fn test_config_manager_creation() {
    let (_temp_dir, path) = create_test_config(&[]).expect("Failed to create test config");

    let config_manager = ConfigManager::new(&path);
    assert!(
        config_manager.is_ok(),
        "ConfigManager should be created successfully"
    );
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigManager::new(dir.path().join("absent.json")).unwrap();

    assert!(!config.get_is_locked().unwrap());
    assert_eq!(config.get_assistant_url().unwrap(), None);
    assert_eq!(config.get_locale().unwrap(), "zh-CN");
    assert!(is_valid_academic_year(
        &config.get_current_academic_year().unwrap()
    ));
}

#[test]
fn test_read_all_keys() {
    let (_temp_dir, path) = create_test_config(&[
        (config_keys::CURRENT_ACADEMIC_YEAR, "2023-2024"),
        (config_keys::IS_LOCKED, "TRUE"),
        (config_keys::ASSISTANT_URL, " https://chat.example.com "),
        (config_keys::LOCALE, "en"),
    ])
    .unwrap();

    let config = ConfigManager::new(&path).unwrap();
    assert_eq!(config.get_current_academic_year().unwrap(), "2023-2024");
    assert!(config.get_is_locked().unwrap());
    assert_eq!(
        config.get_assistant_url().unwrap().as_deref(),
        Some("https://chat.example.com")
    );
    assert_eq!(config.get_locale().unwrap(), "en");

    assert_eq!(
        config.load_module_context().unwrap(),
        ModuleContext::new("2023-2024", true)
    );
}

#[test]
fn test_non_string_values_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"is_locked": false, "assistant_url": null}"#).unwrap();

    let config = ConfigManager::new(&path).unwrap();
    assert!(!config.get_is_locked().unwrap());
    assert_eq!(config.get_assistant_url().unwrap(), None);
}

#[test]
fn test_corrupt_lock_flag_falls_back_to_locked() {
    let (_temp_dir, path) = create_test_config(&[
        (config_keys::CURRENT_ACADEMIC_YEAR, "2024-2025"),
        (config_keys::IS_LOCKED, "maybe"),
    ])
    .unwrap();
    let config = ConfigManager::new(&path).unwrap();

    assert!(config.get_is_locked().unwrap());
    assert_eq!(
        config.load_module_context().unwrap(),
        ModuleContext::new("2024-2025", true)
    );
}

#[test]
fn test_malformed_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(
        ConfigManager::new(&path),
        Err(ConfigError::FormatError(_))
    ));

    std::fs::write(&path, "{not json").unwrap();
    assert!(ConfigManager::new(&path).is_err());
}

#[test]
fn test_save_and_reload_round_trip() {
    let (_temp_dir, path) = create_test_config(&[(config_keys::LOCALE, "en")]).unwrap();

    let config = ConfigManager::new(&path).unwrap();
    config
        .set_config_value(config_keys::CURRENT_ACADEMIC_YEAR, "2026-2027")
        .unwrap();
    config.set_config_value(config_keys::IS_LOCKED, "true").unwrap();
    config.save().unwrap();

    let reloaded = ConfigManager::new(&path).unwrap();
    assert_eq!(
        reloaded.load_module_context().unwrap(),
        ModuleContext::new("2026-2027", true)
    );
    // 未改动的键保留
    assert_eq!(reloaded.get_locale().unwrap(), "en");
}

#[test]
fn test_academic_year_derivation() {
    let july = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
    let august = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();

    assert_eq!(academic_year_for(july), "2024-2025");
    assert_eq!(academic_year_for(august), "2025-2026");

    assert!(is_valid_academic_year("2024-2025"));
    assert!(!is_valid_academic_year("2024-2026"));
    assert!(!is_valid_academic_year("2024"));
}

#[test]
fn test_mock_config_context() {
    let context = MockConfig::locked().load_module_context().unwrap();
    assert!(context.is_locked);
    assert_eq!(context.current_academic_year, "2024-2025");

    let context = MockConfig::with_year("2030-2031").load_module_context().unwrap();
    assert!(!context.is_locked);
    assert_eq!(context.current_academic_year, "2030-2031");
}
