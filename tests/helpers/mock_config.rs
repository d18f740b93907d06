// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use academic_data_entry::config::{ConfigError, ConfigResult, EntryConfigReader};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub current_academic_year: String,
    pub is_locked: bool,
    pub assistant_url: Option<String>,
    pub locale: String,
    /// 为 true 时锁定标记读取失败（模拟配置值损坏）
    pub corrupt_lock_flag: bool,
}

impl MockConfig {
    /// 创建默认配置
    pub fn default() -> Self {
        Self {
            current_academic_year: "2024-2025".to_string(),
            is_locked: false,
            assistant_url: Some("https://assistant.example.com/chat".to_string()),
            locale: "zh-CN".to_string(),
            corrupt_lock_flag: false,
        }
    }

    /// 已锁定配置
    pub fn locked() -> Self {
        let mut config = Self::default();
        config.is_locked = true;
        config
    }

    pub fn with_year(year: &str) -> Self {
        let mut config = Self::default();
        config.current_academic_year = year.to_string();
        config
    }
}

impl EntryConfigReader for MockConfig {
    fn get_current_academic_year(&self) -> ConfigResult<String> {
        Ok(self.current_academic_year.clone())
    }

    fn get_is_locked(&self) -> ConfigResult<bool> {
        if self.corrupt_lock_flag {
            return Err(ConfigError::ValueError {
                key: "is_locked".to_string(),
                value: "maybe".to_string(),
                message: "应为 true/false".to_string(),
            });
        }
        Ok(self.is_locked)
    }

    fn get_assistant_url(&self) -> ConfigResult<Option<String>> {
        Ok(self.assistant_url.clone())
    }

    fn get_locale(&self) -> ConfigResult<String> {
        Ok(self.locale.clone())
    }
}
