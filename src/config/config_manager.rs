// ==========================================
// 高校数据录入系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写、落盘
// 存储: JSON 文件 (扁平 key-value)
// ==========================================

use crate::config::context::{academic_year_for, is_valid_academic_year};
use crate::config::entry_config_trait::EntryConfigReader;
use crate::config::error::{ConfigError, ConfigResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 默认界面语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    path: Option<PathBuf>,
    values: Mutex<BTreeMap<String, String>>,
}

impl ConfigManager {
    /// 从配置文件创建 ConfigManager
    ///
    /// # 参数
    /// - path: 配置文件路径（不存在时使用全部默认值）
    pub fn new(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            parse_config_map(&raw)?
        } else {
            tracing::info!(path = %path.display(), "配置文件不存在，使用默认配置");
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            values: Mutex::new(values),
        })
    }

    /// 纯内存配置（不落盘）
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: Mutex::new(BTreeMap::new()),
        }
    }

    fn lock_values(&self) -> ConfigResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.values
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值（已去除首尾空白,空串视为未配置）
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let values = self.lock_values()?;
        Ok(values
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }

    /// 读取配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        self.get_config_value(key)
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> ConfigResult<String> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 写入配置值（仅内存,需调用 save 落盘）
    pub fn set_config_value(&self, key: &str, value: &str) -> ConfigResult<()> {
        let mut values = self.lock_values()?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// 获取所有配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let values = self.lock_values()?;
        Ok(serde_json::to_string(&*values)?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> ConfigResult<usize> {
        let restored = parse_config_map(snapshot_json)?;
        let mut values = self.lock_values()?;
        let count = restored.len();
        values.extend(restored);
        Ok(count)
    }

    /// 落盘（内存配置直接返回）
    pub fn save(&self) -> ConfigResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let content = {
            let values = self.lock_values()?;
            serde_json::to_string_pretty(&*values)?
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), "配置已保存");
        Ok(())
    }
}

/// 解析配置文件: 值可以是字符串、数字或布尔,统一按字符串保存
fn parse_config_map(raw: &str) -> ConfigResult<BTreeMap<String, String>> {
    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let value: serde_json::Value = serde_json::from_str(raw)?;
    let object = value
        .as_object()
        .ok_or_else(|| ConfigError::FormatError("配置文件根节点必须是对象".to_string()))?;

    let mut map = BTreeMap::new();
    for (key, v) in object {
        let text = match v {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => continue,
            other => other.to_string(),
        };
        map.insert(key.clone(), text);
    }
    Ok(map)
}

/// 获取默认配置文件路径
///
/// 优先级: 环境变量 ACADEMIC_ENTRY_CONFIG → 用户配置目录 → 当前目录
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("ACADEMIC_ENTRY_CONFIG") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("academic-data-entry").join("config.json"),
        None => PathBuf::from("./academic_entry_config.json"),
    }
}

// ==========================================
// EntryConfigReader Trait 实现
// ==========================================
impl EntryConfigReader for ConfigManager {
    fn get_current_academic_year(&self) -> ConfigResult<String> {
        let fallback = academic_year_for(chrono::Local::now().date_naive());
        match self.get_config_value(config_keys::CURRENT_ACADEMIC_YEAR)? {
            Some(year) if is_valid_academic_year(&year) => Ok(year),
            Some(year) => {
                tracing::warn!(
                    config_key = config_keys::CURRENT_ACADEMIC_YEAR,
                    raw_value = %year,
                    fallback = %fallback,
                    "学年配置格式错误，按当前日期推算"
                );
                Ok(fallback)
            }
            None => Ok(fallback),
        }
    }

    /// 无法识别的值按已锁定处理
    fn get_is_locked(&self) -> ConfigResult<bool> {
        let value = self.get_config_or_default(config_keys::IS_LOCKED, "false")?;
        match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => {
                tracing::warn!(
                    config_key = config_keys::IS_LOCKED,
                    raw_value = %value,
                    fallback = true,
                    "锁定标记格式错误，按已锁定处理"
                );
                Ok(true)
            }
        }
    }

    fn get_assistant_url(&self) -> ConfigResult<Option<String>> {
        self.get_config_value(config_keys::ASSISTANT_URL)
    }

    fn get_locale(&self) -> ConfigResult<String> {
        self.get_config_or_default(config_keys::LOCALE, DEFAULT_LOCALE)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 学年与锁定
    pub const CURRENT_ACADEMIC_YEAR: &str = "current_academic_year";
    pub const IS_LOCKED: &str = "is_locked";

    // 外部 AI 助手
    pub const ASSISTANT_URL: &str = "assistant_url";

    // 界面语言
    pub const LOCALE: &str = "locale";
}
