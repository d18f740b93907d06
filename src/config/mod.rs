// ==========================================
// 高校数据录入系统 - 配置层
// ==========================================
// 职责: 系统配置管理（学年、锁定、助手链接、语言）
// 存储: JSON 键值配置文件
// ==========================================

pub mod config_manager;
pub mod context;
pub mod entry_config_trait;
pub mod error;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use context::{academic_year_for, is_valid_academic_year, ModuleContext};
pub use entry_config_trait::EntryConfigReader;
pub use error::{ConfigError, ConfigResult};
