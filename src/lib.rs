// ==========================================
// 高校数据录入系统 - 核心库
// ==========================================
// 系统定位: 行政数据仓库的录入前端核心
// 能力: 六个领域的 JSON 粘贴批量导入 + 科研活动手工录入
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与枚举
pub mod domain;

// 导入层 - 通用 JSON 导入组件
pub mod importer;

// 适配层 - 各领域导入模式
pub mod adapters;

// 手工录入 - 科研活动
pub mod scientific;

// 状态持有层 - 内存记录集合
pub mod repository;

// 配置层 - 学年/锁定/助手链接/语言
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 标签页容器与命令
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{RecordKind, ScientificRecord, ScientificType, StagedRecord};
pub use importer::{IngestError, IngestSchema, IngestionWidget, PreviewTable};
pub use scientific::{ScientificFormError, ScientificModule};
pub use config::{ConfigManager, ModuleContext};
pub use api::{ApiError, EntryApi};
pub use app::{AppState, TabContainer};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "高校数据录入系统";
