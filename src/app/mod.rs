// ==========================================
// 高校数据录入系统 - 应用层
// ==========================================
// 职责: 标签页容器、应用状态、命令函数
// ==========================================

pub mod commands;
pub mod side_effects;
pub mod state;
pub mod tab_container;

// 重导出
pub use side_effects::{SystemLinkOpener, UnavailableClipboard};
pub use state::AppState;
pub use tab_container::{LoggingImportSink, TabContainer, TabInfo};
