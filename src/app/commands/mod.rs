// ==========================================
// 高校数据录入系统 - 命令层
// ==========================================
// 职责: JSON 字符串进出的命令函数,供前端桥接与命令行复用
// 约定: 成功返回 JSON 字符串,失败返回 {code, message, details}
// ==========================================

mod common;
mod ingest;
mod scientific;
mod tabs;

pub use common::ErrorResponse;
pub use ingest::*;
pub use scientific::*;
pub use tabs::*;
