// ==========================================
// 高校数据录入系统 - API 层
// ==========================================
// 职责: 组合各模块,提供面向命令层的业务接口
// ==========================================

pub mod entry_api;
pub mod error;

pub use entry_api::{EntryApi, NoticeView, PasteResult};
pub use error::{ApiError, ApiResult};
