// ==========================================
// 高校数据录入系统 - 科研活动手工录入
// ==========================================

pub mod draft;
pub mod error;
pub mod module;
pub mod store_trait;

pub use draft::{DraftPatch, ScientificDraft};
pub use error::{RequiredField, ScientificFormError, ScientificResult};
pub use module::ScientificModule;
pub use store_trait::ScientificRecordStore;
