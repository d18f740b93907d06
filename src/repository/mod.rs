// ==========================================
// 高校数据录入系统 - 状态持有层
// ==========================================
// 职责: 承接手工新增/删除与批量导入的记录集合
// 红线: 不含导入逻辑,不校验字段
// ==========================================

pub mod in_memory_store;

pub use in_memory_store::InMemoryRecordStore;
