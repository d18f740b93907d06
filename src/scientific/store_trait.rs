// ==========================================
// 高校数据录入系统 - 科研活动状态持有方 Trait
// ==========================================
// 职责: 手工录入模块依赖的外部集合接口（不包含实现）
// ==========================================

use crate::domain::ScientificRecord;

// ==========================================
// ScientificRecordStore Trait
// ==========================================
// 约定: 同步调用；新增/删除后由持有方重新下发完整列表
pub trait ScientificRecordStore {
    /// 追加一条记录
    fn add_scientific_record(&mut self, record: ScientificRecord);

    /// 按标识删除（不存在时为空操作）
    fn delete_scientific_record(&mut self, id: &str);

    /// 当前完整列表（插入顺序）
    fn list_scientific_records(&self) -> Vec<ScientificRecord>;
}
