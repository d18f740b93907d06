// ==========================================
// 高校数据录入系统 - 内存状态持有方
// ==========================================
// 职责: 外部协作方接口的参考实现（CLI 与测试使用）
// 语义: 批量导入只追加,不去重不合并；删除不存在的标识为空操作
// ==========================================

use crate::domain::{RecordKind, ScientificRecord, StagedRecord};
use crate::importer::ImportSink;
use crate::scientific::ScientificRecordStore;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::{debug, info};

// ==========================================
// InMemoryRecordStore - 内存记录集合
// ==========================================
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecordStore {
    scientific: Vec<ScientificRecord>,
    batches: BTreeMap<RecordKind, Vec<StagedRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 某领域已提交的记录（提交顺序）
    pub fn records(&self, kind: RecordKind) -> &[StagedRecord] {
        self.batches.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 记录数（科研活动取手工录入列表）
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Scientific => self.scientific.len(),
            _ => self.records(kind).len(),
        }
    }

    /// 按领域强类型读取
    pub fn typed_records<T: DeserializeOwned>(
        &self,
        kind: RecordKind,
    ) -> Result<Vec<T>, serde_json::Error> {
        self.records(kind).iter().map(StagedRecord::to_typed).collect()
    }

    pub fn find_scientific(&self, id: &str) -> Option<&ScientificRecord> {
        self.scientific.iter().find(|r| r.id == id)
    }
}

impl ScientificRecordStore for InMemoryRecordStore {
    fn add_scientific_record(&mut self, record: ScientificRecord) {
        debug!(record_id = %record.id, "追加科研活动记录");
        self.scientific.push(record);
    }

    fn delete_scientific_record(&mut self, id: &str) {
        let before = self.scientific.len();
        self.scientific.retain(|r| r.id != id);
        if self.scientific.len() == before {
            debug!(record_id = %id, "删除目标不存在，忽略");
        }
    }

    fn list_scientific_records(&self) -> Vec<ScientificRecord> {
        self.scientific.clone()
    }
}

impl ImportSink for InMemoryRecordStore {
    fn import_batch(&mut self, kind: RecordKind, records: Vec<StagedRecord>) {
        let count = records.len();
        let collection = self.batches.entry(kind).or_default();
        collection.extend(records);
        info!(kind = %kind, count = count, total = collection.len(), "批次已追加");
    }
}
