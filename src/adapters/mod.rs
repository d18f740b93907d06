// ==========================================
// 高校数据录入系统 - 领域适配层
// ==========================================
// 职责: 为六个批量导入领域提供导入模式（标题 + 示例负载 + 预览列）
// 说明: 纯配置,不含状态；提交语义由状态持有方决定
// ==========================================

pub mod admission;
pub mod business;
pub mod class;
pub mod department;
pub mod personnel;
pub mod training;

use crate::domain::RecordKind;
use crate::importer::IngestSchema;
use serde::Serialize;

/// 按领域取导入模式（科研活动为手工录入,返回 None）
pub fn schema_for(kind: RecordKind) -> Option<IngestSchema> {
    match kind {
        RecordKind::Scientific => None,
        RecordKind::Training => Some(training::schema()),
        RecordKind::Personnel => Some(personnel::schema()),
        RecordKind::Admission => Some(admission::schema()),
        RecordKind::Class => Some(class::schema()),
        RecordKind::Department => Some(department::schema()),
        RecordKind::Business => Some(business::schema()),
    }
}

/// 全部导入模式（标签页顺序）
pub fn all_schemas() -> Vec<IngestSchema> {
    RecordKind::INGESTION
        .iter()
        .filter_map(|kind| schema_for(*kind))
        .collect()
}

/// 示例负载: 样例记录数组的格式化 JSON
pub(crate) fn example_payload<T: Serialize>(samples: &[T]) -> String {
    match serde_json::to_string_pretty(samples) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "示例负载序列化失败");
            "[]".to_string()
        }
    }
}
