// ==========================================
// 高校数据录入系统 - 记录归一化
// ==========================================
// 职责: 分配缺失标识 + 覆写学年标签
// 红线: 学年始终取当前上下文,不信任粘贴内容中的学年
// ==========================================

use crate::domain::staged::{StagedRecord, ACADEMIC_YEAR_FIELD, ID_FIELD};
use crate::importer::ingest_trait::IdGenerator;
use serde_json::{Map, Value};

// ==========================================
// RecordNormalizer - 归一化器
// ==========================================
pub struct RecordNormalizer<'a> {
    academic_year: &'a str,
    id_generator: &'a dyn IdGenerator,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(academic_year: &'a str, id_generator: &'a dyn IdGenerator) -> Self {
        Self {
            academic_year,
            id_generator,
        }
    }

    /// 归一化单条记录
    pub fn normalize(&self, mut fields: Map<String, Value>) -> StagedRecord {
        let id = fields
            .remove(ID_FIELD)
            .and_then(existing_id)
            .unwrap_or_else(|| self.id_generator.next_id());

        if let Some(stale) = fields.remove(ACADEMIC_YEAR_FIELD) {
            if stale.as_str() != Some(self.academic_year) {
                tracing::debug!(record_id = %id, stale_year = %stale, "覆写粘贴内容中的学年标签");
            }
        }

        StagedRecord {
            id,
            academic_year: self.academic_year.to_string(),
            fields,
        }
    }

    /// 归一化整批记录（保持顺序）
    pub fn normalize_all(&self, records: Vec<Map<String, Value>>) -> Vec<StagedRecord> {
        records.into_iter().map(|r| self.normalize(r)).collect()
    }
}

/// 粘贴内容中已有的标识: 非空字符串或数字
fn existing_id(value: Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SeqIds(AtomicUsize);

    impl IdGenerator for SeqIds {
        fn next_id(&self) -> String {
            format!("GEN-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_id_is_generated() {
        let ids = SeqIds(AtomicUsize::new(0));
        let normalizer = RecordNormalizer::new("2024-2025", &ids);

        let record = normalizer.normalize(object(json!({"name": "A"})));
        assert_eq!(record.id, "GEN-1");
        assert_eq!(record.academic_year, "2024-2025");
        assert_eq!(record.fields["name"], "A");
    }

    #[test]
    fn test_existing_id_is_kept() {
        let ids = SeqIds(AtomicUsize::new(0));
        let normalizer = RecordNormalizer::new("2024-2025", &ids);

        assert_eq!(normalizer.normalize(object(json!({"id": "X-9"}))).id, "X-9");
        assert_eq!(normalizer.normalize(object(json!({"id": 42}))).id, "42");
        // 空白/null 视为缺失
        assert_eq!(normalizer.normalize(object(json!({"id": "  "}))).id, "GEN-1");
        assert_eq!(normalizer.normalize(object(json!({"id": null}))).id, "GEN-2");
    }

    #[test]
    fn test_academic_year_always_overwritten() {
        let ids = SeqIds(AtomicUsize::new(0));
        let normalizer = RecordNormalizer::new("2024-2025", &ids);

        let record = normalizer.normalize(object(json!({"academicYear": "1999-2000", "x": 1})));
        assert_eq!(record.academic_year, "2024-2025");
        assert!(!record.fields.contains_key("academicYear"));
        assert!(!record.fields.contains_key("id"));
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let ids = SeqIds(AtomicUsize::new(0));
        let normalizer = RecordNormalizer::new("2024-2025", &ids);

        let records = normalizer.normalize_all(vec![
            object(json!({"n": 1})),
            object(json!({"n": 2})),
            object(json!({"n": 3})),
        ]);
        let order: Vec<i64> = records
            .iter()
            .map(|r| r.fields["n"].as_i64().unwrap())
            .collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}
