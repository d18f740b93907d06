// ==========================================
// 高校数据录入系统 - 暂存记录
// ==========================================
// 用途: JSON 粘贴导入的中间产物（解析 → 归一化 → 预览 → 提交）
// 生命周期: 仅在一次 粘贴-预览-提交 周期内
// ==========================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 系统标识字段名
pub const ID_FIELD: &str = "id";

/// 学年标签字段名
pub const ACADEMIC_YEAR_FIELD: &str = "academicYear";

// ==========================================
// StagedRecord - 暂存记录
// ==========================================
// 扁平序列化: {"id": ..., "academicYear": ..., <粘贴字段>}
// fields 中不含 id / academicYear（由归一化剥离）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedRecord {
    pub id: String,
    pub academic_year: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StagedRecord {
    /// 读取字段值（含 id / academicYear）,缺失返回 Null
    pub fn value_of(&self, key: &str) -> Value {
        match key {
            ID_FIELD => Value::String(self.id.clone()),
            ACADEMIC_YEAR_FIELD => Value::String(self.academic_year.clone()),
            _ => self.fields.get(key).cloned().unwrap_or(Value::Null),
        }
    }

    /// 转换为领域强类型记录
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::to_value(self).and_then(serde_json::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> StagedRecord {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!("信息工程学院"));
        fields.insert("count".to_string(), json!(12));
        StagedRecord {
            id: "R1".to_string(),
            academic_year: "2024-2025".to_string(),
            fields,
        }
    }

    #[test]
    fn test_serialize_flat() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["id"], "R1");
        assert_eq!(value["academicYear"], "2024-2025");
        assert_eq!(value["name"], "信息工程学院");
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn test_value_of_missing_is_null() {
        let record = sample();
        assert_eq!(record.value_of("academicYear"), json!("2024-2025"));
        assert_eq!(record.value_of("count"), json!(12));
        assert_eq!(record.value_of("absent"), Value::Null);
    }
}
