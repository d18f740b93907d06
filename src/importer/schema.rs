// ==========================================
// 高校数据录入系统 - 导入模式
// ==========================================
// 职责: 标题 + 示例负载 + 有序列描述
// 说明: 示例负载同时用作输入框占位符与提示词模板
// ==========================================

use crate::domain::RecordKind;
use crate::importer::column::ColumnDescriptor;

// ==========================================
// IngestSchema - 导入模式
// ==========================================
#[derive(Debug, Clone)]
pub struct IngestSchema {
    pub kind: RecordKind,
    pub title: String,
    pub example: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl IngestSchema {
    pub fn new(
        kind: RecordKind,
        title: impl Into<String>,
        example: impl Into<String>,
        columns: Vec<ColumnDescriptor>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            example: example.into(),
            columns,
        }
    }

    /// 列字段键（按展示顺序）
    pub fn field_keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }

    /// 字段清单: `key (label), key (label), ...`
    pub fn field_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| format!("{} ({})", c.key, c.label))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
