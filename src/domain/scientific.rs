// ==========================================
// 高校数据录入系统 - 科研活动记录
// ==========================================
// 用途: 唯一支持逐条手工录入/删除的记录类型
// ==========================================

use crate::domain::types::ScientificType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ScientificRecord - 科研活动
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScientificRecord {
    pub id: String,
    pub lecturer_name: String, // 讲师姓名
    pub title: String,         // 成果/活动名称
    #[serde(rename = "type")]
    pub activity_type: ScientificType,
    pub support_requested: bool, // 是否申请经费支持
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>, // 证明材料链接
    pub academic_year: String,
    pub created_at: DateTime<Utc>,
}

// ==========================================
// ScientificSummary - 汇总计数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScientificSummary {
    pub total: usize,
    pub support_requested: usize,
}

impl ScientificSummary {
    /// 每次直接对全量列表聚合,不缓存
    pub fn from_records(records: &[ScientificRecord]) -> Self {
        Self {
            total: records.len(),
            support_requested: records.iter().filter(|r| r.support_requested).count(),
        }
    }
}
