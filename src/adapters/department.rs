// ==========================================
// 高校数据录入系统 - 院系活动导入配置
// ==========================================

use crate::adapters::example_payload;
use crate::domain::{DepartmentActivity, RecordKind};
use crate::i18n::t;
use crate::importer::column::render_date;
use crate::importer::{ColumnDescriptor, IngestSchema};
use chrono::NaiveDate;

pub fn schema() -> IngestSchema {
    IngestSchema::new(
        RecordKind::Department,
        t("schema.department.title"),
        example_payload(&samples()),
        vec![
            ColumnDescriptor::new("department"),
            ColumnDescriptor::new("activityName"),
            ColumnDescriptor::new("date").render_with(render_date),
            ColumnDescriptor::new("participants"),
            ColumnDescriptor::new("description"),
        ],
    )
}

fn samples() -> Vec<DepartmentActivity> {
    vec![
        DepartmentActivity {
            id: String::new(),
            department: "信息工程学院".to_string(),
            activity_name: "新生入学教育".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 9, 10).unwrap_or_default(),
            participants: 420,
            description: Some("校史讲座与专业介绍".to_string()),
            academic_year: String::new(),
        },
        DepartmentActivity {
            id: String::new(),
            department: "经济管理学院".to_string(),
            activity_name: "企业开放日".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 22).unwrap_or_default(),
            participants: 150,
            description: None,
            academic_year: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_description_omitted_from_example() {
        let activities: Vec<serde_json::Value> =
            serde_json::from_str(&schema().example).unwrap();
        assert!(activities[0].get("description").is_some());
        assert!(activities[1].get("description").is_none());
    }
}
