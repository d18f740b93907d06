// ==========================================
// 高校数据录入系统 - 人事导入配置
// ==========================================

use crate::adapters::example_payload;
use crate::domain::{PersonnelRecord, RecordKind};
use crate::i18n::t;
use crate::importer::column::render_date;
use crate::importer::{ColumnDescriptor, IngestSchema};
use chrono::NaiveDate;

pub fn schema() -> IngestSchema {
    IngestSchema::new(
        RecordKind::Personnel,
        t("schema.personnel.title"),
        example_payload(&samples()),
        columns(),
    )
}

fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("staffCode"),
        ColumnDescriptor::new("fullName"),
        ColumnDescriptor::new("department"),
        ColumnDescriptor::new("position"),
        ColumnDescriptor::new("academicTitle"),
        ColumnDescriptor::new("degree"),
        ColumnDescriptor::new("startDate").render_with(render_date),
    ]
}

fn samples() -> Vec<PersonnelRecord> {
    vec![
        PersonnelRecord {
            id: String::new(),
            staff_code: "GV0123".to_string(),
            full_name: "张明".to_string(),
            department: "软件工程系".to_string(),
            position: "系主任".to_string(),
            academic_title: Some("副教授".to_string()),
            degree: "博士".to_string(),
            start_date: NaiveDate::from_ymd_opt(2012, 9, 1).unwrap_or_default(),
            academic_year: String::new(),
        },
        PersonnelRecord {
            id: String::new(),
            staff_code: "GV0456".to_string(),
            full_name: "李华".to_string(),
            department: "网络工程系".to_string(),
            position: "讲师".to_string(),
            academic_title: None,
            degree: "硕士".to_string(),
            start_date: NaiveDate::from_ymd_opt(2019, 2, 15).unwrap_or_default(),
            academic_year: String::new(),
        },
    ]
}
