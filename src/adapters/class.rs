// ==========================================
// 高校数据录入系统 - 班级导入配置
// ==========================================

use crate::adapters::example_payload;
use crate::domain::{ClassRecord, RecordKind};
use crate::i18n::t;
use crate::importer::{ColumnDescriptor, IngestSchema};

pub fn schema() -> IngestSchema {
    IngestSchema::new(
        RecordKind::Class,
        t("schema.class.title"),
        example_payload(&samples()),
        vec![
            ColumnDescriptor::new("classCode"),
            ColumnDescriptor::new("className"),
            ColumnDescriptor::new("programCode"),
            ColumnDescriptor::new("homeroomTeacher"),
            ColumnDescriptor::new("studentCount"),
        ],
    )
}

fn samples() -> Vec<ClassRecord> {
    vec![ClassRecord {
        id: String::new(),
        class_code: "CS2024-01".to_string(),
        class_name: "计科 2024 级 1 班".to_string(),
        program_code: "080901".to_string(),
        homeroom_teacher: "王芳".to_string(),
        student_count: 45,
        academic_year: String::new(),
    }]
}
