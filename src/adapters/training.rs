// ==========================================
// 高校数据录入系统 - 培训项目导入配置
// ==========================================

use crate::adapters::example_payload;
use crate::domain::{RecordKind, TrainingProgram};
use crate::i18n::t;
use crate::importer::column::render_grouped_number;
use crate::importer::{ColumnDescriptor, IngestSchema};

pub fn schema() -> IngestSchema {
    IngestSchema::new(
        RecordKind::Training,
        t("schema.training.title"),
        example_payload(&samples()),
        columns(),
    )
}

fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("code"),
        ColumnDescriptor::new("name"),
        ColumnDescriptor::new("level"),
        ColumnDescriptor::new("faculty"),
        ColumnDescriptor::new("durationYears"),
        ColumnDescriptor::new("enrolled").render_with(render_grouped_number),
    ]
}

fn samples() -> Vec<TrainingProgram> {
    vec![
        TrainingProgram {
            id: String::new(),
            code: "080901".to_string(),
            name: "计算机科学与技术".to_string(),
            level: "本科".to_string(),
            faculty: "信息工程学院".to_string(),
            duration_years: 4.0,
            enrolled: 1250,
            academic_year: String::new(),
        },
        TrainingProgram {
            id: String::new(),
            code: "085405".to_string(),
            name: "软件工程".to_string(),
            level: "硕士".to_string(),
            faculty: "信息工程学院".to_string(),
            duration_years: 1.5,
            enrolled: 86,
            academic_year: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_deserializes_into_typed_records() {
        let programs: Vec<TrainingProgram> = serde_json::from_str(&schema().example).unwrap();
        assert_eq!(programs.len(), 2);
        assert_eq!(programs[1].duration_years, 1.5);
    }
}
