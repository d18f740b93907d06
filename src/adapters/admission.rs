// ==========================================
// 高校数据录入系统 - 招生导入配置
// ==========================================

use crate::adapters::example_payload;
use crate::domain::{AdmissionRecord, RecordKind};
use crate::i18n::t;
use crate::importer::column::render_grouped_number;
use crate::importer::{ColumnDescriptor, IngestSchema};

pub fn schema() -> IngestSchema {
    IngestSchema::new(
        RecordKind::Admission,
        t("schema.admission.title"),
        example_payload(&samples()),
        columns(),
    )
}

fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("programCode"),
        ColumnDescriptor::new("programName"),
        ColumnDescriptor::new("quota").render_with(render_grouped_number),
        ColumnDescriptor::new("applicants").render_with(render_grouped_number),
        ColumnDescriptor::new("admitted").render_with(render_grouped_number),
        ColumnDescriptor::new("cutoffScore"),
    ]
}

fn samples() -> Vec<AdmissionRecord> {
    vec![
        AdmissionRecord {
            id: String::new(),
            program_code: "080901".to_string(),
            program_name: "计算机科学与技术".to_string(),
            quota: 300,
            applicants: 2140,
            admitted: 312,
            cutoff_score: 25.75,
            academic_year: String::new(),
        },
        AdmissionRecord {
            id: String::new(),
            program_code: "120203".to_string(),
            program_name: "会计学".to_string(),
            quota: 200,
            applicants: 980,
            admitted: 195,
            cutoff_score: 23.5,
            academic_year: String::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_deserializes_into_typed_records() {
        let rows: Vec<AdmissionRecord> = serde_json::from_str(&schema().example).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].applicants, 2140);
    }
}
