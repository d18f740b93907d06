// ==========================================
// 高校数据录入系统 - 企业合作导入配置
// ==========================================
// 预览列: 金额千分位,是否有效显示为是/否,网址去协议前缀
// ==========================================

use crate::adapters::example_payload;
use crate::domain::{BusinessPartnership, RecordKind};
use crate::i18n::t;
use crate::importer::column::{render_date, render_grouped_number, render_link, render_yes_no};
use crate::importer::{ColumnDescriptor, IngestSchema};
use chrono::NaiveDate;

pub fn schema() -> IngestSchema {
    IngestSchema::new(
        RecordKind::Business,
        t("schema.business.title"),
        example_payload(&samples()),
        columns(),
    )
}

fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("partnerName"),
        ColumnDescriptor::new("field"),
        ColumnDescriptor::new("agreementDate").render_with(render_date),
        ColumnDescriptor::new("contractValue").render_with(render_grouped_number),
        ColumnDescriptor::new("active").render_with(render_yes_no),
        ColumnDescriptor::new("website").render_with(render_link),
    ]
}

fn samples() -> Vec<BusinessPartnership> {
    vec![
        BusinessPartnership {
            id: String::new(),
            partner_name: "华信软件有限公司".to_string(),
            field: "实习与就业".to_string(),
            agreement_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap_or_default(),
            contract_value: 500000.0,
            active: true,
            website: Some("https://huaxin.example.com".to_string()),
            academic_year: String::new(),
        },
        BusinessPartnership {
            id: String::new(),
            partner_name: "东方检测中心".to_string(),
            field: "联合实验室".to_string(),
            agreement_date: NaiveDate::from_ymd_opt(2023, 11, 2).unwrap_or_default(),
            contract_value: 1250000.0,
            active: false,
            website: None,
            academic_year: String::new(),
        },
    ]
}
