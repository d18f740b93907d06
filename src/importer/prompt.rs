// ==========================================
// 高校数据录入系统 - 生成提示词拼装
// ==========================================
// 职责: 固定模板 + 字段清单 + 示例负载,供复制到外部 AI 助手
// 红线: 纯字符串模板,不做解析与校验
// ==========================================

use crate::i18n::t_with_args;
use crate::importer::schema::IngestSchema;

/// 拼装生成提示词
pub fn build_prompt(schema: &IngestSchema) -> String {
    let fields = schema.field_list();
    t_with_args(
        "prompt.template",
        &[
            ("title", schema.title.as_str()),
            ("fields", fields.as_str()),
            ("example", schema.example.trim()),
        ],
    )
}
