use crate::api::error::ApiError;
use crate::domain::RecordKind;
use serde::{Deserialize, Serialize};

// ==========================================
// 公共工具：错误映射、参数解析、结果序列化
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// 将ApiError转换为JSON字符串
pub(super) fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: err.code().to_string(),
        message: err.to_string(),
        details: match &err {
            ApiError::SyntaxError {
                line: Some(line),
                column: Some(column),
                ..
            } => Some(serde_json::json!({ "line": line, "column": column })),
            ApiError::InvalidFormat {
                position: Some(position),
                ..
            } => Some(serde_json::json!({ "position": position })),
            ApiError::ValidationError { fields, .. } => {
                Some(serde_json::json!({ "fields": fields }))
            }
            _ => None,
        },
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

/// 解析标签页键
pub(super) fn parse_kind(tab: &str) -> Result<RecordKind, String> {
    tab.parse::<RecordKind>()
        .map_err(|e| map_api_error(ApiError::InvalidInput(e)))
}

/// 序列化命令结果
pub(super) fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("序列化失败: {}", e))
}
