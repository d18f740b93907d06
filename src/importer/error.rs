// ==========================================
// 高校数据录入系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 全部为可恢复错误（界面内联提示,输入保持可编辑）
// ==========================================

use crate::i18n::{t, t_with_args};
use serde_json::Value;
use thiserror::Error;

/// 语法错误细节
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxIssue {
    /// 输入为空或仅含空白
    #[error("输入为空")]
    EmptyInput,
    /// 非法 JSON
    #[error("第 {line} 行第 {column} 列: {detail}")]
    Malformed {
        line: usize,
        column: usize,
        detail: String,
    },
}

/// 格式错误细节（JSON 合法,但无法解析出记录序列）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    /// 根节点为原始值（字符串/数字/布尔/null）
    #[error("根节点应为数组或对象，实际为 {json_type}")]
    PrimitiveRoot { json_type: &'static str },
    /// 序列中某个元素不是对象（position 从 1 开始）
    #[error("第 {position} 个元素应为对象，实际为 {json_type}")]
    NonObjectElement {
        position: usize,
        json_type: &'static str,
    },
}

/// 导入模块错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("JSON 语法错误: {0}")]
    Syntax(SyntaxIssue),

    #[error("数据格式无效: {0}")]
    InvalidFormat(FormatIssue),

    #[error("模块已锁定，导入操作被禁用")]
    Locked,

    #[error("预览行越界: index={index}, len={len}")]
    RowOutOfRange { index: usize, len: usize },
}

impl IngestError {
    /// 错误代码（供命令层/前端区分）
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::Syntax(_) => "SYNTAX_ERROR",
            IngestError::InvalidFormat(_) => "INVALID_FORMAT",
            IngestError::Locked => "LOCKED",
            IngestError::RowOutOfRange { .. } => "INVALID_INPUT",
        }
    }

    /// 面向用户的本地化消息
    pub fn user_message(&self) -> String {
        match self {
            IngestError::Syntax(SyntaxIssue::EmptyInput) => t("ingest.error.empty_input"),
            IngestError::Syntax(SyntaxIssue::Malformed {
                line,
                column,
                detail,
            }) => {
                let line = line.to_string();
                let column = column.to_string();
                t_with_args(
                    "ingest.error.syntax",
                    &[
                        ("line", line.as_str()),
                        ("column", column.as_str()),
                        ("detail", detail.as_str()),
                    ],
                )
            }
            IngestError::InvalidFormat(FormatIssue::PrimitiveRoot { json_type }) => {
                t_with_args("ingest.error.primitive_root", &[("json_type", *json_type)])
            }
            IngestError::InvalidFormat(FormatIssue::NonObjectElement {
                position,
                json_type,
            }) => {
                let position = position.to_string();
                t_with_args(
                    "ingest.error.non_object_element",
                    &[("position", position.as_str()), ("json_type", *json_type)],
                )
            }
            IngestError::Locked => t("ingest.error.locked"),
            IngestError::RowOutOfRange { index, len } => {
                let index = index.to_string();
                let len = len.to_string();
                t_with_args(
                    "ingest.error.row_out_of_range",
                    &[("index", index.as_str()), ("len", len.as_str())],
                )
            }
        }
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Syntax(SyntaxIssue::Malformed {
            line: err.line(),
            column: err.column(),
            detail: err.to_string(),
        })
    }
}

/// JSON 值的类型名（用于错误提示）
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result 类型别名
pub type IngestResult<T> = Result<T, IngestError>;
