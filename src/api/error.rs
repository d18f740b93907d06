// ==========================================
// 高校数据录入系统 - API层错误类型
// ==========================================
// 职责: 汇总各模块错误,转换为带稳定错误代码的用户可读消息
// ==========================================

use crate::config::ConfigError;
use crate::importer::{FormatIssue, IngestError, SyntaxIssue};
use crate::scientific::ScientificFormError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 锁定
    // ==========================================
    #[error("{0}")]
    Locked(String),

    // ==========================================
    // 粘贴数据错误
    // ==========================================
    #[error("{message}")]
    SyntaxError {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("{message}")]
    InvalidFormat {
        message: String,
        position: Option<usize>,
    },

    // ==========================================
    // 表单/输入错误
    // ==========================================
    #[error("{message}")]
    ValidationError {
        message: String,
        fields: Vec<String>,
    },

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 IngestError 转换
// ==========================================
impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        let message = err.user_message();
        match err {
            IngestError::Locked => ApiError::Locked(message),
            IngestError::Syntax(SyntaxIssue::EmptyInput) => ApiError::SyntaxError {
                message,
                line: None,
                column: None,
            },
            IngestError::Syntax(SyntaxIssue::Malformed { line, column, .. }) => {
                ApiError::SyntaxError {
                    message,
                    line: Some(line),
                    column: Some(column),
                }
            }
            IngestError::InvalidFormat(FormatIssue::PrimitiveRoot { .. }) => {
                ApiError::InvalidFormat {
                    message,
                    position: None,
                }
            }
            IngestError::InvalidFormat(FormatIssue::NonObjectElement { position, .. }) => {
                ApiError::InvalidFormat {
                    message,
                    position: Some(position),
                }
            }
            IngestError::RowOutOfRange { .. } => ApiError::InvalidInput(message),
        }
    }
}

// ==========================================
// 从 ScientificFormError 转换
// ==========================================
impl From<ScientificFormError> for ApiError {
    fn from(err: ScientificFormError) -> Self {
        let message = err.user_message();
        match err {
            ScientificFormError::Locked => ApiError::Locked(message),
            ScientificFormError::MissingRequired { fields } => ApiError::ValidationError {
                message,
                fields: fields.iter().map(|f| f.key().to_string()).collect(),
            },
        }
    }
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ValueError { .. } => ApiError::InvalidInput(err.to_string()),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

impl ApiError {
    /// 错误代码（前端据此区分处理方式）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Locked(_) => "LOCKED",
            ApiError::SyntaxError { .. } => "SYNTAX_ERROR",
            ApiError::InvalidFormat { .. } => "INVALID_FORMAT",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::InternalError(_) | ApiError::Other(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
