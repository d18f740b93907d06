// ==========================================
// 高校数据录入系统 - 科研活动表单错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 表单校验失败为本地可恢复错误,草稿保持不变
// ==========================================

use crate::i18n::{t, t_with_args};
use thiserror::Error;

/// 必填字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    LecturerName,
    Title,
}

impl RequiredField {
    pub fn key(&self) -> &'static str {
        match self {
            RequiredField::LecturerName => "lecturerName",
            RequiredField::Title => "title",
        }
    }

    pub fn label(&self) -> String {
        t(&format!("column.{}", self.key()))
    }
}

/// 科研活动表单错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScientificFormError {
    #[error("必填字段为空: {fields:?}")]
    MissingRequired { fields: Vec<RequiredField> },

    #[error("模块已锁定，新增与删除被禁用")]
    Locked,
}

impl ScientificFormError {
    pub fn code(&self) -> &'static str {
        match self {
            ScientificFormError::MissingRequired { .. } => "VALIDATION_ERROR",
            ScientificFormError::Locked => "LOCKED",
        }
    }

    /// 面向用户的本地化消息
    pub fn user_message(&self) -> String {
        match self {
            ScientificFormError::MissingRequired { fields } => {
                let labels = fields
                    .iter()
                    .map(|f| f.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                t_with_args(
                    "scientific.error.missing_required",
                    &[("fields", labels.as_str())],
                )
            }
            ScientificFormError::Locked => t("scientific.error.locked"),
        }
    }
}

/// Result 类型别名
pub type ScientificResult<T> = Result<T, ScientificFormError>;
