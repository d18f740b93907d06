// ==========================================
// 高校数据录入系统 - 科研活动表单草稿
// ==========================================

use crate::domain::ScientificType;
use crate::scientific::error::RequiredField;
use serde::{Deserialize, Serialize};

// ==========================================
// ScientificDraft - 表单草稿
// ==========================================
// 默认值: 类别取第一个,申请经费支持为 true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScientificDraft {
    pub lecturer_name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub activity_type: ScientificType,
    pub support_requested: bool,
    pub link: String,
}

impl Default for ScientificDraft {
    fn default() -> Self {
        Self {
            lecturer_name: String::new(),
            title: String::new(),
            activity_type: ScientificType::default(),
            support_requested: true,
            link: String::new(),
        }
    }
}

impl ScientificDraft {
    /// 去除首尾空白后为空的必填字段
    pub fn missing_required(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.lecturer_name.trim().is_empty() {
            missing.push(RequiredField::LecturerName);
        }
        if self.title.trim().is_empty() {
            missing.push(RequiredField::Title);
        }
        missing
    }

    /// 链接: 空白视为未填写
    pub fn normalized_link(&self) -> Option<String> {
        let link = self.link.trim();
        (!link.is_empty()).then(|| link.to_string())
    }

    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(v) = patch.lecturer_name {
            self.lecturer_name = v;
        }
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.activity_type {
            self.activity_type = v;
        }
        if let Some(v) = patch.support_requested {
            self.support_requested = v;
        }
        if let Some(v) = patch.link {
            self.link = v;
        }
    }
}

/// 草稿局部更新（逐字段输入）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    #[serde(default)]
    pub lecturer_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub activity_type: Option<ScientificType>,
    #[serde(default)]
    pub support_requested: Option<bool>,
    #[serde(default)]
    pub link: Option<String>,
}
