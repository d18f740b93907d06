// ==========================================
// 高校数据录入系统 - 界面提示
// ==========================================
// 用途: 尽力而为的副作用（剪贴板/打开链接）的结果提示
// ==========================================

use crate::i18n::t;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Notice {
    PromptCopied,
    ClipboardUnavailable,
    AssistantOpened,
    AssistantUnavailable,
    AssistantOpenFailed,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::PromptCopied => t("notice.prompt_copied"),
            Notice::ClipboardUnavailable => t("notice.clipboard_unavailable"),
            Notice::AssistantOpened => t("notice.assistant_opened"),
            Notice::AssistantUnavailable => t("notice.assistant_unavailable"),
            Notice::AssistantOpenFailed => t("notice.assistant_open_failed"),
        }
    }
}
