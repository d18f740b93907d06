// ==========================================
// 高校数据录入系统 - 领域类型定义
// ==========================================
// 职责: 记录类型枚举、科研活动类别枚举
// 红线: 封闭枚举,不接受自由文本
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 记录类型 (Record Kind)
// ==========================================
// 七个领域,同时也是标签页容器的七个视图
// 序列化格式: snake_case (与前端路由键一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Scientific, // 科研活动（手工录入）
    Training,   // 培训项目
    Personnel,  // 人事
    Admission,  // 招生
    Class,      // 班级
    Department, // 院系活动
    Business,   // 企业合作
}

impl RecordKind {
    /// 全部视图（标签页顺序）
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Scientific,
        RecordKind::Training,
        RecordKind::Personnel,
        RecordKind::Admission,
        RecordKind::Class,
        RecordKind::Department,
        RecordKind::Business,
    ];

    /// 走 JSON 批量导入的六个领域
    pub const INGESTION: [RecordKind; 6] = [
        RecordKind::Training,
        RecordKind::Personnel,
        RecordKind::Admission,
        RecordKind::Class,
        RecordKind::Department,
        RecordKind::Business,
    ];

    /// 是否为批量导入领域
    pub fn is_ingestion(&self) -> bool {
        !matches!(self, RecordKind::Scientific)
    }

    /// 路由键
    pub fn as_key(&self) -> &'static str {
        match self {
            RecordKind::Scientific => "scientific",
            RecordKind::Training => "training",
            RecordKind::Personnel => "personnel",
            RecordKind::Admission => "admission",
            RecordKind::Class => "class",
            RecordKind::Department => "department",
            RecordKind::Business => "business",
        }
    }

    /// 标签页标题（已本地化）
    pub fn label(&self) -> String {
        crate::i18n::t(&format!("tab.{}", self.as_key()))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        RecordKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_key() == key)
            .ok_or_else(|| format!("未知的记录类型: {}", s))
    }
}

// ==========================================
// 科研活动类别 (Scientific Type)
// ==========================================
// 第一个变体为表单默认值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScientificType {
    InternationalJournalArticle,
    DomesticJournalArticle,
    InternationalConferencePaper,
    DomesticConferencePaper,
    Monograph,
    Textbook,
    ReferenceBook,
    BookChapter,
    NationalResearchProject,
    MinistryResearchProject,
    InstitutionalResearchProject,
    Patent,
    UtilitySolution,
    StudentResearchSupervision,
    ScientificAward,
    ConferenceOrganization,
    PeerReview,
    Other,
}

impl ScientificType {
    pub const ALL: [ScientificType; 18] = [
        ScientificType::InternationalJournalArticle,
        ScientificType::DomesticJournalArticle,
        ScientificType::InternationalConferencePaper,
        ScientificType::DomesticConferencePaper,
        ScientificType::Monograph,
        ScientificType::Textbook,
        ScientificType::ReferenceBook,
        ScientificType::BookChapter,
        ScientificType::NationalResearchProject,
        ScientificType::MinistryResearchProject,
        ScientificType::InstitutionalResearchProject,
        ScientificType::Patent,
        ScientificType::UtilitySolution,
        ScientificType::StudentResearchSupervision,
        ScientificType::ScientificAward,
        ScientificType::ConferenceOrganization,
        ScientificType::PeerReview,
        ScientificType::Other,
    ];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            ScientificType::InternationalJournalArticle => "INTERNATIONAL_JOURNAL_ARTICLE",
            ScientificType::DomesticJournalArticle => "DOMESTIC_JOURNAL_ARTICLE",
            ScientificType::InternationalConferencePaper => "INTERNATIONAL_CONFERENCE_PAPER",
            ScientificType::DomesticConferencePaper => "DOMESTIC_CONFERENCE_PAPER",
            ScientificType::Monograph => "MONOGRAPH",
            ScientificType::Textbook => "TEXTBOOK",
            ScientificType::ReferenceBook => "REFERENCE_BOOK",
            ScientificType::BookChapter => "BOOK_CHAPTER",
            ScientificType::NationalResearchProject => "NATIONAL_RESEARCH_PROJECT",
            ScientificType::MinistryResearchProject => "MINISTRY_RESEARCH_PROJECT",
            ScientificType::InstitutionalResearchProject => "INSTITUTIONAL_RESEARCH_PROJECT",
            ScientificType::Patent => "PATENT",
            ScientificType::UtilitySolution => "UTILITY_SOLUTION",
            ScientificType::StudentResearchSupervision => "STUDENT_RESEARCH_SUPERVISION",
            ScientificType::ScientificAward => "SCIENTIFIC_AWARD",
            ScientificType::ConferenceOrganization => "CONFERENCE_ORGANIZATION",
            ScientificType::PeerReview => "PEER_REVIEW",
            ScientificType::Other => "OTHER",
        }
    }

    /// 下拉框显示文本（已本地化）
    pub fn label(&self) -> String {
        crate::i18n::t(&format!(
            "scientific.type.{}",
            self.to_db_str().to_ascii_lowercase()
        ))
    }
}

impl Default for ScientificType {
    fn default() -> Self {
        ScientificType::ALL[0]
    }
}

impl fmt::Display for ScientificType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl FromStr for ScientificType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        ScientificType::ALL
            .iter()
            .copied()
            .find(|t| t.to_db_str() == normalized)
            .ok_or_else(|| format!("未知的科研活动类别: {}", s))
    }
}
