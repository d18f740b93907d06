// ==========================================
// 高校数据录入系统 - 批量导入领域记录
// ==========================================
// 对齐: 各导入模块的示例负载与预览列
// 说明: 数值/日期字段保持原始 JSON 类型（日期为 YYYY-MM-DD 字符串）
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// TrainingProgram - 培训项目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgram {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub code: String,           // 专业代码
    pub name: String,           // 项目名称
    pub level: String,          // 层次（本科/硕士/博士）
    pub faculty: String,        // 所属学院
    pub duration_years: f64,    // 学制（年）
    pub enrolled: u32,          // 在读人数
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub academic_year: String,
}

// ==========================================
// PersonnelRecord - 人事
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub staff_code: String,
    pub full_name: String,
    pub department: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub academic_title: Option<String>, // 职称（教授/副教授）
    pub degree: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub academic_year: String,
}

// ==========================================
// AdmissionRecord - 招生
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub program_code: String,
    pub program_name: String,
    pub quota: u32,        // 招生指标
    pub applicants: u32,   // 报名人数
    pub admitted: u32,     // 录取人数
    pub cutoff_score: f64, // 录取分数线
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub academic_year: String,
}

// ==========================================
// ClassRecord - 班级
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub class_code: String,
    pub class_name: String,
    pub program_code: String,
    pub homeroom_teacher: String,
    pub student_count: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub academic_year: String,
}

// ==========================================
// DepartmentActivity - 院系活动
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentActivity {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub department: String,
    pub activity_name: String,
    pub date: NaiveDate,
    pub participants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub academic_year: String,
}

// ==========================================
// BusinessPartnership - 企业合作
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPartnership {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub partner_name: String,
    pub field: String,          // 合作领域
    pub agreement_date: NaiveDate,
    pub contract_value: f64,    // 合同金额
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub academic_year: String,
}
