// ==========================================
// 高校数据录入系统 - 模块共享上下文
// ==========================================
// 职责: 锁定标记 + 当前学年,显式传入每个模块
// 红线: 只读传递,各模块自行据此拦截变更操作
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ==========================================
// ModuleContext - 模块上下文
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleContext {
    /// 锁定后禁用所有新增/删除/导入操作（仅界面级,非权限控制）
    pub is_locked: bool,
    /// 当前学年,写入每条新增/导入记录
    pub current_academic_year: String,
}

impl ModuleContext {
    pub fn new(current_academic_year: impl Into<String>, is_locked: bool) -> Self {
        Self {
            is_locked,
            current_academic_year: current_academic_year.into(),
        }
    }

    /// 未锁定的上下文
    pub fn unlocked(current_academic_year: impl Into<String>) -> Self {
        Self::new(current_academic_year, false)
    }
}

/// 根据日期推算学年（8 月起为新学年）
///
/// # 示例
/// - 2024-09-01 → "2024-2025"
/// - 2025-03-15 → "2024-2025"
pub fn academic_year_for(date: NaiveDate) -> String {
    let start = if date.month() >= 8 {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{}-{}", start, start + 1)
}

/// 校验学年格式（YYYY-YYYY,且后一年 = 前一年 + 1）
pub fn is_valid_academic_year(value: &str) -> bool {
    let mut parts = value.trim().split('-');
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if first.len() != 4 || second.len() != 4 {
        return false;
    }
    match (first.parse::<i32>(), second.parse::<i32>()) {
        (Ok(a), Ok(b)) => b == a + 1,
        _ => false,
    }
}
