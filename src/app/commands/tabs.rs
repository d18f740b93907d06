use crate::app::state::AppState;

use super::common::{map_api_error, parse_kind, to_json};

// ==========================================
// 标签页与上下文相关命令
// ==========================================

/// 查询全部标签页
pub fn list_tabs(state: &AppState) -> Result<String, String> {
    let result = state.entry_api.list_tabs().map_err(map_api_error)?;
    to_json(&result)
}

/// 切换标签页
pub fn switch_tab(state: &AppState, tab: &str) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    let result = state.entry_api.switch_tab(kind).map_err(map_api_error)?;
    to_json(&result)
}

/// 查询共享上下文（学年 + 锁定标记）
pub fn get_context(state: &AppState) -> Result<String, String> {
    let result = state.entry_api.get_context().map_err(map_api_error)?;
    to_json(&result)
}

/// 设置锁定标记
pub fn set_lock(state: &AppState, is_locked: bool) -> Result<String, String> {
    let result = state.entry_api.set_lock(is_locked).map_err(map_api_error)?;
    to_json(&result)
}

/// 切换当前学年
pub fn set_academic_year(state: &AppState, academic_year: &str) -> Result<String, String> {
    let result = state
        .entry_api
        .set_academic_year(academic_year)
        .map_err(map_api_error)?;
    to_json(&result)
}
