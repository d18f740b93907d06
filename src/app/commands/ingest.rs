use crate::app::state::AppState;
use crate::importer::AutoConfirm;

use super::common::{map_api_error, parse_kind, to_json};

// ==========================================
// JSON 粘贴导入相关命令
// ==========================================

/// 粘贴并解析
pub fn paste_payload(state: &AppState, tab: &str, text: &str) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    let result = state
        .entry_api
        .paste_payload(kind, text)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 查询预览表格
pub fn get_preview(state: &AppState, tab: &str) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    let result = state.entry_api.get_preview(kind).map_err(map_api_error)?;
    to_json(&result)
}

/// 删除暂存行
pub fn remove_staged_row(state: &AppState, tab: &str, index: usize) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    let result = state
        .entry_api
        .remove_staged_row(kind, index)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 清空输入与暂存
pub fn clear_staged(state: &AppState, tab: &str) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    state.entry_api.clear_staged(kind).map_err(map_api_error)?;
    Ok("{}".to_string())
}

/// 查询提交确认消息（前端弹出确认框用）
pub fn get_commit_confirmation(state: &AppState, tab: &str) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    let message = state
        .entry_api
        .commit_confirmation(kind)
        .map_err(map_api_error)?;
    to_json(&serde_json::json!({ "message": message }))
}

/// 提交暂存批次
///
/// confirmed 为前端确认框的应答
pub fn commit_staged(state: &AppState, tab: &str, confirmed: bool) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    let result = state
        .entry_api
        .commit_staged(kind, &mut AutoConfirm(confirmed))
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 查询生成提示词
pub fn get_generation_prompt(state: &AppState, tab: &str) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    let prompt = state
        .entry_api
        .get_generation_prompt(kind)
        .map_err(map_api_error)?;
    to_json(&serde_json::json!({ "prompt": prompt }))
}

/// 复制生成提示词
pub fn copy_generation_prompt(state: &AppState, tab: &str) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    let result = state
        .entry_api
        .copy_generation_prompt(kind)
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 打开外部 AI 助手
pub fn open_assistant(state: &AppState, tab: &str) -> Result<String, String> {
    let kind = parse_kind(tab)?;
    let result = state.entry_api.open_assistant(kind).map_err(map_api_error)?;
    to_json(&result)
}
