use crate::api::ApiError;
use crate::app::state::AppState;
use crate::scientific::DraftPatch;

use super::common::{map_api_error, to_json};

// ==========================================
// 科研活动手工录入相关命令
// ==========================================

/// 打开新增表单
pub fn open_scientific_form(state: &AppState) -> Result<String, String> {
    let draft = state
        .entry_api
        .open_scientific_form()
        .map_err(map_api_error)?;
    to_json(&draft)
}

/// 更新表单草稿（局部字段 JSON）
pub fn update_scientific_draft(state: &AppState, patch: &str) -> Result<String, String> {
    let patch: DraftPatch = serde_json::from_str(patch).map_err(|e| {
        map_api_error(ApiError::InvalidInput(format!("解析表单字段失败: {}", e)))
    })?;
    let draft = state
        .entry_api
        .update_scientific_draft(patch)
        .map_err(map_api_error)?;
    to_json(&draft)
}

/// 提交表单草稿
pub fn submit_scientific_draft(state: &AppState) -> Result<String, String> {
    let record = state
        .entry_api
        .submit_scientific_draft()
        .map_err(map_api_error)?;
    to_json(&record)
}

/// 删除科研活动记录
pub fn delete_scientific_record(state: &AppState, id: &str) -> Result<String, String> {
    state
        .entry_api
        .delete_scientific_record(id)
        .map_err(map_api_error)?;
    Ok("{}".to_string())
}

/// 查询科研活动列表
pub fn list_scientific_records(state: &AppState) -> Result<String, String> {
    let records = state
        .entry_api
        .list_scientific_records()
        .map_err(map_api_error)?;
    to_json(&records)
}

/// 查询汇总计数
pub fn get_scientific_summary(state: &AppState) -> Result<String, String> {
    let summary = state
        .entry_api
        .get_scientific_summary()
        .map_err(map_api_error)?;
    to_json(&summary)
}
