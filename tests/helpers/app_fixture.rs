// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供临时配置文件、应用状态、导入组件的初始化
// ==========================================

use academic_data_entry::adapters;
use academic_data_entry::app::AppState;
use academic_data_entry::config::{ConfigManager, ModuleContext};
use academic_data_entry::domain::RecordKind;
use academic_data_entry::importer::{Clipboard, IngestionWidget, LinkOpener};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use super::recording::SeqIdGenerator;

/// 创建临时配置文件
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 配置文件路径
pub fn create_test_config(entries: &[(&str, &str)]) -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("config.json");

    let mut object = serde_json::Map::new();
    for (key, value) in entries {
        object.insert(key.to_string(), serde_json::Value::String(value.to_string()));
    }
    std::fs::write(&path, serde_json::Value::Object(object).to_string())?;

    Ok((dir, path))
}

/// 创建应用状态（临时配置文件 + 指定副作用）
pub fn create_test_state(
    entries: &[(&str, &str)],
    clipboard: Box<dyn Clipboard + Send>,
    opener: Box<dyn LinkOpener + Send>,
) -> Result<(TempDir, PathBuf, AppState), Box<dyn Error>> {
    let (dir, path) = create_test_config(entries)?;
    let config = Arc::new(ConfigManager::new(&path)?);
    let state = AppState::with_side_effects(config, clipboard, opener)?;
    Ok((dir, path, state))
}

/// 创建某领域的导入组件（可预测标识）
pub fn create_widget(kind: RecordKind, context: ModuleContext) -> IngestionWidget {
    let schema = adapters::schema_for(kind).expect("ingestion kind has a schema");
    IngestionWidget::with_id_generator(schema, context, SeqIdGenerator::boxed("GEN"))
}
