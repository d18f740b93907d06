// ==========================================
// 高校数据录入系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::EntryApi;
use crate::app::side_effects::{SystemLinkOpener, UnavailableClipboard};
use crate::app::tab_container::TabContainer;
use crate::config::{default_config_path, ConfigManager, EntryConfigReader};
use crate::importer::{Clipboard, LinkOpener};

/// 应用状态
///
/// 命令层的唯一入口；界面为单线程,互斥锁只用于串行化命令
pub struct AppState {
    /// 配置管理器
    pub config: Arc<ConfigManager>,

    /// 录入API
    pub entry_api: Arc<EntryApi>,
}

impl AppState {
    /// 使用默认副作用实现创建
    pub fn new(config: Arc<ConfigManager>) -> Result<Self, String> {
        Self::with_side_effects(
            config,
            Box::new(UnavailableClipboard),
            Box::new(SystemLinkOpener),
        )
    }

    /// 从默认配置文件创建
    pub fn from_default_config() -> Result<Self, String> {
        let path = default_config_path();
        tracing::info!("加载配置文件: {}", path.display());
        let config = ConfigManager::new(&path).map_err(|e| format!("无法加载配置: {}", e))?;
        Self::new(Arc::new(config))
    }

    /// 指定剪贴板与链接打开器创建
    ///
    /// # 说明
    /// 1. 按配置切换界面语言（不支持的语言保持默认）
    /// 2. 读取学年与锁定标记,组装共享上下文
    /// 3. 创建标签页容器与录入API
    pub fn with_side_effects(
        config: Arc<ConfigManager>,
        clipboard: Box<dyn Clipboard + Send>,
        opener: Box<dyn LinkOpener + Send>,
    ) -> Result<Self, String> {
        let locale = config
            .get_locale()
            .map_err(|e| format!("读取语言配置失败: {}", e))?;
        crate::i18n::set_locale(&locale);

        let context = config
            .load_module_context()
            .map_err(|e| format!("读取模块上下文失败: {}", e))?;
        tracing::info!(
            academic_year = %context.current_academic_year,
            is_locked = context.is_locked,
            "初始化AppState"
        );

        let tabs = TabContainer::new(context);
        let entry_api = Arc::new(EntryApi::new(config.clone(), tabs, clipboard, opener));

        Ok(Self { config, entry_api })
    }
}
