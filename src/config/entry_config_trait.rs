// ==========================================
// 高校数据录入系统 - 录入配置读取 Trait
// ==========================================
// 职责: 定义各模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::context::ModuleContext;
use crate::config::error::ConfigResult;

// ==========================================
// EntryConfigReader Trait
// ==========================================
// 实现者: ConfigManager（JSON 配置文件）,测试中为 MockConfig
pub trait EntryConfigReader: Send + Sync {
    /// 获取当前学年
    ///
    /// # 默认值
    /// - 按当天日期推算（8 月起为新学年）
    fn get_current_academic_year(&self) -> ConfigResult<String>;

    /// 获取锁定标记
    ///
    /// # 默认值
    /// - false
    fn get_is_locked(&self) -> ConfigResult<bool>;

    /// 获取 AI 助手链接
    ///
    /// # 返回
    /// - None: 未配置（界面提示,不打开链接）
    fn get_assistant_url(&self) -> ConfigResult<Option<String>>;

    /// 获取界面语言
    ///
    /// # 默认值
    /// - zh-CN
    fn get_locale(&self) -> ConfigResult<String>;

    /// 组装模块共享上下文
    fn load_module_context(&self) -> ConfigResult<ModuleContext> {
        Ok(ModuleContext::new(
            self.get_current_academic_year()?,
            self.get_is_locked()?,
        ))
    }
}
