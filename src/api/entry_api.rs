// ==========================================
// 高校数据录入系统 - 录入 API
// ==========================================
// 职责: 标签页切换、粘贴导入、手工录入、上下文变更
// 说明: 锁顺序固定为 tabs → store
// ==========================================

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::app::tab_container::{TabContainer, TabInfo};
use crate::config::{config_keys, is_valid_academic_year, ConfigManager, EntryConfigReader, ModuleContext};
use crate::domain::{RecordKind, ScientificRecord, ScientificSummary, StagedRecord};
use crate::importer::{
    AutoConfirm, Clipboard, CommitOutcome, Confirmer, IngestionWidget, LinkOpener, Notice, PreviewTable,
};
use crate::repository::InMemoryRecordStore;
use crate::scientific::{DraftPatch, ScientificDraft, ScientificRecordStore};

/// 粘贴解析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasteResult {
    pub kind: RecordKind,
    pub staged: usize,
    pub preview: PreviewTable,
}

/// 副作用结果提示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeView {
    pub notice: Notice,
    pub message: String,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            message: notice.message(),
            notice,
        }
    }
}

// ==========================================
// EntryApi - 录入 API
// ==========================================
pub struct EntryApi {
    config: Arc<ConfigManager>,
    tabs: Mutex<TabContainer>,
    store: Mutex<InMemoryRecordStore>,
    clipboard: Mutex<Box<dyn Clipboard + Send>>,
    opener: Mutex<Box<dyn LinkOpener + Send>>,
}

impl EntryApi {
    pub fn new(
        config: Arc<ConfigManager>,
        tabs: TabContainer,
        clipboard: Box<dyn Clipboard + Send>,
        opener: Box<dyn LinkOpener + Send>,
    ) -> Self {
        Self {
            config,
            tabs: Mutex::new(tabs),
            store: Mutex::new(InMemoryRecordStore::new()),
            clipboard: Mutex::new(clipboard),
            opener: Mutex::new(opener),
        }
    }

    fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> ApiResult<MutexGuard<'a, T>> {
        mutex
            .lock()
            .map_err(|e| ApiError::InternalError(format!("{}锁获取失败: {}", what, e)))
    }

    fn tabs(&self) -> ApiResult<MutexGuard<'_, TabContainer>> {
        Self::lock(&self.tabs, "标签页")
    }

    fn store(&self) -> ApiResult<MutexGuard<'_, InMemoryRecordStore>> {
        Self::lock(&self.store, "记录集合")
    }

    fn widget_mut<'a>(
        tabs: &'a mut TabContainer,
        kind: RecordKind,
    ) -> ApiResult<&'a mut IngestionWidget> {
        tabs.widget_mut(kind).ok_or_else(|| {
            ApiError::InvalidInput(format!("{} 不支持 JSON 批量导入", kind))
        })
    }

    // ==========================================
    // 标签页与上下文
    // ==========================================

    pub fn list_tabs(&self) -> ApiResult<Vec<TabInfo>> {
        Ok(self.tabs()?.tabs())
    }

    pub fn switch_tab(&self, kind: RecordKind) -> ApiResult<Vec<TabInfo>> {
        let mut tabs = self.tabs()?;
        tabs.switch_to(kind);
        Ok(tabs.tabs())
    }

    pub fn get_context(&self) -> ApiResult<ModuleContext> {
        Ok(self.tabs()?.context().clone())
    }

    /// 设置锁定标记（写入配置并下发）
    pub fn set_lock(&self, is_locked: bool) -> ApiResult<ModuleContext> {
        self.config
            .set_config_value(config_keys::IS_LOCKED, &is_locked.to_string())?;
        self.config.save()?;

        let mut tabs = self.tabs()?;
        let context = ModuleContext::new(tabs.context().current_academic_year.clone(), is_locked);
        tabs.set_context(context.clone());
        info!(is_locked = is_locked, "锁定标记已更新");
        Ok(context)
    }

    /// 切换当前学年（写入配置并下发）
    pub fn set_academic_year(&self, academic_year: &str) -> ApiResult<ModuleContext> {
        let academic_year = academic_year.trim();
        if !is_valid_academic_year(academic_year) {
            return Err(ApiError::InvalidInput(format!(
                "学年格式应为 YYYY-YYYY: {}",
                academic_year
            )));
        }
        self.config
            .set_config_value(config_keys::CURRENT_ACADEMIC_YEAR, academic_year)?;
        self.config.save()?;

        let mut tabs = self.tabs()?;
        let context = ModuleContext::new(academic_year, tabs.context().is_locked);
        tabs.set_context(context.clone());
        info!(academic_year = %academic_year, "当前学年已更新");
        Ok(context)
    }

    // ==========================================
    // 批量导入
    // ==========================================

    pub fn paste_payload(&self, kind: RecordKind, text: &str) -> ApiResult<PasteResult> {
        let mut tabs = self.tabs()?;
        let widget = Self::widget_mut(&mut tabs, kind)?;
        let staged = widget.parse_payload(text)?;
        Ok(PasteResult {
            kind,
            staged,
            preview: widget.preview(),
        })
    }

    /// 预览（科研活动视图为已录入列表）
    pub fn get_preview(&self, kind: RecordKind) -> ApiResult<PreviewTable> {
        let tabs = self.tabs()?;
        if kind == RecordKind::Scientific {
            let records = self.store()?.list_scientific_records();
            return Ok(tabs.scientific().preview(&records));
        }
        tabs.widget(kind)
            .map(IngestionWidget::preview)
            .ok_or_else(|| ApiError::NotFound(kind.to_string()))
    }

    pub fn remove_staged_row(&self, kind: RecordKind, index: usize) -> ApiResult<PreviewTable> {
        let mut tabs = self.tabs()?;
        let widget = Self::widget_mut(&mut tabs, kind)?;
        widget.remove_row(index)?;
        Ok(widget.preview())
    }

    pub fn clear_staged(&self, kind: RecordKind) -> ApiResult<()> {
        let mut tabs = self.tabs()?;
        Self::widget_mut(&mut tabs, kind)?.clear();
        Ok(())
    }

    /// 提交确认消息（暂存为空时为 None）
    pub fn commit_confirmation(&self, kind: RecordKind) -> ApiResult<Option<String>> {
        let mut tabs = self.tabs()?;
        Ok(Self::widget_mut(&mut tabs, kind)?.confirmation_message())
    }

    /// 确认后提交到记录集合
    ///
    /// 询问确认期间不持有标签页锁（确认器可回调本 API,例如重新获取预览）。
    /// 确认后暂存批次若已被改动,本次提交按取消处理。
    pub fn commit_staged(
        &self,
        kind: RecordKind,
        confirmer: &mut dyn Confirmer,
    ) -> ApiResult<CommitOutcome> {
        let asked = {
            let mut tabs = self.tabs()?;
            let widget = Self::widget_mut(&mut tabs, kind)?;
            match widget.confirmation_message() {
                Some(message) if !widget.context().is_locked => message,
                // 锁定或暂存为空: 直接交给组件返回 Locked / Empty,不询问
                _ => {
                    let mut store = self.store()?;
                    return Ok(widget.commit(&mut *store, &mut AutoConfirm(false))?);
                }
            }
        };

        if !confirmer.confirm(&asked) {
            info!(kind = %kind, "用户取消提交");
            return Ok(CommitOutcome::Cancelled);
        }

        let mut tabs = self.tabs()?;
        let widget = Self::widget_mut(&mut tabs, kind)?;
        if widget.confirmation_message().as_deref() != Some(asked.as_str()) {
            warn!(kind = %kind, "确认期间暂存批次已变化，本次提交取消");
            return Ok(CommitOutcome::Cancelled);
        }
        let mut store = self.store()?;
        Ok(widget.commit(&mut *store, &mut AutoConfirm(true))?)
    }

    /// 已提交记录
    pub fn committed_records(&self, kind: RecordKind) -> ApiResult<Vec<StagedRecord>> {
        Ok(self.store()?.records(kind).to_vec())
    }

    pub fn get_generation_prompt(&self, kind: RecordKind) -> ApiResult<String> {
        let mut tabs = self.tabs()?;
        Ok(Self::widget_mut(&mut tabs, kind)?.generation_prompt())
    }

    pub fn copy_generation_prompt(&self, kind: RecordKind) -> ApiResult<NoticeView> {
        let mut tabs = self.tabs()?;
        let widget = Self::widget_mut(&mut tabs, kind)?;
        let mut clipboard = Self::lock(&self.clipboard, "剪贴板")?;
        Ok(widget.copy_prompt(clipboard.as_mut()).into())
    }

    pub fn open_assistant(&self, kind: RecordKind) -> ApiResult<NoticeView> {
        let url = self.config.get_assistant_url()?;
        let mut tabs = self.tabs()?;
        let widget = Self::widget_mut(&mut tabs, kind)?;
        let mut opener = Self::lock(&self.opener, "链接打开器")?;
        Ok(widget.open_assistant(url.as_deref(), opener.as_mut()).into())
    }

    // ==========================================
    // 科研活动手工录入
    // ==========================================

    pub fn open_scientific_form(&self) -> ApiResult<ScientificDraft> {
        let mut tabs = self.tabs()?;
        tabs.scientific_mut().open_form()?;
        Ok(tabs.scientific().draft().clone())
    }

    pub fn update_scientific_draft(&self, patch: DraftPatch) -> ApiResult<ScientificDraft> {
        let mut tabs = self.tabs()?;
        Ok(tabs.scientific_mut().update_draft(patch).clone())
    }

    pub fn submit_scientific_draft(&self) -> ApiResult<ScientificRecord> {
        let mut tabs = self.tabs()?;
        let mut store = self.store()?;
        Ok(tabs.scientific_mut().submit(&mut *store)?)
    }

    pub fn delete_scientific_record(&self, id: &str) -> ApiResult<()> {
        let tabs = self.tabs()?;
        let mut store = self.store()?;
        tabs.scientific().delete(&mut *store, id)?;
        Ok(())
    }

    pub fn list_scientific_records(&self) -> ApiResult<Vec<ScientificRecord>> {
        Ok(self.store()?.list_scientific_records())
    }

    pub fn get_scientific_summary(&self) -> ApiResult<ScientificSummary> {
        let tabs = self.tabs()?;
        let records = self.store()?.list_scientific_records();
        Ok(tabs.scientific().summary(&records))
    }
}
