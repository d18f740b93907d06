// ==========================================
// 高校数据录入系统 - 通用 JSON 导入组件
// ==========================================
// 职责: 粘贴 → 解析/归一化 → 暂存预览 → 逐行删除 → 确认提交
// 流程: 输入 → 本地状态 → 暂存批次 → 显式确认 → 回调状态持有方
// 红线: 锁定时解析与提交均不生效；预览永不修改已提交数据
// ==========================================

use crate::config::ModuleContext;
use crate::domain::StagedRecord;
use crate::i18n::t_with_args;
use crate::importer::error::{IngestError, IngestResult};
use crate::importer::ingest_trait::{
    Clipboard, Confirmer, IdGenerator, ImportSink, LinkOpener, UuidGenerator,
};
use crate::importer::normalizer::RecordNormalizer;
use crate::importer::notice::Notice;
use crate::importer::payload_parser::parse_payload;
use crate::importer::preview::PreviewTable;
use crate::importer::prompt::build_prompt;
use crate::importer::schema::IngestSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 提交结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommitOutcome {
    /// 暂存为空,未调用回调
    Empty,
    /// 用户取消确认,状态不变
    Cancelled,
    /// 已交给状态持有方
    Imported { count: usize },
}

// ==========================================
// IngestionWidget - 通用导入组件
// ==========================================
pub struct IngestionWidget {
    schema: IngestSchema,
    context: ModuleContext,
    input_text: String,
    staged: Vec<StagedRecord>,
    last_error: Option<IngestError>,
    id_generator: Box<dyn IdGenerator>,
}

impl IngestionWidget {
    pub fn new(schema: IngestSchema, context: ModuleContext) -> Self {
        Self::with_id_generator(schema, context, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(
        schema: IngestSchema,
        context: ModuleContext,
        id_generator: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            schema,
            context,
            input_text: String::new(),
            staged: Vec::new(),
            last_error: None,
            id_generator,
        }
    }

    pub fn schema(&self) -> &IngestSchema {
        &self.schema
    }

    pub fn context(&self) -> &ModuleContext {
        &self.context
    }

    /// 更新共享上下文
    ///
    /// 学年变化时,已暂存记录一并改写为新学年（提交的记录始终归属当前学年）
    pub fn set_context(&mut self, context: ModuleContext) {
        if context.current_academic_year != self.context.current_academic_year
            && !self.staged.is_empty()
        {
            for record in &mut self.staged {
                record.academic_year = context.current_academic_year.clone();
            }
            debug!(
                kind = %self.schema.kind,
                staged = self.staged.len(),
                academic_year = %context.current_academic_year,
                "学年切换，暂存记录已改写"
            );
        }
        self.context = context;
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn staged(&self) -> &[StagedRecord] {
        &self.staged
    }

    pub fn last_error(&self) -> Option<&IngestError> {
        self.last_error.as_ref()
    }

    /// 输入框占位符
    pub fn placeholder(&self) -> &str {
        &self.schema.example
    }

    fn ensure_unlocked(&self, action: &str) -> IngestResult<()> {
        if self.context.is_locked {
            warn!(kind = %self.schema.kind, action = action, "模块已锁定，操作被拒绝");
            return Err(IngestError::Locked);
        }
        Ok(())
    }

    /// 解析粘贴文本并替换暂存批次
    ///
    /// # 返回
    /// - Ok(usize): 暂存记录数
    /// - Err: 语法/格式错误（暂存清空,输入保留可编辑）或已锁定（状态不变）
    pub fn parse_payload(&mut self, text: &str) -> IngestResult<usize> {
        self.ensure_unlocked("parse")?;
        self.input_text = text.to_string();

        match parse_payload(text) {
            Ok(parsed) => {
                let normalizer = RecordNormalizer::new(
                    &self.context.current_academic_year,
                    self.id_generator.as_ref(),
                );
                self.staged = normalizer.normalize_all(parsed.records);
                self.last_error = None;
                info!(
                    kind = %self.schema.kind,
                    shape = ?parsed.shape,
                    staged = self.staged.len(),
                    academic_year = %self.context.current_academic_year,
                    "粘贴数据解析完成"
                );
                Ok(self.staged.len())
            }
            Err(e) => {
                debug!(kind = %self.schema.kind, error = %e, "粘贴数据解析失败");
                self.staged.clear();
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// 删除第 index 行暂存记录（保持其余顺序）
    pub fn remove_row(&mut self, index: usize) -> IngestResult<StagedRecord> {
        self.ensure_unlocked("remove_row")?;
        if index >= self.staged.len() {
            return Err(IngestError::RowOutOfRange {
                index,
                len: self.staged.len(),
            });
        }
        let removed = self.staged.remove(index);
        debug!(kind = %self.schema.kind, index = index, remaining = self.staged.len(), "删除暂存行");
        Ok(removed)
    }

    /// 清空输入与暂存
    pub fn clear(&mut self) {
        self.input_text.clear();
        self.staged.clear();
        self.last_error = None;
    }

    /// 预览表格
    pub fn preview(&self) -> PreviewTable {
        PreviewTable::build(&self.schema.columns, &self.staged)
    }

    /// 提交确认消息（暂存为空时无需确认）
    pub fn confirmation_message(&self) -> Option<String> {
        if self.staged.is_empty() {
            return None;
        }
        let count = self.staged.len().to_string();
        Some(t_with_args(
            "ingest.confirm_commit",
            &[("count", count.as_str()), ("title", self.schema.title.as_str())],
        ))
    }

    /// 确认后提交整批暂存记录
    ///
    /// # 流程
    /// 1. 已锁定 → Locked
    /// 2. 暂存为空 → Empty（不询问、不回调）
    /// 3. 用户取消 → Cancelled（状态不变）
    /// 4. 回调一次 import_batch,随后清空输入与暂存
    pub fn commit(
        &mut self,
        sink: &mut dyn ImportSink,
        confirmer: &mut dyn Confirmer,
    ) -> IngestResult<CommitOutcome> {
        self.ensure_unlocked("commit")?;

        let Some(message) = self.confirmation_message() else {
            debug!(kind = %self.schema.kind, "暂存为空，跳过提交");
            return Ok(CommitOutcome::Empty);
        };

        if !confirmer.confirm(&message) {
            info!(kind = %self.schema.kind, staged = self.staged.len(), "用户取消提交");
            return Ok(CommitOutcome::Cancelled);
        }

        let records = std::mem::take(&mut self.staged);
        let count = records.len();
        sink.import_batch(self.schema.kind, records);
        self.clear();

        info!(kind = %self.schema.kind, count = count, "暂存批次已提交");
        Ok(CommitOutcome::Imported { count })
    }

    /// 生成提示词
    pub fn generation_prompt(&self) -> String {
        build_prompt(&self.schema)
    }

    /// 复制提示词（失败只提示,不报错）
    pub fn copy_prompt(&self, clipboard: &mut dyn Clipboard) -> Notice {
        match clipboard.write_text(&self.generation_prompt()) {
            Ok(()) => Notice::PromptCopied,
            Err(e) => {
                warn!(kind = %self.schema.kind, error = %e, "复制提示词失败");
                Notice::ClipboardUnavailable
            }
        }
    }

    /// 打开外部 AI 助手（未配置链接时提示）
    pub fn open_assistant(&self, url: Option<&str>, opener: &mut dyn LinkOpener) -> Notice {
        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            info!(kind = %self.schema.kind, "未配置 AI 助手链接");
            return Notice::AssistantUnavailable;
        };

        match opener.open(url) {
            Ok(()) => Notice::AssistantOpened,
            Err(e) => {
                warn!(kind = %self.schema.kind, url = %url, error = %e, "打开 AI 助手失败");
                Notice::AssistantOpenFailed
            }
        }
    }
}
