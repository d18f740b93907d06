// ==========================================
// 高校数据录入系统 - 科研活动手工录入模块
// ==========================================
// 职责: 表单草稿 → 校验 → 新增记录；逐条删除；汇总计数
// 红线: 锁定时新增/删除不调用状态持有方
// 说明: 删除不经过确认（批量导入需要确认,此处保持不对称）
// ==========================================

use crate::config::ModuleContext;
use crate::domain::{ScientificRecord, ScientificSummary, ScientificType, StagedRecord};
use crate::importer::column::{render_link, render_plain, render_yes_no};
use crate::importer::{ColumnDescriptor, IdGenerator, PreviewTable, UuidGenerator};
use crate::scientific::draft::{DraftPatch, ScientificDraft};
use crate::scientific::error::{ScientificFormError, ScientificResult};
use crate::scientific::store_trait::ScientificRecordStore;
use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

// ==========================================
// ScientificModule - 手工录入模块
// ==========================================
pub struct ScientificModule {
    context: ModuleContext,
    draft: ScientificDraft,
    form_open: bool,
    id_generator: Box<dyn IdGenerator>,
}

impl ScientificModule {
    pub fn new(context: ModuleContext) -> Self {
        Self::with_id_generator(context, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(context: ModuleContext, id_generator: Box<dyn IdGenerator>) -> Self {
        Self {
            context,
            draft: ScientificDraft::default(),
            form_open: false,
            id_generator,
        }
    }

    pub fn context(&self) -> &ModuleContext {
        &self.context
    }

    pub fn set_context(&mut self, context: ModuleContext) {
        self.context = context;
    }

    pub fn draft(&self) -> &ScientificDraft {
        &self.draft
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    fn ensure_unlocked(&self, action: &str) -> ScientificResult<()> {
        if self.context.is_locked {
            warn!(action = action, "科研活动模块已锁定，操作被拒绝");
            return Err(ScientificFormError::Locked);
        }
        Ok(())
    }

    /// 打开新增表单（锁定时不可用）
    pub fn open_form(&mut self) -> ScientificResult<()> {
        self.ensure_unlocked("open_form")?;
        self.form_open = true;
        Ok(())
    }

    /// 关闭表单（保留草稿内容）
    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    pub fn update_draft(&mut self, patch: DraftPatch) -> &ScientificDraft {
        self.draft.apply(patch);
        &self.draft
    }

    /// 提交草稿
    ///
    /// # 流程
    /// 1. 已锁定 → Locked
    /// 2. 讲师姓名/名称为空 → MissingRequired（草稿保持不变）
    /// 3. 生成记录（新标识 + 当前学年）→ 持有方新增一次
    /// 4. 草稿恢复默认值并关闭表单
    pub fn submit(
        &mut self,
        store: &mut dyn ScientificRecordStore,
    ) -> ScientificResult<ScientificRecord> {
        self.ensure_unlocked("submit")?;

        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            debug!(missing = ?missing, "科研活动表单校验未通过");
            return Err(ScientificFormError::MissingRequired { fields: missing });
        }

        let record = ScientificRecord {
            id: self.id_generator.next_id(),
            lecturer_name: self.draft.lecturer_name.trim().to_string(),
            title: self.draft.title.trim().to_string(),
            activity_type: self.draft.activity_type,
            support_requested: self.draft.support_requested,
            link: self.draft.normalized_link(),
            academic_year: self.context.current_academic_year.clone(),
            created_at: Utc::now(),
        };

        store.add_scientific_record(record.clone());
        self.draft = ScientificDraft::default();
        self.form_open = false;

        info!(
            record_id = %record.id,
            activity_type = %record.activity_type,
            academic_year = %record.academic_year,
            "新增科研活动记录"
        );
        Ok(record)
    }

    /// 删除记录（无确认步骤）
    pub fn delete(&self, store: &mut dyn ScientificRecordStore, id: &str) -> ScientificResult<()> {
        self.ensure_unlocked("delete")?;
        store.delete_scientific_record(id);
        info!(record_id = %id, "删除科研活动记录");
        Ok(())
    }

    /// 汇总计数（每次重新计算）
    pub fn summary(&self, records: &[ScientificRecord]) -> ScientificSummary {
        ScientificSummary::from_records(records)
    }

    /// 列表预览
    pub fn preview(&self, records: &[ScientificRecord]) -> PreviewTable {
        let rows: Vec<StagedRecord> = records.iter().map(as_row).collect();
        PreviewTable::build(&columns(), &rows)
    }
}

/// 列表列
pub fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("lecturerName"),
        ColumnDescriptor::new("title"),
        ColumnDescriptor::new("type").render_with(render_scientific_type),
        ColumnDescriptor::new("supportRequested").render_with(render_yes_no),
        ColumnDescriptor::new("link").render_with(render_link),
        ColumnDescriptor::new("academicYear"),
    ]
}

/// 类别代码 → 本地化名称
fn render_scientific_type(value: &Value) -> String {
    value
        .as_str()
        .and_then(|s| s.parse::<ScientificType>().ok())
        .map(|t| t.label())
        .unwrap_or_else(|| render_plain(value))
}

fn as_row(record: &ScientificRecord) -> StagedRecord {
    let fields = match serde_json::to_value(record) {
        Ok(Value::Object(mut map)) => {
            map.remove("id");
            map.remove("academicYear");
            map
        }
        _ => Map::new(),
    };
    StagedRecord {
        id: record.id.clone(),
        academic_year: record.academic_year.clone(),
        fields,
    }
}
