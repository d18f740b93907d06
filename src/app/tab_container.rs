// ==========================================
// 高校数据录入系统 - 标签页容器
// ==========================================
// 职责: 七个固定视图 + 当前激活视图 + 共享上下文下发
// 说明: 六个批量导入视图默认提交到占位回调（只记日志,不存储）
// ==========================================

use crate::adapters;
use crate::config::ModuleContext;
use crate::domain::{RecordKind, StagedRecord};
use crate::importer::{
    CommitOutcome, Confirmer, IdGenerator, ImportSink, IngestResult, IngestionWidget,
};
use crate::scientific::ScientificModule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// 标签页信息（前端渲染用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub kind: RecordKind,
    pub label: String,
    pub active: bool,
}

// ==========================================
// LoggingImportSink - 占位提交回调
// ==========================================
// 只记录领域与条数,不保存记录
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoggingImportSink {
    pub batches: usize,
    pub records: usize,
}

impl ImportSink for LoggingImportSink {
    fn import_batch(&mut self, kind: RecordKind, records: Vec<StagedRecord>) {
        self.batches += 1;
        self.records += records.len();
        info!(kind = %kind, count = records.len(), "收到导入批次（占位回调，未持久化）");
    }
}

// ==========================================
// TabContainer - 标签页容器
// ==========================================
pub struct TabContainer {
    active: RecordKind,
    context: ModuleContext,
    widgets: BTreeMap<RecordKind, IngestionWidget>,
    scientific: ScientificModule,
    placeholder_sink: LoggingImportSink,
}

impl TabContainer {
    pub fn new(context: ModuleContext) -> Self {
        let widgets = adapters::all_schemas()
            .into_iter()
            .map(|schema| (schema.kind, IngestionWidget::new(schema, context.clone())))
            .collect();

        Self {
            active: RecordKind::ALL[0],
            scientific: ScientificModule::new(context.clone()),
            context,
            widgets,
            placeholder_sink: LoggingImportSink::default(),
        }
    }

    /// 指定标识生成器（每个子模块各取一个）
    pub fn with_id_generator<F>(context: ModuleContext, mut make_ids: F) -> Self
    where
        F: FnMut() -> Box<dyn IdGenerator>,
    {
        let widgets = adapters::all_schemas()
            .into_iter()
            .map(|schema| {
                let widget =
                    IngestionWidget::with_id_generator(schema, context.clone(), make_ids());
                (widget.schema().kind, widget)
            })
            .collect();

        Self {
            active: RecordKind::ALL[0],
            scientific: ScientificModule::with_id_generator(context.clone(), make_ids()),
            context,
            widgets,
            placeholder_sink: LoggingImportSink::default(),
        }
    }

    pub fn active(&self) -> RecordKind {
        self.active
    }

    /// 切换视图（各视图的暂存状态保留）
    pub fn switch_to(&mut self, kind: RecordKind) {
        if self.active != kind {
            info!(from = %self.active, to = %kind, "切换标签页");
            self.active = kind;
        }
    }

    pub fn tabs(&self) -> Vec<TabInfo> {
        RecordKind::ALL
            .iter()
            .map(|kind| TabInfo {
                kind: *kind,
                label: kind.label(),
                active: *kind == self.active,
            })
            .collect()
    }

    pub fn context(&self) -> &ModuleContext {
        &self.context
    }

    /// 下发新的上下文到所有子模块
    pub fn set_context(&mut self, context: ModuleContext) {
        info!(
            academic_year = %context.current_academic_year,
            is_locked = context.is_locked,
            "更新模块上下文"
        );
        for widget in self.widgets.values_mut() {
            widget.set_context(context.clone());
        }
        self.scientific.set_context(context.clone());
        self.context = context;
    }

    pub fn widget(&self, kind: RecordKind) -> Option<&IngestionWidget> {
        self.widgets.get(&kind)
    }

    pub fn widget_mut(&mut self, kind: RecordKind) -> Option<&mut IngestionWidget> {
        self.widgets.get_mut(&kind)
    }

    pub fn scientific(&self) -> &ScientificModule {
        &self.scientific
    }

    pub fn scientific_mut(&mut self) -> &mut ScientificModule {
        &mut self.scientific
    }

    /// 占位回调的累计计数
    pub fn placeholder_sink(&self) -> &LoggingImportSink {
        &self.placeholder_sink
    }

    /// 提交到占位回调（宿主未提供状态持有方时）
    ///
    /// 科研活动视图不走批量导入,返回 None
    pub fn commit(
        &mut self,
        kind: RecordKind,
        confirmer: &mut dyn Confirmer,
    ) -> Option<IngestResult<CommitOutcome>> {
        let widget = self.widgets.get_mut(&kind)?;
        Some(widget.commit(&mut self.placeholder_sink, confirmer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::{AutoConfirm, IngestError};

    #[test]
    fn test_seven_tabs_first_active() {
        let tabs = TabContainer::new(ModuleContext::unlocked("2024-2025"));
        let infos = tabs.tabs();
        assert_eq!(infos.len(), 7);
        assert_eq!(infos[0].kind, RecordKind::Scientific);
        assert!(infos[0].active);
        assert_eq!(infos.iter().filter(|t| t.active).count(), 1);
        assert!(tabs.widget(RecordKind::Scientific).is_none());
        assert!(tabs.widget(RecordKind::Business).is_some());
    }

    #[test]
    fn test_switch_keeps_staged_rows() {
        let mut tabs = TabContainer::new(ModuleContext::unlocked("2024-2025"));
        tabs.switch_to(RecordKind::Class);
        tabs.widget_mut(RecordKind::Class)
            .unwrap()
            .parse_payload(r#"[{"classCode": "A"}]"#)
            .unwrap();

        tabs.switch_to(RecordKind::Training);
        tabs.switch_to(RecordKind::Class);
        assert_eq!(tabs.active(), RecordKind::Class);
        assert_eq!(tabs.widget(RecordKind::Class).unwrap().staged().len(), 1);
    }

    #[test]
    fn test_set_context_reaches_every_child() {
        let mut tabs = TabContainer::new(ModuleContext::unlocked("2024-2025"));
        tabs.set_context(ModuleContext::new("2025-2026", true));

        for kind in RecordKind::INGESTION {
            let widget = tabs.widget(kind).unwrap();
            assert!(widget.context().is_locked);
            assert_eq!(widget.context().current_academic_year, "2025-2026");
        }
        assert!(tabs.scientific().context().is_locked);

        let err = tabs
            .widget_mut(RecordKind::Admission)
            .unwrap()
            .parse_payload("[]")
            .unwrap_err();
        assert_eq!(err, IngestError::Locked);
    }

    #[test]
    fn test_commit_goes_to_placeholder_sink() {
        let mut tabs = TabContainer::new(ModuleContext::unlocked("2024-2025"));
        tabs.widget_mut(RecordKind::Department)
            .unwrap()
            .parse_payload(r#"{"activities": [{"activityName": "A"}, {"activityName": "B"}]}"#)
            .unwrap();

        let outcome = tabs
            .commit(RecordKind::Department, &mut AutoConfirm(true))
            .unwrap()
            .unwrap();
        assert_eq!(outcome, CommitOutcome::Imported { count: 2 });
        assert_eq!(
            tabs.placeholder_sink(),
            &LoggingImportSink {
                batches: 1,
                records: 2
            }
        );
        assert!(tabs.commit(RecordKind::Scientific, &mut AutoConfirm(true)).is_none());
    }
}
