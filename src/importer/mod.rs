// ==========================================
// 高校数据录入系统 - 导入层
// ==========================================
// 职责: 粘贴 JSON → 暂存预览 → 确认提交（各领域共用）
// 流程: 解析/解包 → 归一化（标识 + 学年）→ 预览 → 提交回调
// ==========================================

// 模块声明
pub mod column;
pub mod error;
pub mod ingest_trait;
pub mod normalizer;
pub mod notice;
pub mod payload_parser;
pub mod preview;
pub mod prompt;
pub mod schema;
pub mod widget;

// 重导出核心类型
pub use column::{ColumnDescriptor, RenderFn};
pub use error::{FormatIssue, IngestError, IngestResult, SyntaxIssue};
pub use normalizer::RecordNormalizer;
pub use notice::Notice;
pub use payload_parser::{parse_payload, ParsedPayload, PayloadShape};
pub use preview::{PreviewRow, PreviewTable};
pub use prompt::build_prompt;
pub use schema::IngestSchema;
pub use widget::{CommitOutcome, IngestionWidget};

// 重导出 Trait 接口
pub use ingest_trait::{
    AutoConfirm, Clipboard, Confirmer, IdGenerator, ImportSink, LinkOpener, UuidGenerator,
};
