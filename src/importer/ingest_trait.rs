// ==========================================
// 高校数据录入系统 - 导入协作方 Trait
// ==========================================
// 职责: 定义导入组件依赖的外部协作方接口（不包含实现）
// 协作方: 状态持有方（落库/合并语义由其决定）、确认对话框、
//         剪贴板、链接打开器、标识生成器
// ==========================================

use crate::domain::{RecordKind, StagedRecord};
use std::error::Error;

// ==========================================
// ImportSink Trait
// ==========================================
// 用途: 接收一整批已确认的暂存记录
// 约定: 同步调用；不保证幂等（重复提交同一批会产生重复记录）
pub trait ImportSink {
    /// 追加一批记录
    ///
    /// # 参数
    /// - kind: 记录所属领域
    /// - records: 完整暂存批次（顺序与预览一致）
    fn import_batch(&mut self, kind: RecordKind, records: Vec<StagedRecord>);
}

// ==========================================
// Confirmer Trait
// ==========================================
// 用途: 提交前的是/否确认（消息中包含确切记录数）
pub trait Confirmer {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirmer for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// 固定应答的确认器（命令层已在前端完成确认时使用）
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirmer for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

// ==========================================
// Clipboard Trait
// ==========================================
// 用途: 复制生成提示词（尽力而为,失败只记日志）
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error>>;
}

// ==========================================
// LinkOpener Trait
// ==========================================
// 用途: 在新标签页打开外部 AI 助手（尽力而为）
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<(), Box<dyn Error>>;
}

// ==========================================
// IdGenerator Trait
// ==========================================
// 用途: 为缺少标识的记录分配唯一标识
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// 默认实现: UUID v4
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
