// ==========================================
// 高校数据录入系统 - 领域模型层
// ==========================================
// 职责: 定义领域记录、暂存记录、封闭枚举
// 红线: 不含导入逻辑,不含界面状态
// ==========================================

pub mod academic;
pub mod scientific;
pub mod staged;
pub mod types;

// 重导出核心类型
pub use academic::{
    AdmissionRecord, BusinessPartnership, ClassRecord, DepartmentActivity, PersonnelRecord,
    TrainingProgram,
};
pub use scientific::{ScientificRecord, ScientificSummary};
pub use staged::{StagedRecord, ACADEMIC_YEAR_FIELD, ID_FIELD};
pub use types::{RecordKind, ScientificType};
