// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use academic_data_entry::domain::ScientificType;
use academic_data_entry::scientific::DraftPatch;
use serde_json::{json, Map, Value};

// ==========================================
// 粘贴记录构建器
// ==========================================

pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// 班级记录（字段齐全）
    pub fn class(code: &str) -> Self {
        Self::new()
            .field("classCode", json!(code))
            .field("className", json!(format!("{} 班", code)))
            .field("programCode", json!("080901"))
            .field("homeroomTeacher", json!("王芳"))
            .field("studentCount", json!(40))
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.field("id", json!(id))
    }

    pub fn academic_year(self, year: &str) -> Self {
        self.field("academicYear", json!(year))
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ==========================================
// 负载拼装
// ==========================================

/// 顶层数组
pub fn array_payload(records: Vec<Value>) -> String {
    Value::Array(records).to_string()
}

/// 包装对象 {"<key>": [...]}
pub fn wrapped_payload(key: &str, records: Vec<Value>) -> String {
    let mut root = Map::new();
    root.insert(key.to_string(), Value::Array(records));
    Value::Object(root).to_string()
}

// ==========================================
// 科研活动表单构建器
// ==========================================

pub struct DraftBuilder {
    patch: DraftPatch,
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self {
            patch: DraftPatch::default(),
        }
    }

    /// 必填字段齐全的草稿
    pub fn valid() -> Self {
        Self::new()
            .lecturer_name("陈静")
            .title("基于深度学习的课堂行为识别")
    }

    pub fn lecturer_name(mut self, name: &str) -> Self {
        self.patch.lecturer_name = Some(name.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.patch.title = Some(title.to_string());
        self
    }

    pub fn activity_type(mut self, activity_type: ScientificType) -> Self {
        self.patch.activity_type = Some(activity_type);
        self
    }

    pub fn support_requested(mut self, flag: bool) -> Self {
        self.patch.support_requested = Some(flag);
        self
    }

    pub fn link(mut self, link: &str) -> Self {
        self.patch.link = Some(link.to_string());
        self
    }

    pub fn build(self) -> DraftPatch {
        self.patch
    }
}
