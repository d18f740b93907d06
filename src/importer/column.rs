// ==========================================
// 高校数据录入系统 - 预览列描述
// ==========================================
// 职责: 字段键 + 列标题 + 可选的值格式化函数
// 说明: 仅用于展示,不承载存储语义
// ==========================================

use crate::domain::StagedRecord;
use crate::i18n::t;
use chrono::NaiveDate;
use serde_json::Value;
use std::fmt;

/// 值 → 展示文本
pub type RenderFn = fn(&Value) -> String;

// ==========================================
// ColumnDescriptor - 列描述
// ==========================================
#[derive(Clone)]
pub struct ColumnDescriptor {
    pub key: String,
    pub label: String,
    pub render: Option<RenderFn>,
}

impl ColumnDescriptor {
    /// 列标题取自 i18n `column.<key>`
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: t(&format!("column.{}", key)),
            render: None,
        }
    }

    /// 自定义列标题
    pub fn with_label(key: &str, label: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            label: label.into(),
            render: None,
        }
    }

    pub fn render_with(mut self, render: RenderFn) -> Self {
        self.render = Some(render);
        self
    }

    /// 格式化单元格
    pub fn format_value(&self, value: &Value) -> String {
        match self.render {
            Some(render) => render(value),
            None => render_plain(value),
        }
    }

    /// 从暂存记录取值并格式化
    pub fn format_cell(&self, record: &StagedRecord) -> String {
        self.format_value(&record.value_of(&self.key))
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("render", &self.render.is_some())
            .finish()
    }
}

// ==========================================
// 内置格式化函数
// ==========================================

/// 默认: 字符串原样,null 为空,其余为紧凑 JSON
pub fn render_plain(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// 布尔 → 是/否（字符串 "true"/"false" 同样识别）
pub fn render_yes_no(value: &Value) -> String {
    let flag = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|v| v != 0),
        _ => None,
    };

    match flag {
        Some(true) => t("common.flag_yes"),
        Some(false) => t("common.flag_no"),
        None => render_plain(value),
    }
}

/// 数字千分位（金额/人数）,非数字原样展示
///
/// 整数按原值分组（不经 f64,超过 2^53 也不失真）,小数保留两位
pub fn render_grouped_number(value: &Value) -> String {
    let Value::Number(number) = value else {
        return render_plain(value);
    };

    if let Some(int) = number.as_u64() {
        return group_digits(&int.to_string(), false, "");
    }
    if let Some(int) = number.as_i64() {
        return group_digits(&int.unsigned_abs().to_string(), int < 0, "");
    }

    let Some(float) = number.as_f64() else {
        return render_plain(value);
    };
    let rounded = format!("{:.2}", float.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let frac = if frac_part == "00" { "" } else { frac_part };
    group_digits(int_part, float < 0.0, frac)
}

fn group_digits(int_part: &str, negative: bool, frac_part: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// 日期 YYYY-MM-DD → DD/MM/YYYY,无法解析时原样展示
pub fn render_date(value: &Value) -> String {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| render_plain(value))
}

/// 链接: 去掉协议前缀,空值展示为 "-"
pub fn render_link(value: &Value) -> String {
    match value {
        Value::String(url) if !url.trim().is_empty() => url
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string(),
        Value::String(_) | Value::Null => "-".to_string(),
        other => render_plain(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_plain() {
        assert_eq!(render_plain(&Value::Null), "");
        assert_eq!(render_plain(&json!("abc")), "abc");
        assert_eq!(render_plain(&json!(12)), "12");
        assert_eq!(render_plain(&json!(true)), "true");
        assert_eq!(render_plain(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_render_grouped_number() {
        assert_eq!(render_grouped_number(&json!(1234567)), "1,234,567");
        assert_eq!(render_grouped_number(&json!(999)), "999");
        assert_eq!(render_grouped_number(&json!(1500000.5)), "1,500,000.50");
        assert_eq!(render_grouped_number(&json!(-2500)), "-2,500");
        assert_eq!(render_grouped_number(&json!("n/a")), "n/a");
        assert_eq!(render_grouped_number(&json!(0)), "0");
    }

    #[test]
    fn test_render_grouped_number_keeps_large_integers_exact() {
        // 2^53 + 1 无法用 f64 精确表示
        assert_eq!(
            render_grouped_number(&json!(9007199254740993u64)),
            "9,007,199,254,740,993"
        );
        assert_eq!(
            render_grouped_number(&json!(-9007199254740993i64)),
            "-9,007,199,254,740,993"
        );
        assert_eq!(
            render_grouped_number(&json!(u64::MAX)),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_render_date() {
        assert_eq!(render_date(&json!("2024-09-05")), "05/09/2024");
        assert_eq!(render_date(&json!("05/09/2024")), "05/09/2024");
        assert_eq!(render_date(&Value::Null), "");
    }

    #[test]
    fn test_render_link() {
        assert_eq!(render_link(&json!("https://example.edu/paper/")), "example.edu/paper");
        assert_eq!(render_link(&json!("")), "-");
        assert_eq!(render_link(&Value::Null), "-");
        assert_eq!(render_link(&json!(3)), "3");
    }

    #[test]
    fn test_custom_render_is_used() {
        fn shout(value: &Value) -> String {
            render_plain(value).to_uppercase()
        }

        let column = ColumnDescriptor::with_label("name", "Name").render_with(shout);
        assert_eq!(column.format_value(&json!("abc")), "ABC");
    }

    #[test]
    fn test_format_cell_reads_system_fields() {
        let record = StagedRecord {
            id: "R1".to_string(),
            academic_year: "2024-2025".to_string(),
            fields: serde_json::Map::new(),
        };
        let column = ColumnDescriptor::with_label("academicYear", "Year");
        assert_eq!(column.format_cell(&record), "2024-2025");
    }
}
