// ==========================================
// 高校数据录入系统 - 预览表格
// ==========================================
// 职责: 暂存批次 → 表头 + 字符串单元格（与渲染框架无关）
// ==========================================

use crate::domain::StagedRecord;
use crate::importer::column::ColumnDescriptor;
use serde::{Deserialize, Serialize};

/// 预览行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    /// 在暂存批次中的位置（从 0 开始,删除行时使用）
    pub position: usize,
    pub id: String,
    pub cells: Vec<String>,
}

/// 预览表格
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<PreviewRow>,
}

impl PreviewTable {
    pub fn build(columns: &[ColumnDescriptor], records: &[StagedRecord]) -> Self {
        let headers = columns.iter().map(|c| c.label.clone()).collect();
        let rows = records
            .iter()
            .enumerate()
            .map(|(position, record)| PreviewRow {
                position,
                id: record.id.clone(),
                cells: columns.iter().map(|c| c.format_cell(record)).collect(),
            })
            .collect();

        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 纯文本对齐表格（CLI 输出）,首列为行号
    pub fn render_text(&self) -> String {
        let mut widths: Vec<usize> = std::iter::once(1)
            .chain(self.headers.iter().map(|h| display_width(h)))
            .collect();

        for row in &self.rows {
            widths[0] = widths[0].max(display_width(&(row.position + 1).to_string()));
            for (i, cell) in row.cells.iter().enumerate() {
                if let Some(w) = widths.get_mut(i + 1) {
                    *w = (*w).max(display_width(cell));
                }
            }
        }

        let mut out = String::new();
        let header_line: Vec<String> = std::iter::once("#".to_string())
            .chain(self.headers.iter().cloned())
            .enumerate()
            .map(|(i, h)| pad(&h, widths[i]))
            .collect();
        out.push_str(header_line.join(" | ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        for row in &self.rows {
            let line: Vec<String> = std::iter::once((row.position + 1).to_string())
                .chain(row.cells.iter().cloned())
                .enumerate()
                .map(|(i, c)| pad(&c, widths.get(i).copied().unwrap_or(0)))
                .collect();
            out.push_str(line.join(" | ").trim_end());
            out.push('\n');
        }

        out
    }
}

/// 宽字符（中日韩/全角）按 2 列计,其余按 1 列
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F            // 韩文字母（首音）
            | 0x2E80..=0x303E      // 部首、CJK 符号与标点
            | 0x3041..=0x33FF      // 假名、注音、CJK 兼容
            | 0x3400..=0x4DBF      // 扩展 A
            | 0x4E00..=0x9FFF      // 统一表意文字
            | 0xA000..=0xA4CF      // 彝文
            | 0xAC00..=0xD7A3      // 韩文音节
            | 0xF900..=0xFAFF      // 兼容表意文字
            | 0xFE30..=0xFE4F      // 兼容形式
            | 0xFF00..=0xFF60      // 全角 ASCII
            | 0xFFE0..=0xFFE6      // 全角符号
            | 0x20000..=0x3FFFD    // 扩展 B 及以后
    )
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn record(id: &str, name: &str) -> StagedRecord {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(name));
        StagedRecord {
            id: id.to_string(),
            academic_year: "2024-2025".to_string(),
            fields,
        }
    }

    #[test]
    fn test_build_rows_follow_columns() {
        let columns = vec![
            ColumnDescriptor::with_label("name", "Name"),
            ColumnDescriptor::with_label("missing", "Missing"),
        ];
        let table = PreviewTable::build(&columns, &[record("A", "x"), record("B", "y")]);

        assert_eq!(table.headers, vec!["Name", "Missing"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].position, 1);
        assert_eq!(table.rows[1].id, "B");
        assert_eq!(table.rows[1].cells, vec!["y", ""]);
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let columns = vec![ColumnDescriptor::with_label("name", "Name")];
        let table = PreviewTable::build(&columns, &[record("A", "longer value")]);
        let text = table.render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("# | Name"));
        assert!(lines[2].starts_with("1 | longer value"));
    }

    #[test]
    fn test_display_width_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("班级"), 4);
        assert_eq!(display_width("\u{1EC5}\u{2013}\u{20AC}"), 3);
        assert_eq!(display_width("Nguy\u{1EC5}n"), 6);
        assert_eq!(display_width("ＡＢ한"), 6);
    }
}
