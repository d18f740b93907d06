// ==========================================
// 高校数据录入系统 - 粘贴负载解析器
// ==========================================
// 职责: 粘贴文本 → JSON → 记录序列（启发式解包）
// 解包优先级:
//   1. 数组 → 直接使用
//   2. 对象 → 按声明顺序取第一个数组字段
//   3. 对象（无数组字段）→ 单元素序列
//   4. 原始值 → 格式错误
// ==========================================

use crate::importer::error::{json_type_name, FormatIssue, IngestError, IngestResult, SyntaxIssue};
use serde::Serialize;
use serde_json::{Map, Value};

/// 解包后的负载形态（用于日志与预览提示）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum PayloadShape {
    /// 顶层即数组
    Array,
    /// 包装对象中的数组字段
    Wrapped { key: String },
    /// 单个对象
    SingleObject,
}

/// 解析结果
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPayload {
    pub shape: PayloadShape,
    pub records: Vec<Map<String, Value>>,
}

/// 解析粘贴文本
///
/// # 返回
/// - Err(Syntax): 空输入或非法 JSON
/// - Err(InvalidFormat): 根为原始值,或序列元素不是对象
pub fn parse_payload(text: &str) -> IngestResult<ParsedPayload> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(IngestError::Syntax(SyntaxIssue::EmptyInput));
    }

    let value: Value = serde_json::from_str(trimmed)?;
    let (shape, items) = resolve_sequence(value)?;

    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => records.push(map),
            other => {
                return Err(IngestError::InvalidFormat(FormatIssue::NonObjectElement {
                    position: idx + 1,
                    json_type: json_type_name(&other),
                }))
            }
        }
    }

    Ok(ParsedPayload { shape, records })
}

/// 将任意 JSON 值解包为记录序列
///
/// 多个数组字段时取声明顺序中的第一个（serde_json 开启 preserve_order）
pub fn resolve_sequence(value: Value) -> IngestResult<(PayloadShape, Vec<Value>)> {
    match value {
        Value::Array(items) => Ok((PayloadShape::Array, items)),
        Value::Object(map) => {
            let wrapped_key = map
                .iter()
                .find(|(_, v)| v.is_array())
                .map(|(k, _)| k.clone());

            match wrapped_key {
                Some(key) => {
                    let mut map = map;
                    let items = match map.remove(&key) {
                        Some(Value::Array(items)) => items,
                        _ => Vec::new(),
                    };
                    Ok((PayloadShape::Wrapped { key }, items))
                }
                None => Ok((PayloadShape::SingleObject, vec![Value::Object(map)])),
            }
        }
        other => Err(IngestError::InvalidFormat(FormatIssue::PrimitiveRoot {
            json_type: json_type_name(&other),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_used_directly() {
        let parsed = parse_payload(r#"[{"a": 1}, {"a": 2}, {"a": 3}]"#).unwrap();
        assert_eq!(parsed.shape, PayloadShape::Array);
        assert_eq!(parsed.records.len(), 3);
        assert_eq!(parsed.records[2]["a"], 3);
    }

    #[test]
    fn test_single_object_becomes_one_element() {
        let parsed = parse_payload(r#"{"name": "K60", "size": 40}"#).unwrap();
        assert_eq!(parsed.shape, PayloadShape::SingleObject);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0]["name"], "K60");
    }

    #[test]
    fn test_wrapped_array_is_unwrapped() {
        let parsed = parse_payload(r#"{"foo": [{"x": 1}, {"x": 2}]}"#).unwrap();
        assert_eq!(
            parsed.shape,
            PayloadShape::Wrapped {
                key: "foo".to_string()
            }
        );
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1]["x"], 2);
    }

    #[test]
    fn test_first_declared_array_field_wins() {
        // "zeta" 在字典序上靠后,但声明在前
        let parsed =
            parse_payload(r#"{"meta": {"v": 1}, "zeta": [{"n": "z"}], "alpha": [{"n": "a"}, {"n": "b"}]}"#)
                .unwrap();
        assert_eq!(
            parsed.shape,
            PayloadShape::Wrapped {
                key: "zeta".to_string()
            }
        );
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0]["n"], "z");
    }

    #[test]
    fn test_primitive_root_is_invalid_format() {
        for text in [r#""hello""#, "42", "true", "null"] {
            let err = parse_payload(text).unwrap_err();
            assert!(
                matches!(err, IngestError::InvalidFormat(FormatIssue::PrimitiveRoot { .. })),
                "{} -> {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_malformed_is_syntax_error() {
        let err = parse_payload("{invalid").unwrap_err();
        assert!(matches!(
            err,
            IngestError::Syntax(SyntaxIssue::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_empty_input_is_syntax_error() {
        assert_eq!(
            parse_payload("   \n\t").unwrap_err(),
            IngestError::Syntax(SyntaxIssue::EmptyInput)
        );
    }

    #[test]
    fn test_non_object_element_rejected_with_position() {
        let err = parse_payload(r#"[{"a": 1}, 5]"#).unwrap_err();
        assert_eq!(
            err,
            IngestError::InvalidFormat(FormatIssue::NonObjectElement {
                position: 2,
                json_type: "number"
            })
        );
    }

    #[test]
    fn test_empty_array_is_ok() {
        let parsed = parse_payload("[]").unwrap();
        assert!(parsed.records.is_empty());
    }
}
