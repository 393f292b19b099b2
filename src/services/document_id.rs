//! 学号提取 - 业务能力层

use crate::models::document::UNKNOWN_DOCUMENT_ID;
use regex::Regex;
use std::sync::LazyLock;

static ROLL_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Roll Number:\s*(\d+)").expect("学号正则表达式无效"));

/// 从答卷文本中提取学号，找不到时返回 `"Unknown"`
pub fn extract_document_id(raw_text: &str) -> String {
    ROLL_NUMBER_RE
        .captures(raw_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_DOCUMENT_ID.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_roll_number() {
        assert_eq!(extract_document_id("Roll Number: 42\nQ 1\nx"), "42");
        assert_eq!(extract_document_id("Name: A  Roll Number:1007"), "1007");
    }

    #[test]
    fn test_missing_roll_number() {
        assert_eq!(extract_document_id("Q 1\nanswer"), "Unknown");
        assert_eq!(extract_document_id("Roll Number: abc"), "Unknown");
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            extract_document_id("Roll Number: 1\nRoll Number: 2"),
            "1"
        );
    }
}
