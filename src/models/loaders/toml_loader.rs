use crate::models::reference::{ReferenceTable, ANSWER_COLUMN, MARKS_COLUMN, NUMBER_COLUMN};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 参考答案 TOML 文件结构
///
/// ```toml
/// [[answers]]
/// No = 1
/// Marks = 10
/// Answers = "Water boils at 100C"
/// ```
#[derive(Debug, Deserialize)]
struct ReferenceKeyFile {
    #[serde(default)]
    answers: Vec<toml::Table>,
}

/// 从 TOML 文件加载参考答案表
pub async fn load_reference_table(toml_file_path: &Path) -> Result<ReferenceTable> {
    if !toml_file_path.exists() {
        anyhow::bail!("参考答案文件不存在: {}", toml_file_path.display());
    }

    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let table = parse_reference_table(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    tracing::info!(
        "成功加载参考答案 {} 行, 列: {:?}",
        table.rows.len(),
        table.columns
    );

    Ok(table)
}

/// 把 TOML 文本解析为参考答案表
///
/// 列为标准列加上各行中出现过的其他键，按首次出现的顺序排列
pub fn parse_reference_table(content: &str) -> Result<ReferenceTable> {
    let file: ReferenceKeyFile = toml::from_str(content)?;

    // 标准列始终存在，空的 [[answers]] 得到空参考答案而不是缺列错误
    let mut columns: Vec<String> = [NUMBER_COLUMN, MARKS_COLUMN, ANSWER_COLUMN]
        .into_iter()
        .map(String::from)
        .collect();
    for row in &file.answers {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut table = ReferenceTable::new(columns.clone());
    for row in &file.answers {
        table.push_row(columns.iter().map(|c| row.get(c).map(cell_to_string)));
    }

    Ok(table)
}

/// TOML 值转单元格文本：i64 范围内整数值的浮点数去掉小数部分
fn cell_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            format!("{}", *f as i64)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceKeyError;
    use crate::models::reference::ReferenceKey;

    #[test]
    fn test_parse_reference_table() {
        let content = r#"
            [[answers]]
            No = 1
            Marks = 10
            Answers = "Water boils at 100C"

            [[answers]]
            No = "2"
            Marks = 2.5
            Answers = "Paris is the capital of France"
        "#;

        let table = parse_reference_table(content).unwrap();
        assert_eq!(table.rows.len(), 2);

        let key = ReferenceKey::from_table(&table).unwrap();
        assert_eq!(key.get("1").unwrap().max_marks, 10.0);
        assert_eq!(key.get("2").unwrap().max_marks, 2.5);
        assert_eq!(key.total_possible(), 12.5);
    }

    #[test]
    fn test_float_number_cell() {
        let table = parse_reference_table("[[answers]]\nNo = 3.0\nMarks = 1\n").unwrap();
        let no_col = table.column_index("No").unwrap();
        assert_eq!(table.rows[0][no_col].as_deref(), Some("3"));
    }

    #[test]
    fn test_missing_cells_are_reported_by_row() {
        let table = parse_reference_table("[[answers]]\nNo = 1\nAnswers = \"x\"\n").unwrap();
        let marks_col = table.column_index("Marks").unwrap();
        assert_eq!(table.rows[0][marks_col], None);
        assert!(matches!(
            ReferenceKey::from_table(&table),
            Err(ReferenceKeyError::MissingCell { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_answers_file_is_empty_key() {
        for content in ["", "answers = []\n"] {
            let table = parse_reference_table(content).unwrap();
            assert!(table.rows.is_empty());

            let key = ReferenceKey::from_table(&table).unwrap();
            assert!(key.is_empty());
            assert_eq!(key.total_possible(), 0.0);
        }
    }

    #[test]
    fn test_huge_float_number_cell_is_not_saturated() {
        let table = parse_reference_table("[[answers]]\nNo = 1e20\nMarks = 1\n").unwrap();
        let no_col = table.column_index("No").unwrap();
        assert_ne!(table.rows[0][no_col].as_deref(), Some("9223372036854775807"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(parse_reference_table("[[answers]\nNo = ").is_err());
    }
}
