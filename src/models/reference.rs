//! 参考答案表
//!
//! `ReferenceTable` 是外部提供的原始表格（列名 + 行），
//! `ReferenceKey` 是校验之后的、按题号索引的只读参考答案。

use crate::error::ReferenceKeyError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// 题号列名
pub const NUMBER_COLUMN: &str = "No";
/// 分值列名
pub const MARKS_COLUMN: &str = "Marks";
/// 参考答案列名
pub const ANSWER_COLUMN: &str = "Answers";

/// 原始参考答案表
///
/// 每行的单元格与 `columns` 一一对应，缺失的单元格为 None
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ReferenceTable {
    /// 创建只有表头的空表
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 追加一行（不足的单元格补 None，多余的截断）
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = Option<S>>) {
        let mut row: Vec<Option<String>> = cells
            .into_iter()
            .map(|cell| cell.map(Into::into))
            .collect();
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    /// 链式追加一行，所有单元格都有值
    pub fn with_row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.push_row(cells.into_iter().map(Some));
        self
    }

    /// 列的位置
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 读取某行某列的单元格（去除首尾空白，空字符串视为缺失）
    fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// 读取文本单元格，保留原样（仅空白的单元格视为缺失）
    fn text_cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
            .filter(|c| !c.trim().is_empty())
    }
}

/// 单道题的参考答案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub question_number: String,
    pub reference_text: String,
    pub max_marks: f64,
}

/// 校验后的参考答案
///
/// 题号唯一、分值非负；整个评分批次内只读共享
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceKey {
    entries: Vec<ReferenceEntry>,
    index: HashMap<String, usize>,
}

impl ReferenceKey {
    /// 从参考答案条目构建，检查题号重复和负分值
    pub fn new(entries: Vec<ReferenceEntry>) -> Result<Self, ReferenceKeyError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let row = i + 1;
            if !entry.max_marks.is_finite() {
                return Err(ReferenceKeyError::InvalidMarks {
                    row,
                    value: entry.max_marks.to_string(),
                });
            }
            if entry.max_marks < 0.0 {
                return Err(ReferenceKeyError::NegativeMarks {
                    row,
                    value: entry.max_marks,
                });
            }
            if let Some(first) = index.insert(entry.question_number.clone(), i) {
                return Err(ReferenceKeyError::DuplicateQuestion {
                    question_number: entry.question_number.clone(),
                    first_row: first + 1,
                    row,
                });
            }
        }

        Ok(Self { entries, index })
    }

    /// 从原始表格构建
    ///
    /// 缺少题号列或分值列是结构错误；缺少参考答案列时参考文本按空串处理
    pub fn from_table(table: &ReferenceTable) -> Result<Self, ReferenceKeyError> {
        let number_col = table
            .column_index(NUMBER_COLUMN)
            .ok_or_else(|| ReferenceKeyError::missing_column(NUMBER_COLUMN))?;
        let marks_col = table
            .column_index(MARKS_COLUMN)
            .ok_or_else(|| ReferenceKeyError::missing_column(MARKS_COLUMN))?;
        let answer_col = table.column_index(ANSWER_COLUMN);

        if answer_col.is_none() {
            warn!(
                "⚠️ 参考答案表缺少 '{}' 列，所有题目的相似度都将为 0",
                ANSWER_COLUMN
            );
        }

        let mut entries = Vec::with_capacity(table.rows.len());
        for row in 0..table.rows.len() {
            let number = table
                .cell(row, number_col)
                .ok_or_else(|| ReferenceKeyError::MissingCell {
                    row: row + 1,
                    column: NUMBER_COLUMN.to_string(),
                })?;
            let marks_text = table
                .cell(row, marks_col)
                .ok_or_else(|| ReferenceKeyError::MissingCell {
                    row: row + 1,
                    column: MARKS_COLUMN.to_string(),
                })?;
            let max_marks = marks_text
                .parse::<f64>()
                .map_err(|_| ReferenceKeyError::InvalidMarks {
                    row: row + 1,
                    value: marks_text.to_string(),
                })?;
            let reference_text = answer_col
                .and_then(|col| table.text_cell(row, col))
                .unwrap_or("")
                .to_string();

            entries.push(ReferenceEntry {
                question_number: canonical_question_number(number),
                reference_text,
                max_marks,
            });
        }

        Self::new(entries)
    }

    /// 按题号查找
    pub fn get(&self, question_number: &str) -> Option<&ReferenceEntry> {
        self.index.get(question_number).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 整张参考答案表的满分
    pub fn total_possible(&self) -> f64 {
        self.entries.iter().map(|e| e.max_marks).sum()
    }
}

/// 规范化题号：表格里的 `3.0` 与学生答卷里的 `3` 视为同一题
///
/// 超出 u64 范围的值保持原文，不做饱和转换
fn canonical_question_number(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.contains('.') {
        return trimmed.to_string();
    }
    match trimmed.parse::<f64>() {
        Ok(value)
            if value.is_finite()
                && value >= 0.0
                && value < u64::MAX as f64
                && value.fract() == 0.0 =>
        {
            format!("{}", value as u64)
        }
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ReferenceTable {
        ReferenceTable::new(["No", "Marks", "Answers"])
            .with_row(["1", "10", "Water boils at 100C"])
            .with_row(["2", "5", "Paris is the capital of France"])
    }

    #[test]
    fn test_from_table_valid() {
        let key = ReferenceKey::from_table(&sample_table()).unwrap();
        assert_eq!(key.len(), 2);
        assert_eq!(key.get("1").unwrap().max_marks, 10.0);
        assert_eq!(
            key.get("2").unwrap().reference_text,
            "Paris is the capital of France"
        );
        assert_eq!(key.total_possible(), 15.0);
    }

    #[test]
    fn test_missing_number_column() {
        let table = ReferenceTable::new(["Question", "Marks", "Answers"]).with_row(["1", "10", "x"]);
        assert_eq!(
            ReferenceKey::from_table(&table),
            Err(ReferenceKeyError::missing_column("No"))
        );
    }

    #[test]
    fn test_missing_marks_column() {
        let table = ReferenceTable::new(["No", "Answers"]).with_row(["1", "x"]);
        assert_eq!(
            ReferenceKey::from_table(&table),
            Err(ReferenceKeyError::missing_column("Marks"))
        );
    }

    #[test]
    fn test_missing_answer_column_is_not_structural() {
        let table = ReferenceTable::new(["No", "Marks"]).with_row(["1", "4"]);
        let key = ReferenceKey::from_table(&table).unwrap();
        assert_eq!(key.get("1").unwrap().reference_text, "");
    }

    #[test]
    fn test_missing_marks_cell() {
        let mut table = ReferenceTable::new(["No", "Marks", "Answers"]);
        table.push_row([Some("1"), None, Some("x")]);
        assert_eq!(
            ReferenceKey::from_table(&table),
            Err(ReferenceKeyError::MissingCell {
                row: 1,
                column: "Marks".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_and_negative_marks() {
        let table = ReferenceTable::new(["No", "Marks"]).with_row(["1", "ten"]);
        assert!(matches!(
            ReferenceKey::from_table(&table),
            Err(ReferenceKeyError::InvalidMarks { row: 1, .. })
        ));

        let table = ReferenceTable::new(["No", "Marks"]).with_row(["1", "-2"]);
        assert!(matches!(
            ReferenceKey::from_table(&table),
            Err(ReferenceKeyError::NegativeMarks { row: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_question_numbers() {
        let table = ReferenceTable::new(["No", "Marks"])
            .with_row(["1", "2"])
            .with_row(["2", "2"])
            .with_row(["1", "3"]);
        assert_eq!(
            ReferenceKey::from_table(&table),
            Err(ReferenceKeyError::DuplicateQuestion {
                question_number: "1".to_string(),
                first_row: 1,
                row: 3,
            })
        );
    }

    #[test]
    fn test_float_question_number_is_canonicalized() {
        let table = ReferenceTable::new(["No", "Marks"]).with_row(["3.0", "1.5"]);
        let key = ReferenceKey::from_table(&table).unwrap();
        assert!(key.get("3").is_some());
        assert_eq!(key.total_possible(), 1.5);
    }

    #[test]
    fn test_empty_table_is_valid() {
        let key = ReferenceKey::from_table(&ReferenceTable::new(["No", "Marks"])).unwrap();
        assert!(key.is_empty());
        assert_eq!(key.total_possible(), 0.0);
    }

    #[test]
    fn test_out_of_range_question_number_is_kept_as_text() {
        let table = ReferenceTable::new(["No", "Marks"]).with_row(["99999999999999999999.0", "1"]);
        let key = ReferenceKey::from_table(&table).unwrap();
        assert!(key.get("99999999999999999999.0").is_some());
        assert!(key.get("18446744073709551615").is_none());
    }

    #[test]
    fn test_reference_text_is_kept_as_stored() {
        let table = ReferenceTable::new(["No", "Marks", "Answers"])
            .with_row([" 1 ", " 2 ", "  Paris, France "])
            .with_row(["2", "1", "   "]);
        let key = ReferenceKey::from_table(&table).unwrap();
        assert_eq!(key.get("1").unwrap().reference_text, "  Paris, France ");
        assert_eq!(key.get("1").unwrap().max_marks, 2.0);
        assert_eq!(key.get("2").unwrap().reference_text, "");
    }
}
