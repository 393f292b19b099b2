//! 成绩表投影
//!
//! 每份答卷一张表，再合并成一张跨答卷的总表，交给外部展示/导出

use super::document::DocumentResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 成绩表中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Roll Number")]
    pub document_id: String,
    #[serde(rename = "No")]
    pub question_number: String,
    #[serde(rename = "Question")]
    pub question_text: String,
    #[serde(rename = "Answers_student")]
    pub student_answer: String,
    #[serde(rename = "Similarity (%)")]
    pub similarity: f64,
    #[serde(rename = "Assigned Marks")]
    pub awarded_marks: f64,
}

/// 成绩表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// 单份答卷的成绩表
    pub fn for_document(result: &DocumentResult) -> Self {
        let rows = result
            .entries
            .iter()
            .map(|entry| ResultRow {
                document_id: result.document_id.clone(),
                question_number: entry.question_number.clone(),
                question_text: entry.question_text.clone(),
                student_answer: entry.student_text.clone(),
                similarity: entry.similarity,
                awarded_marks: entry.awarded_marks,
            })
            .collect();
        Self { rows }
    }

    /// 按输入顺序合并多份答卷
    pub fn combine<'a>(results: impl IntoIterator<Item = &'a DocumentResult>) -> Self {
        let rows = results
            .into_iter()
            .flat_map(|result| Self::for_document(result).rows)
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

const HEADERS: [&str; 6] = [
    "Roll Number",
    "No",
    "Question",
    "Answers_student",
    "Similarity (%)",
    "Assigned Marks",
];

/// 表格单元格的最大显示宽度（字符数）
const MAX_CELL_WIDTH: usize = 40;

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 6]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.document_id.clone(),
                    row.question_number.clone(),
                    crate::utils::logging::truncate_text(&row.question_text, MAX_CELL_WIDTH),
                    crate::utils::logging::truncate_text(&row.student_answer, MAX_CELL_WIDTH),
                    format!("{:.2}", row.similarity),
                    format!("{:.2}", row.awarded_marks),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(f, &HEADERS.map(String::from), &widths)?;
        let separator = widths.map(|w| "-".repeat(w));
        write_line(f, &separator, &widths)?;
        for row in &cells {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String; 6], widths: &[usize; 6]) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    writeln!(f, "{}", line.join(" | ").trim_end())
}
