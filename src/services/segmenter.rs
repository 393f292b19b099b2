//! 答卷分段 - 业务能力层
//!
//! 把一份答卷的原始文本切分成按顺序排列的 (题目标签, 作答文本) 题块

use crate::models::answer::RawRecord;

/// 题块起始前缀：大写 Q 加一个空格
pub const BLOCK_PREFIX: &str = "Q ";

/// 判断一行（已去除首尾空白）是否是题块边界
pub fn is_block_boundary(trimmed_line: &str) -> bool {
    trimmed_line.starts_with(BLOCK_PREFIX)
}

/// 切分答卷文本
///
/// - 以 `"Q "` 开头的行开启新题块，该行即题块标签
/// - 其余行以单个空格拼接到当前题块的作答文本
/// - 第一个题块之前的行被丢弃
/// - 没有任何题块边界时返回空列表（不是错误）
pub fn segment(raw_text: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in raw_text.lines() {
        let line = line.trim();

        if is_block_boundary(line) {
            if let Some((label, text)) = current.take() {
                records.push(close_block(label, text));
            }
            current = Some((line.to_string(), String::new()));
        } else if let Some((_, text)) = current.as_mut() {
            text.push(' ');
            text.push_str(line);
        }
    }

    if let Some((label, text)) = current {
        records.push(close_block(label, text));
    }

    records
}

fn close_block(label: String, text: String) -> RawRecord {
    RawRecord {
        label,
        text: text.trim().to_string(),
    }
}
