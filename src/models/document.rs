use super::answer::{ScoredAnswer, StudentAnswer};
use serde::{Deserialize, Serialize};

/// 学号缺失时使用的占位值
pub const UNKNOWN_DOCUMENT_ID: &str = "Unknown";

/// 待评分的答卷（已转换为纯文本）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedDocument {
    /// 来源名称（通常是文件名），用于日志与错误定位
    pub source_name: String,
    pub raw_text: String,
}

impl SubmittedDocument {
    pub fn new(source_name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// 单份答卷的评分结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    pub document_id: String,
    pub source_name: String,
    pub entries: Vec<ScoredAnswer>,
    /// 未参与评分的作答（题号无法解析或不在参考答案中），仅用于诊断
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<StudentAnswer>,
    pub total_awarded: f64,
    pub total_possible: f64,
}

impl DocumentResult {
    /// 得分率（满分为 0 时返回 0）
    pub fn percentage(&self) -> f64 {
        if self.total_possible > 0.0 {
            self.total_awarded / self.total_possible * 100.0
        } else {
            0.0
        }
    }
}
