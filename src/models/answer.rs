use serde::{Deserialize, Serialize};

/// 分段后的原始题块
///
/// `label` 是触发新题块的那一行，`text` 是其后直到下一个题块之前所有行的拼接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub label: String,
    pub text: String,
}

/// 解析并清洗后的学生作答
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAnswer {
    /// 题号，标签中找不到题号时为 None（不参与评分）
    pub question_number: Option<String>,
    pub question_text: String,
    pub answer_text: String,
}

impl StudentAnswer {
    /// 用于日志显示的题号
    pub fn display_number(&self) -> &str {
        self.question_number.as_deref().unwrap_or("Unknown")
    }
}

/// 与参考答案匹配后的评分结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_number: String,
    pub question_text: String,
    pub student_text: String,
    pub reference_text: String,
    /// 相似度 [0, 100]
    pub similarity: f64,
    pub max_marks: f64,
    pub awarded_marks: f64,
}

impl std::fmt::Display for ScoredAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Q{} [相似度: {:.2}] 得分 {:.2}/{:.2}",
            self.question_number, self.similarity, self.awarded_marks, self.max_marks
        )
    }
}
