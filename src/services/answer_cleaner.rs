//! 答案清洗 - 业务能力层

/// 作答文本中需要去除的样板标记
pub const ANSWER_MARKER: &str = "Answer: ";

/// 去除所有 `"Answer: "` 标记并去掉首尾空白
///
/// 反复替换直到不再出现标记，保证 `clean(clean(x)) == clean(x)`
pub fn clean(answer_text: Option<&str>) -> String {
    let Some(text) = answer_text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let mut cleaned = text.to_string();
    while cleaned.contains(ANSWER_MARKER) {
        cleaned = cleaned.replace(ANSWER_MARKER, "");
    }
    cleaned.trim().to_string()
}
