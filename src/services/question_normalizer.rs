//! 题号解析 - 业务能力层

use regex::Regex;
use std::sync::LazyLock;

/// `Q`，可选的一个空白字符，然后是一串数字
static QUESTION_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Q\s?(\d+)").expect("题号正则表达式无效"));

/// 从题块标签中解析题号和题干
///
/// # 返回
/// - 找到题号：`(Some(数字串), 去掉第一处匹配后的标签)`
/// - 未找到：`(None, 原标签)`
pub fn normalize(label: &str) -> (Option<String>, String) {
    let Some(caps) = QUESTION_NUMBER_RE.captures(label) else {
        return (None, label.to_string());
    };

    // captures 成功时第 0 组和第 1 组必然存在
    let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
        return (None, label.to_string());
    };

    let question_text = format!("{}{}", &label[..whole.start()], &label[whole.end()..]);
    (
        Some(number.as_str().to_string()),
        question_text.trim().to_string(),
    )
}
