/// 答案匹配评分服务
///
/// 负责按题号把学生作答与参考答案连接起来，计算相似度并折算得分
use crate::models::answer::{ScoredAnswer, StudentAnswer};
use crate::models::reference::ReferenceKey;
use crate::services::similarity::similarity;
use tracing::debug;

/// 相似度分档：(相似度下限, 得分比例)，从高到低排列
///
/// 分档是固定的政策常量，不做插值
pub const MARK_BANDS: [(f64, f64); 3] = [(90.0, 1.0), (70.0, 0.75), (50.0, 0.5)];

/// 按相似度分档折算得分
///
/// | 相似度 | 得分 |
/// |---|---|
/// | ≥ 90 | 满分 |
/// | [70, 90) | 75% |
/// | [50, 70) | 50% |
/// | < 50 | 0 |
pub fn assign_marks(similarity: f64, max_marks: f64) -> f64 {
    MARK_BANDS
        .iter()
        .find(|(threshold, _)| similarity >= *threshold)
        .map(|(_, ratio)| max_marks * ratio)
        .unwrap_or(0.0)
}

/// 匹配结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    /// 成功匹配并评分的作答（保持学生答卷中的顺序）
    pub scored: Vec<ScoredAnswer>,
    /// 题号无法解析或不在参考答案中的作答
    pub unmatched: Vec<StudentAnswer>,
}

/// 答案匹配评分服务
pub struct MatchingService<'a> {
    key: &'a ReferenceKey,
}

impl<'a> MatchingService<'a> {
    /// 创建新的匹配服务
    pub fn new(key: &'a ReferenceKey) -> Self {
        Self { key }
    }

    /// 按题号内连接并评分
    ///
    /// 没有题号或题号不在参考答案中的作答不计分、不报错，放入 `unmatched`
    pub fn score(&self, students: &[StudentAnswer]) -> MatchOutcome {
        let mut outcome = MatchOutcome::default();

        for student in students {
            let entry = student
                .question_number
                .as_deref()
                .and_then(|number| self.key.get(number));

            let Some(entry) = entry else {
                debug!("题号 {} 无法匹配参考答案，跳过", student.display_number());
                outcome.unmatched.push(student.clone());
                continue;
            };

            let score = similarity(&student.answer_text, &entry.reference_text);
            let awarded = assign_marks(score, entry.max_marks);

            outcome.scored.push(ScoredAnswer {
                question_number: entry.question_number.clone(),
                question_text: student.question_text.clone(),
                student_text: student.answer_text.clone(),
                reference_text: entry.reference_text.clone(),
                similarity: score,
                max_marks: entry.max_marks,
                awarded_marks: awarded,
            });
        }

        outcome
    }
}
