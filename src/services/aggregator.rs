//! 成绩汇总 - 业务能力层

use crate::models::answer::{ScoredAnswer, StudentAnswer};
use crate::models::document::DocumentResult;
use crate::models::reference::ReferenceKey;

/// 汇总单份答卷的成绩
///
/// 满分取整张参考答案表的分值之和，而不是只取已作答题目，
/// 漏答的题目按 0 分计入
pub fn aggregate(
    document_id: &str,
    source_name: &str,
    scored: Vec<ScoredAnswer>,
    unmatched: Vec<StudentAnswer>,
    key: &ReferenceKey,
) -> DocumentResult {
    let total_awarded = scored.iter().map(|entry| entry.awarded_marks).sum();

    DocumentResult {
        document_id: document_id.to_string(),
        source_name: source_name.to_string(),
        entries: scored,
        unmatched,
        total_awarded,
        total_possible: key.total_possible(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reference::ReferenceEntry;

    fn key() -> ReferenceKey {
        ReferenceKey::new(
            [("1", 10.0), ("2", 5.0), ("3", 2.5)]
                .into_iter()
                .map(|(n, m)| ReferenceEntry {
                    question_number: n.to_string(),
                    reference_text: String::new(),
                    max_marks: m,
                })
                .collect(),
        )
        .unwrap()
    }

    fn scored(number: &str, awarded: f64) -> ScoredAnswer {
        ScoredAnswer {
            question_number: number.to_string(),
            question_text: String::new(),
            student_text: String::new(),
            reference_text: String::new(),
            similarity: 0.0,
            max_marks: 10.0,
            awarded_marks: awarded,
        }
    }

    #[test]
    fn test_totals() {
        let result = aggregate(
            "42",
            "a.txt",
            vec![scored("1", 7.5), scored("2", 2.5)],
            Vec::new(),
            &key(),
        );
        assert_eq!(result.total_awarded, 10.0);
        assert_eq!(result.total_possible, 17.5);
        assert_eq!(result.entries.len(), 2);
    }

    #[test]
    fn test_total_possible_ignores_answered_count() {
        let none = aggregate("1", "a.txt", Vec::new(), Vec::new(), &key());
        let one = aggregate("1", "a.txt", vec![scored("3", 2.5)], Vec::new(), &key());

        assert_eq!(none.total_awarded, 0.0);
        assert_eq!(none.total_possible, 17.5);
        assert_eq!(one.total_possible, none.total_possible);
    }
}
