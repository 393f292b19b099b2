//! 文本相似度 - 业务能力层
//!
//! 基于插入/删除编辑距离（Indel）的归一化比值：
//! `100 * 2 * LCS(a, b) / (|a| + |b|)`，按 Unicode 字符计算

/// 计算两段文本的相似度 [0, 100]
///
/// 任一侧为空时返回 0（两侧都为空也是 0，不会给空白答案满分）
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let matched = 2 * longest_common_subsequence(&a, &b);
    let total = a.len() + b.len();

    matched as f64 / total as f64 * 100.0
}

/// 最长公共子序列长度（滚动数组，内存 O(min(|a|, |b|))）
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for &lc in long {
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(similarity("Paris", "Paris"), 100.0);
        assert_eq!(similarity("水的沸点是100度", "水的沸点是100度"), 100.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("", "Paris"), 0.0);
        assert_eq!(similarity("Paris", ""), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("Water boils at 100 degrees C", "Water boils at 100C"),
            ("Lyon is the capital", "Paris is the capital of France"),
            ("abc", "xyz"),
            ("kitten", "sitting"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_known_ratios() {
        // LCS("kitten", "sitting") = "ittn" = 4 → 2*4/13
        let score = similarity("kitten", "sitting");
        assert!((score - 800.0 / 13.0).abs() < 1e-9);

        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("ab", "abcd"), 2.0 * 2.0 / 6.0 * 100.0);
    }

    #[test]
    fn test_paraphrase_scores_high() {
        let score = similarity("Water boils at 100 degrees C", "Water boils at 100C");
        assert!(score >= 70.0 && score < 90.0, "score = {}", score);
    }

    #[test]
    fn test_range() {
        let score = similarity("Lyon", "Paris is the capital of France");
        assert!((0.0..50.0).contains(&score), "score = {}", score);
    }
}
