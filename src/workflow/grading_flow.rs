//! 答卷评分流程 - 流程层
//!
//! 核心职责：定义"一份答卷"的完整评分流程
//!
//! 流程顺序：
//! 1. 提取学号
//! 2. 分段 → 题号解析 → 答案清洗
//! 3. 与参考答案匹配评分
//! 4. 汇总

use tracing::{debug, info, warn};

use crate::error::{DocumentError, GradingStage, ReferenceKeyError};
use crate::models::answer::{RawRecord, ScoredAnswer, StudentAnswer};
use crate::models::document::{DocumentResult, SubmittedDocument};
use crate::models::reference::{ReferenceKey, ReferenceTable};
use crate::services::{
    aggregate, clean, extract_document_id, normalize, segment, MatchingService,
};
use crate::utils::logging::truncate_text;
use crate::workflow::document_ctx::DocumentCtx;

/// 答卷评分流程
///
/// - 编排单份答卷的完整评分流程
/// - 持有本批次共享的只读参考答案（或其校验错误）
/// - 不保存任何跨答卷的可变状态
pub struct GradingFlow {
    key: Result<ReferenceKey, ReferenceKeyError>,
    verbose_logging: bool,
}

impl GradingFlow {
    /// 使用已校验的参考答案创建流程
    pub fn new(key: ReferenceKey) -> Self {
        Self {
            key: Ok(key),
            verbose_logging: false,
        }
    }

    /// 从原始参考答案表创建流程
    ///
    /// 表格结构错误不会在这里返回，而是在每份答卷的评分阶段报告，
    /// 使每份答卷都能得到带自身标识的错误
    pub fn from_table(table: &ReferenceTable) -> Self {
        let key = ReferenceKey::from_table(table);
        if let Err(e) = &key {
            warn!("⚠️ 参考答案表无效，所有答卷将无法评分: {}", e);
        }
        Self {
            key,
            verbose_logging: false,
        }
    }

    /// 是否输出逐题详细日志
    pub fn with_verbose_logging(mut self, verbose: bool) -> Self {
        self.verbose_logging = verbose;
        self
    }

    /// 参考答案（校验失败时为错误）
    pub fn reference_key(&self) -> Result<&ReferenceKey, &ReferenceKeyError> {
        self.key.as_ref()
    }

    /// 评分单份答卷
    pub fn run(
        &self,
        document: &SubmittedDocument,
        ctx: &DocumentCtx,
    ) -> Result<DocumentResult, DocumentError> {
        let document_id = extract_document_id(&document.raw_text);
        info!("[答卷 {}] 学号: {}", ctx.document_index, document_id);

        // ========== 分段 ==========
        let records = segment(&document.raw_text);
        if records.is_empty() {
            warn!(
                "[答卷 {}] ⚠️ 未找到任何以 \"Q \" 开头的题块，本份答卷记 0 分",
                ctx.document_index
            );
        } else {
            info!("[答卷 {}] ✓ 分段完成，共 {} 个题块", ctx.document_index, records.len());
        }

        // ========== 题号解析 + 答案清洗 ==========
        let students = to_student_answers(&records);

        // ========== 匹配评分 ==========
        let key = self.key.as_ref().map_err(|e| {
            DocumentError::new(
                &ctx.source_name,
                Some(document_id.clone()),
                GradingStage::Score,
                e.clone(),
            )
        })?;

        let outcome = MatchingService::new(key).score(&students);

        if !outcome.unmatched.is_empty() {
            warn!(
                "[答卷 {}] ⚠️ {} 个题块无法匹配参考答案，不计分",
                ctx.document_index,
                outcome.unmatched.len()
            );
        }
        if self.verbose_logging {
            self.log_details(ctx.document_index, &outcome.scored, &outcome.unmatched);
        }

        // ========== 汇总 ==========
        let result = aggregate(
            &document_id,
            &ctx.source_name,
            outcome.scored,
            outcome.unmatched,
            key,
        );

        info!(
            "[答卷 {}] ✅ 评分完成: {:.2}/{:.2}",
            ctx.document_index, result.total_awarded, result.total_possible
        );

        Ok(result)
    }

    // ========== 日志辅助方法 ==========

    fn log_details(
        &self,
        document_index: usize,
        scored: &[ScoredAnswer],
        unmatched: &[StudentAnswer],
    ) {
        for entry in scored {
            info!(
                "[答卷 {}]   {} | 作答: {}",
                document_index,
                entry,
                truncate_text(&entry.student_text, 60)
            );
        }
        for student in unmatched {
            debug!(
                "[答卷 {}]   未匹配 题号 {} | 标签: {}",
                document_index,
                student.display_number(),
                truncate_text(&student.question_text, 60)
            );
        }
    }
}

/// 题块 → 学生作答（解析题号、清洗答案）
pub fn to_student_answers(records: &[RawRecord]) -> Vec<StudentAnswer> {
    records
        .iter()
        .map(|record| {
            let (question_number, question_text) = normalize(&record.label);
            StudentAnswer {
                question_number,
                question_text,
                answer_text: clean(Some(&record.text)),
            }
        })
        .collect()
}
