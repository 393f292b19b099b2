//! 单份答卷处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是单份答卷的边界：读取答卷、调用 `GradingFlow`、记录结果。
//! 这里发生的任何错误都只影响当前答卷，不会波及同批次的其他答卷。

use crate::error::{DocumentError, GradingStage};
use crate::models::document::{DocumentResult, SubmittedDocument};
use crate::models::loaders::text_loader;
use crate::workflow::{DocumentCtx, GradingFlow};
use std::path::PathBuf;
use tracing::{error, info};

/// 答卷来源
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// 磁盘上的文本文件，在任务内读取
    File(PathBuf),
    /// 已在内存中的答卷文本
    InMemory(SubmittedDocument),
}

impl DocumentSource {
    /// 来源名称（用于日志与错误定位）
    pub fn name(&self) -> String {
        match self {
            DocumentSource::File(path) => text_loader::source_name(path),
            DocumentSource::InMemory(document) => document.source_name.clone(),
        }
    }
}

/// 处理单份答卷
///
/// # 参数
/// - `flow`: 本批次共享的评分流程
/// - `source`: 答卷来源
/// - `document_index`: 答卷索引（用于日志）
///
/// # 返回
/// 返回评分结果，或带答卷标识与出错阶段的错误
pub async fn process_document(
    flow: &GradingFlow,
    source: DocumentSource,
    document_index: usize,
) -> Result<DocumentResult, DocumentError> {
    let ctx = DocumentCtx::new(document_index, source.name());
    log_document_start(&ctx);

    let document = match source {
        DocumentSource::File(path) => text_loader::load_document(&path)
            .await
            .map_err(|e| DocumentError::new(&ctx.source_name, None, GradingStage::Load, e))?,
        DocumentSource::InMemory(document) => document,
    };

    match flow.run(&document, &ctx) {
        Ok(result) => {
            log_document_complete(&ctx, &result);
            Ok(result)
        }
        Err(e) => {
            error!("[答卷 {}] ❌ 评分失败: {}", ctx.document_index, e);
            Err(e)
        }
    }
}

// ========== 日志辅助函数 ==========

fn log_document_start(ctx: &DocumentCtx) {
    info!("\n[答卷 {}] {}", ctx.document_index, "─".repeat(30));
    info!("[答卷 {}] 开始处理 {}", ctx.document_index, ctx.source_name);
}

fn log_document_complete(ctx: &DocumentCtx, result: &DocumentResult) {
    info!(
        "[答卷 {}] 题目统计: 计分 {}, 未匹配 {}, 得分率 {:.1}%",
        ctx.document_index,
        result.entries.len(),
        result.unmatched.len(),
        result.percentage()
    );
}
