//! 答卷处理上下文
//!
//! 封装"我正在处理第几份答卷、它来自哪个文件"这一信息

use std::fmt::Display;

/// 答卷处理上下文
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// 答卷索引（从1开始，仅用于日志显示）
    pub document_index: usize,

    /// 答卷来源名称（文件名）
    pub source_name: String,
}

impl DocumentCtx {
    /// 创建新的答卷上下文
    pub fn new(document_index: usize, source_name: impl Into<String>) -> Self {
        Self {
            document_index,
            source_name: source_name.into(),
        }
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[答卷 #{} {}]", self.document_index, self.source_name)
    }
}
