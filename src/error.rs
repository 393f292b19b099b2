use std::fmt;
use thiserror::Error;

/// 评分流程错误类型
#[derive(Debug, Error)]
pub enum GradingError {
    /// 参考答案表结构错误
    #[error("参考答案表错误: {0}")]
    ReferenceKey(#[from] ReferenceKeyError),
    /// 文件加载错误
    #[error("加载错误: {0}")]
    Load(#[from] LoadError),
    /// 文档任务异常终止（panic 或被取消）
    #[error("文档任务执行失败: {0}")]
    TaskFailed(String),
}

/// 参考答案表结构错误
///
/// 这类错误不可恢复，受影响的文档直接中止评分，不使用默认值
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReferenceKeyError {
    /// 缺少必需的列
    #[error("参考答案表缺少 '{column}' 列")]
    MissingColumn { column: String },
    /// 某一行缺少必需的单元格
    #[error("参考答案表第 {row} 行缺少 '{column}' 的值")]
    MissingCell { row: usize, column: String },
    /// 分值无法解析为数字
    #[error("参考答案表第 {row} 行的分值 '{value}' 不是有效数字")]
    InvalidMarks { row: usize, value: String },
    /// 分值为负数
    #[error("参考答案表第 {row} 行的分值 {value} 不能为负数")]
    NegativeMarks { row: usize, value: f64 },
    /// 题号重复，连接结果会产生歧义
    #[error("参考答案表中题号 {question_number} 重复 (第 {first_row} 行与第 {row} 行)")]
    DuplicateQuestion {
        question_number: String,
        first_row: usize,
        row: usize,
    },
}

/// 文件加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 文件内容不是合法的 UTF-8 文本
    #[error("文件不是有效的 UTF-8 文本 ({path}): {source}")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// 单个文档的评分阶段，用于错误定位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingStage {
    /// 读取答卷文件
    Load,
    /// 与参考答案匹配评分
    Score,
    /// 文档任务本身（panic 或被取消）
    Task,
}

impl fmt::Display for GradingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GradingStage::Load => "加载",
            GradingStage::Score => "匹配评分",
            GradingStage::Task => "任务执行",
        };
        write!(f, "{}", name)
    }
}

/// 单个文档的评分失败
///
/// 携带文档来源、学号（如已解析）和出错阶段，便于人工排查
#[derive(Debug, Error)]
#[error("[{source_name} 学号#{}] {stage}阶段失败: {error}", .document_id.as_deref().unwrap_or("?"))]
pub struct DocumentError {
    pub source_name: String,
    pub document_id: Option<String>,
    pub stage: GradingStage,
    #[source]
    pub error: GradingError,
}

impl DocumentError {
    /// 创建文档错误
    pub fn new(
        source_name: impl Into<String>,
        document_id: Option<String>,
        stage: GradingStage,
        error: impl Into<GradingError>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            document_id,
            stage,
            error: error.into(),
        }
    }
}

// ========== 便捷构造函数 ==========

impl LoadError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        LoadError::ReadFailed {
            path: path.into(),
            source,
        }
    }
}

impl ReferenceKeyError {
    /// 创建缺列错误
    pub fn missing_column(column: impl Into<String>) -> Self {
        ReferenceKeyError::MissingColumn {
            column: column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_display_contains_identity_and_stage() {
        let err = DocumentError::new(
            "student_a.txt",
            Some("42".to_string()),
            GradingStage::Score,
            ReferenceKeyError::missing_column("Marks"),
        );
        let message = err.to_string();

        assert!(message.contains("student_a.txt"));
        assert!(message.contains("42"));
        assert!(message.contains("匹配评分"));
        assert!(message.contains("Marks"));
    }

    #[test]
    fn test_document_error_without_id() {
        let err = DocumentError::new(
            "broken.txt",
            None,
            GradingStage::Load,
            GradingError::TaskFailed("panic".to_string()),
        );
        assert!(err.to_string().contains("学号#?"));
    }
}
