//! # Answer Sheet Grader
//!
//! 一个用于自动批改主观题答卷的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 答卷、题块、参考答案、成绩表等数据结构
//! - `models/loaders` - 从磁盘加载参考答案（TOML）和答卷文本
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数，只处理单份答卷中的数据
//! - `segmenter` - 按 `"Q "` 前缀切分题块
//! - `question_normalizer` - 解析题号
//! - `answer_cleaner` - 去除 `"Answer: "` 标记
//! - `similarity` / `matching_service` - 相似度与分档给分
//! - `aggregator` - 汇总总分
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份答卷"的完整评分流程
//! - `DocumentCtx` - 上下文封装（答卷索引 + 来源）
//! - `GradingFlow` - 流程编排（分段 → 解析 → 清洗 → 评分 → 汇总）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量答卷处理器，管理并发与统计
//! - `orchestrator/document_processor` - 单份答卷处理器，隔离单份答卷的错误
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, OutputFormat};
pub use error::{DocumentError, GradingError, GradingStage, LoadError, ReferenceKeyError};
pub use models::{
    DocumentResult, RawRecord, ReferenceEntry, ReferenceKey, ReferenceTable, ResultRow,
    ResultTable, ScoredAnswer, StudentAnswer, SubmittedDocument,
};
pub use orchestrator::{grade_documents, App, BatchReport};
pub use workflow::{DocumentCtx, GradingFlow};
