//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量答卷处理器
//! - 管理应用生命周期（初始化、运行）
//! - 加载参考答案、扫描答卷目录
//! - 控制并发数量（Semaphore）
//! - 输出合并成绩表与全局统计
//!
//! ### `document_processor` - 单份答卷处理器
//! - 读取单份答卷
//! - 调用 `GradingFlow` 完成评分
//! - 把错误限制在本份答卷内
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<答卷>)
//!     ↓
//! document_processor (处理单份答卷)
//!     ↓
//! workflow::GradingFlow (分段 → 解析 → 清洗 → 评分 → 汇总)
//!     ↓
//! services (能力层：segmenter / normalizer / cleaner / matching / aggregator)
//! ```

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::{grade_documents, App, BatchReport};
pub use document_processor::{process_document, DocumentSource};
