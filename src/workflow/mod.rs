pub mod document_ctx;
pub mod grading_flow;

pub use document_ctx::DocumentCtx;
pub use grading_flow::GradingFlow;
