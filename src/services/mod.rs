pub mod aggregator;
pub mod answer_cleaner;
pub mod document_id;
pub mod matching_service;
pub mod question_normalizer;
pub mod segmenter;
pub mod similarity;

pub use aggregator::aggregate;
pub use answer_cleaner::clean;
pub use document_id::extract_document_id;
pub use matching_service::{assign_marks, MatchOutcome, MatchingService};
pub use question_normalizer::normalize;
pub use segmenter::segment;
pub use similarity::similarity;
