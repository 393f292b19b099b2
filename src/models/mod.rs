pub mod answer;
pub mod document;
pub mod loaders;
pub mod reference;
pub mod result;

pub use answer::{RawRecord, ScoredAnswer, StudentAnswer};
pub use document::{DocumentResult, SubmittedDocument, UNKNOWN_DOCUMENT_ID};
pub use loaders::{list_document_files, load_document, load_reference_table};
pub use reference::{ReferenceEntry, ReferenceKey, ReferenceTable};
pub use result::{ResultRow, ResultTable};
