pub mod text_loader;
pub mod toml_loader;

pub use text_loader::{list_document_files, load_document};
pub use toml_loader::{load_reference_table, parse_reference_table};
