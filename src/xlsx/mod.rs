//! XLSX serialization of export documents.

// Submodule declarations
pub mod formats;
pub mod writer;

// Re-exports
pub use formats::SheetFormats;
pub use writer::write_document;
