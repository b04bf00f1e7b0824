//! Report kinds, sheet specifications, and document construction.

// Submodule declarations
pub mod builder;
pub mod document;
pub mod types;

// Re-exports
pub use builder::{build_document, build_sheet};
pub use document::{Document, Sheet, SheetBody};
pub use types::{CellFmt, ColumnSpec, ReportKind, SheetLayout, SheetSpec};
