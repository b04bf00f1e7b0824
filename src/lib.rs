//! Folio - styled XLSX report exports for a data-analyst portfolio
//!
//! This library turns the portfolio's static sample datasets into
//! downloadable multi-sheet XLSX workbooks: one worksheet per dataset table,
//! with a merged title row, a styled header row, thin-bordered data cells,
//! and per-column number masks (`₦#,##0`, `#,##0`, `0%`).
//!
//! # Example
//!
//! ```
//! use folio::export_project_report;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let export = export_project_report(
//!     "sales-performance-dashboard",
//!     "Sales Performance Dashboard",
//! )?;
//!
//! assert_eq!(export.filename, "sales-performance-dashboard.xlsx");
//! // Hand export.bytes to the host's save-file flow.
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`catalog`]: the static project list and per-project sample tables
//! - [`report`]: report kinds, their sheet/column specs, and document
//!   construction
//! - [`xlsx`]: workbook serialization
//! - [`export`]: the public operation tying the layers together

/// Static project catalog and sample datasets
pub mod catalog;

/// Shared error and string helpers
pub mod common;

/// The public export operation
pub mod export;

/// Report kinds and document construction
pub mod report;

/// XLSX serialization
pub mod xlsx;

// Re-export commonly used types for convenience
pub use catalog::{PROJECTS, Project, find_project};
pub use common::{Error, Result};
pub use export::{CONTENT_TYPE, ExportFile, export_project_report};
pub use report::ReportKind;
