//! Transient export document model.
//!
//! A [`Document`] is assembled per export invocation and discarded once the
//! workbook bytes are produced. The builder guarantees that every columnar
//! row carries exactly one cell per column spec.

use crate::catalog::Value;
use crate::report::types::ColumnSpec;

/// The in-memory export document: an ordered sequence of sheets.
#[derive(Debug, Default)]
pub struct Document {
    pub sheets: Vec<Sheet>,
}

/// One sheet of the export document.
#[derive(Debug)]
pub struct Sheet {
    /// Worksheet tab name
    pub name: &'static str,
    /// Merged title line
    pub title: &'static str,
    /// Plain note lines between title and header
    pub notes: &'static [&'static str],
    /// Uniform column width
    pub col_width: f64,
    /// Sheet body
    pub body: SheetBody,
}

/// Body of a sheet: either a columnar table or a free-text query log.
#[derive(Debug)]
pub enum SheetBody {
    Table {
        columns: &'static [ColumnSpec],
        rows: Vec<Vec<Value>>,
    },
    Queries(Vec<&'static str>),
}

impl Sheet {
    /// Number of columns the sheet occupies.
    pub fn column_count(&self) -> usize {
        match &self.body {
            SheetBody::Table { columns, .. } => columns.len(),
            SheetBody::Queries(_) => 1,
        }
    }
}
