//! Unified error types for the folio library.

use thiserror::Error;

/// Main error type for folio operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A column spec named a field that a record does not carry.
    ///
    /// The sample datasets are static, so this indicates a mismatch between a
    /// sheet's column specs and its row source rather than bad input.
    #[error("Sheet '{sheet}' has no field '{field}' in one of its records")]
    MissingField { sheet: String, field: String },

    /// Workbook serialization error
    #[error("Workbook error: {0}")]
    Workbook(String),
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::Workbook(err.to_string())
    }
}

/// Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;
