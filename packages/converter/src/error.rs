//! Error types for the converter.
//!
//! Only two conditions are terminal for a run: the source workbook
//! cannot be read, or the destination CSV cannot be written. Everything
//! else (short rows, unparseable addresses, empty optional fields) is
//! absorbed by defaulting to empty strings.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// The source workbook is missing, corrupt, or unparsable.
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// The workbook contains no worksheet to convert.
    #[error("No worksheet found in {}", .path.display())]
    NoWorksheet { path: PathBuf },

    /// The destination CSV could not be created or written.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;
