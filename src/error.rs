use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, LeadError>;

/// Error type covering the different failure cases that can occur when the
/// tool reads lead exports, consolidates them, or writes the merged workbook.
#[derive(Debug, Error)]
pub enum LeadError {
    /// Wrapper for IO failures that are not tied to a specific input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the alias configuration file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when the bytes of a selected file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a file's contents could not be decoded as a spreadsheet.
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    /// Raised when an alias configuration cannot be used for resolution.
    #[error("invalid alias configuration: {0}")]
    InvalidAliases(String),

    /// Raised when the caller did not provide any input file.
    #[error("no input files selected")]
    NoFilesSelected,

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised by the command line front end when no row produced a lead.
    #[error("no leads with a valid mobile number were found")]
    NoLeadsFound,

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
