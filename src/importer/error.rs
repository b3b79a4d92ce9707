// ==========================================
// Sales Payroll - Import Error Types
// ==========================================
// Tool: thiserror derive
// ==========================================

use crate::domain::DomainError;
use thiserror::Error;

/// Import error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("JSON parse failed: {0}")]
    JsonParseError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    // ===== mapping errors =====
    #[error("missing field (row {row}): {field}")]
    MissingField { row: usize, field: String },

    #[error("type conversion failed (row {row}, field {field}): {value}")]
    TypeConversionError {
        row: usize,
        field: String,
        value: String,
    },

    // ===== reference errors =====
    #[error("duplicate zone id: {0}")]
    DuplicateZone(i32),

    #[error("duplicate representative number: {0}")]
    DuplicateRepresentative(i32),

    #[error("representative {number} references unknown zone {zone_id}")]
    UnknownZone { number: i32, zone_id: i32 },

    #[error("unknown representative number (row {row}): {number}")]
    UnknownRepresentative { row: usize, number: i32 },

    // ===== domain rejections =====
    #[error("representative {number} rejected: {source}")]
    InvalidRepresentative {
        number: i32,
        #[source]
        source: DomainError,
    },

    #[error("row {row} rejected: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: DomainError,
    },
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParseError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result alias
pub type ImportResult<T> = Result<T, ImportError>;
