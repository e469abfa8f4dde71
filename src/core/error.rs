//! Error types for data loading.

use thiserror::Error;

/// Errors that can occur when loading config, catalog or map data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A grid row is a different width than the first row.
    #[error("Ragged grid in '{path}': row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        path: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A grid cell is not an integer code.
    #[error("Invalid cell '{value}' in '{path}' at row {row}, column {column}")]
    InvalidCell {
        path: String,
        row: usize,
        column: usize,
        value: String,
    },
}
