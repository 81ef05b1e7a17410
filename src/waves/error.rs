//! Error types for gameplay settings loading.

use thiserror::Error;

/// Errors that can occur when loading gameplay settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A wave entry holds a value that would break timing or spawning.
    #[error("Wave {wave}: {details}")]
    InvalidWave { wave: usize, details: String },
}
