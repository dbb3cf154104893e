//! Error types for the seed-loader crate.

use thiserror::Error;

/// Errors that can occur while reading and parsing a seed file
#[derive(Error, Debug)]
pub enum SeedError {
    /// File could not be found or opened
    #[error("Failed to open seed file: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The seed file is not a JSON array of movie objects
    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SeedError>;
