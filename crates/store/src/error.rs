//! Error types for the store crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Automatic `Display` and `Error` trait implementations

use crate::types::MovieId;
use thiserror::Error;

/// Errors the store can report.
///
/// There is exactly one failure mode: an operation was given an id that
/// matches no current record. It is never fatal — mutations become no-ops
/// and lookups return the error so callers can distinguish it
/// programmatically instead of parsing log text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id exists in the store.
    #[error("No movie found with id {id}")]
    NotFound { id: MovieId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
