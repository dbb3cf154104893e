//! Core domain types for the movie catalog.
//!
//! This module defines the record shape the store manages.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - `Option<T>` for fields that may be absent
//! - Open records via `#[serde(flatten)]` into a JSON map
//! - Derive macros for common traits

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie, assigned by the store's counter.
///
/// Ids are never reused, even after the record they belonged to is deleted.
pub type MovieId = u64;

// =============================================================================
// Movie Record
// =============================================================================

/// A movie as held by the store.
///
/// The named fields are the known schema; anything else a caller supplied
/// at creation time is preserved verbatim in `extra`. `#[serde(flatten)]`
/// makes those keys sit next to the named fields on the wire, so the
/// record round-trips as one flat JSON object.
///
/// Rust concept: `Option<T>` represents a value that may or may not exist
/// - `Some("Heat".into())` means the movie has a title
/// - `None` means no title was supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Stamped by the store at creation; unique for the store's lifetime.
    pub id: MovieId,
    /// Stamped by the store at creation; in [1.0, 5.0], one decimal digit.
    /// Edits to other fields never change it.
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Subtitle tracks, in caller-supplied order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<Vec<String>>,
    /// Image reference for artwork.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Extension bag: caller fields outside the known schema.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// Movie Draft
// =============================================================================

/// Caller-supplied partial record, before the store stamps it.
///
/// Same shape as [`MovieRecord`] minus `id` and `rating` — those are
/// always generated. A caller that smuggles `id` or `rating` through the
/// extra bag loses: the store strips both keys when stamping, so the
/// generated values take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieDraft {
    /// Convenience constructor for the common title-only case.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
