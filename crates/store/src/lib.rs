//! # Store Crate
//!
//! In-memory movie store: one flat record sequence, a monotone id
//! counter, and the query/mutation/reporting operations over it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, MovieDraft, MovieId)
//! - **store**: The MovieStore itself and its eleven operations
//! - **rating**: Random rating generation (uniform [1.0, 5.0], one decimal)
//! - **error**: The single NotFound error type
//!
//! ## Example Usage
//!
//! ```
//! use store::{MovieDraft, MovieStore};
//!
//! let mut store = MovieStore::new(vec![
//!     MovieDraft::titled("Heat"),
//!     MovieDraft::titled("Alien"),
//! ]);
//!
//! // Ids are stamped in input order, starting at 0.
//! assert_eq!(store.all()[0].id, 0);
//! assert_eq!(store.all()[1].id, 1);
//!
//! // Lookups return a typed NotFound instead of panicking.
//! assert!(store.find(99).is_err());
//!
//! // Sorting queries reorder the store in place.
//! let sorted = store.sorted_by_title();
//! assert_eq!(sorted[0].title.as_deref(), Some("Alien"));
//! ```
//!
//! ## Design Notes
//!
//! - The store is single-threaded and synchronous. Concurrent callers
//!   must wrap it in their own mutual-exclusion boundary; nothing here
//!   does that for them.
//! - "Not found" is the only error and is never fatal: it is logged via
//!   `tracing` at the occurrence site and returned as a typed error.

// Public modules
pub mod error;
pub mod rating;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use store::MovieStore;
pub use types::{MovieDraft, MovieId, MovieRecord};
