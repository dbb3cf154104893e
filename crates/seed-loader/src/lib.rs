//! # Seed Loader Crate
//!
//! Reads the JSON seed file that supplies the store's initial records.
//!
//! The store core deliberately knows nothing about files or formats; it
//! takes a `Vec<MovieDraft>` and that's the whole contract. This crate is
//! the external collaborator that produces that Vec from disk.
//!
//! ## Seed format
//!
//! A JSON array of partial movie objects. Any subset of the known fields
//! (`title`, `description`, `subtitle`, `thumb`, `genre`) is fine, and
//! unknown keys are carried along in the draft's extra bag:
//!
//! ```json
//! [
//!   { "title": "Heat", "genre": "Crime", "director": "Michael Mann" },
//!   { "title": "Alien", "genre": "Horror", "thumb": "alien.png" }
//! ]
//! ```

pub mod error;

pub use error::{Result, SeedError};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use store::{MovieDraft, MovieStore};
use tracing::info;

/// Parse a seed document (a JSON array of partial movie objects) into
/// drafts, without touching the filesystem.
pub fn parse_drafts(json: &str) -> serde_json::Result<Vec<MovieDraft>> {
    serde_json::from_str(json)
}

/// Load drafts from a JSON seed file.
pub fn load_drafts(path: &Path) -> Result<Vec<MovieDraft>> {
    let file = File::open(path).map_err(|source| SeedError::FileNotFound {
        path: path.display().to_string(),
        source,
    })?;

    let reader = BufReader::new(file);
    let drafts: Vec<MovieDraft> =
        serde_json::from_reader(reader).map_err(|source| SeedError::ParseError {
            path: path.display().to_string(),
            source,
        })?;

    info!(path = %path.display(), count = drafts.len(), "seed file loaded");
    Ok(drafts)
}

/// Load a seed file and build a store from it in one step.
pub fn load_store(path: &Path) -> Result<MovieStore> {
    Ok(MovieStore::new(load_drafts(path)?))
}
