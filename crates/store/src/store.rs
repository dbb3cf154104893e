//! The in-memory movie store.
//!
//! One unindexed `Vec` of records plus a monotone id counter. Every
//! operation is a direct traversal, filter, sort, or map over that
//! sequence — there is deliberately no secondary index, no persistence,
//! and no concurrency story (callers in a multi-threaded context must
//! wrap the whole store in their own lock).
//!
//! Rust concepts demonstrated:
//! - Ownership: the store owns the records, getters return borrows
//! - `&mut self` on every operation that can reorder or mutate
//! - `f32::total_cmp` for a total order over floats

use crate::error::{Result, StoreError};
use crate::rating::generate_rating;
use crate::types::{MovieDraft, MovieId, MovieRecord};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

/// Owner of the authoritative record sequence.
///
/// ## Design Note
/// The sort-based fetches (`sorted_by_title`, `top_rated`, and friends)
/// reorder the stored sequence *in place* before returning a view of it.
/// Stored order is observable state here, so a later `all()` sees the
/// reordering. That is intentional, not an accident of implementation.
#[derive(Debug)]
pub struct MovieStore {
    records: Vec<MovieRecord>,
    /// Next id to stamp. Monotonically increasing, never reused —
    /// deletions do not wind it back.
    next_id: MovieId,
    rng: StdRng,
}

impl MovieStore {
    /// Build a store from an initial list of drafts.
    ///
    /// Each draft is stamped in input order: ids start at 0 and count up,
    /// ratings come from [`generate_rating`]. An empty list yields a
    /// valid empty store.
    pub fn new(initial: Vec<MovieDraft>) -> Self {
        Self::with_rng(initial, StdRng::from_os_rng())
    }

    /// Same as [`MovieStore::new`] but with a deterministic rating
    /// sequence. Useful in tests.
    pub fn with_seed(initial: Vec<MovieDraft>, seed: u64) -> Self {
        Self::with_rng(initial, StdRng::seed_from_u64(seed))
    }

    fn with_rng(initial: Vec<MovieDraft>, rng: StdRng) -> Self {
        let mut store = Self {
            records: Vec::with_capacity(initial.len()),
            next_id: 0,
            rng,
        };
        for draft in initial {
            store.stamp_and_append(draft);
        }
        debug!(count = store.records.len(), "movie store initialized");
        store
    }

    /// Stamp a draft with a fresh id and rating, then append it.
    ///
    /// Generated values take precedence: if the draft's extra bag carries
    /// `id` or `rating` keys, they are dropped here.
    fn stamp_and_append(&mut self, draft: MovieDraft) -> &MovieRecord {
        let MovieDraft {
            title,
            description,
            subtitle,
            thumb,
            genre,
            mut extra,
        } = draft;
        extra.remove("id");
        extra.remove("rating");

        let record = MovieRecord {
            id: self.next_id,
            rating: generate_rating(&mut self.rng),
            title,
            description,
            subtitle,
            thumb,
            genre,
            extra,
        };
        self.next_id += 1;
        let idx = self.records.len();
        self.records.push(record);
        &self.records[idx]
    }

    fn position(&self, id: MovieId) -> Option<usize> {
        self.records.iter().position(|m| m.id == id)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All records, in current stored order.
    pub fn all(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Records whose genre exactly equals `genre`, order preserved.
    ///
    /// Records with no genre never match. Returns an empty Vec when
    /// nothing matches.
    pub fn by_genre(&self, genre: &str) -> Vec<&MovieRecord> {
        self.records
            .iter()
            .filter(|m| m.genre.as_deref() == Some(genre))
            .collect()
    }

    /// Every record with `subtitle` and `thumb` dropped.
    ///
    /// All other fields, including anything in the extra bag, come
    /// through untouched. Order preserved. Does not reorder the store.
    pub fn summaries(&self) -> Vec<MovieRecord> {
        self.records
            .iter()
            .map(|m| {
                let mut summary = m.clone();
                summary.subtitle = None;
                summary.thumb = None;
                summary
            })
            .collect()
    }

    /// Look up one record by id.
    ///
    /// Idempotent: repeated calls return the same result absent an
    /// intervening mutation.
    pub fn find(&self, id: MovieId) -> Result<&MovieRecord> {
        match self.records.iter().find(|m| m.id == id) {
            Some(record) => Ok(record),
            None => {
                warn!(id, "lookup failed: no movie with that id");
                Err(StoreError::NotFound { id })
            }
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // =========================================================================
    // Sorting queries (in place — these permanently reorder the store)
    // =========================================================================

    /// Sort ascending by title (ordinal comparison) and return the full
    /// sequence.
    ///
    /// Records without a title sort before all titled records
    /// (`Option`'s ordering: `None < Some`). The sort is stable, so ties
    /// keep their relative order.
    pub fn sorted_by_title(&mut self) -> &[MovieRecord] {
        self.records
            .sort_by(|a, b| a.title.as_deref().cmp(&b.title.as_deref()));
        &self.records
    }

    /// Sort ascending by rating and return the full sequence.
    pub fn sorted_by_rating(&mut self) -> &[MovieRecord] {
        self.records.sort_by(|a, b| a.rating.total_cmp(&b.rating));
        &self.records
    }

    /// Sort descending by rating and return the first 3 (or fewer).
    pub fn top_rated(&mut self) -> &[MovieRecord] {
        self.records.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        let take = self.records.len().min(3);
        &self.records[..take]
    }

    /// The 2 highest-rated records followed by the 2 lowest-rated.
    ///
    /// Sorts the store ascending by rating in place, then concatenates
    /// the last-2 slice with the first-2 slice. With fewer than 4
    /// records the slices clamp to what exists and may overlap — a
    /// 2-record store yields both records twice. Never panics.
    pub fn top_and_bottom_by_rating(&mut self) -> Vec<MovieRecord> {
        self.records.sort_by(|a, b| a.rating.total_cmp(&b.rating));
        let len = self.records.len();
        let top = &self.records[len.saturating_sub(2)..];
        let bottom = &self.records[..len.min(2)];
        top.iter().chain(bottom.iter()).cloned().collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Stamp a new record from `draft` and append it to the end.
    ///
    /// Returns a borrow of the stored record so callers can see the
    /// assigned id and rating.
    pub fn add(&mut self, draft: MovieDraft) -> &MovieRecord {
        let record = self.stamp_and_append(draft);
        debug!(id = record.id, "movie added");
        record
    }

    /// Remove exactly the record with `id`.
    ///
    /// The id counter is unaffected and remaining order is preserved.
    /// A missing id leaves the store unchanged.
    pub fn delete(&mut self, id: MovieId) -> Result<()> {
        match self.position(id) {
            Some(idx) => {
                self.records.remove(idx);
                debug!(id, "movie deleted");
                Ok(())
            }
            None => {
                warn!(id, "delete failed: no movie with that id");
                Err(StoreError::NotFound { id })
            }
        }
    }

    /// Overwrite the title of the record with `id`. No other field
    /// changes; in particular the rating stays as stamped.
    pub fn edit_title(&mut self, id: MovieId, new_title: impl Into<String>) -> Result<()> {
        match self.position(id) {
            Some(idx) => {
                self.records[idx].title = Some(new_title.into());
                debug!(id, "movie title edited");
                Ok(())
            }
            None => {
                warn!(id, "edit failed: no movie with that id");
                Err(StoreError::NotFound { id })
            }
        }
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_store() {
        let store = MovieStore::with_seed(Vec::new(), 1);
        assert!(store.is_empty());
        assert!(store.all().is_empty());
        assert!(store.by_genre("Drama").is_empty());
    }

    #[test]
    fn test_stamp_strips_smuggled_id_and_rating() {
        let mut draft = MovieDraft::titled("Heat");
        draft.extra.insert("id".to_string(), json!(999));
        draft.extra.insert("rating".to_string(), json!(0.0));
        draft
            .extra
            .insert("director".to_string(), json!("Michael Mann"));

        let mut store = MovieStore::with_seed(Vec::new(), 1);
        let record = store.add(draft);

        // Generated values win; the honest extra field survives.
        assert_eq!(record.id, 0);
        assert!((1.0..=5.0).contains(&record.rating));
        assert!(!record.extra.contains_key("id"));
        assert!(!record.extra.contains_key("rating"));
        assert_eq!(record.extra["director"], json!("Michael Mann"));
    }

    #[test]
    fn test_counter_survives_deletion() {
        let mut store = MovieStore::with_seed(
            vec![MovieDraft::titled("A"), MovieDraft::titled("B")],
            1,
        );

        store.delete(1).unwrap();
        let record = store.add(MovieDraft::titled("C"));

        // Id 1 is gone for good; the counter never winds back.
        assert_eq!(record.id, 2);
        let ids: Vec<_> = store.all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}
