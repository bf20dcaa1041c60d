//! fmv-corpus — optional full-Bible dataset for fmv.
//!
//! The dataset is a JSON array of `{book, chapter, verse, text}` records
//! loaded once, in the background, into a write-once [`FullBible`] handle.
//! A missing or malformed file leaves the handle unavailable for the rest of
//! the process. [`search::search`] is the only consumer; the interactive
//! verse panel never waits on the corpus.

pub mod loader;
pub mod search;

pub use loader::{load_records, spawn_load, LoadError};
pub use search::{search, DEFAULT_MAX_RESULTS};

use serde::Deserialize;
use std::sync::{Arc, OnceLock};

/// One verse of the full dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BibleRecord {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    #[serde(default)]
    pub text: String,
}

impl BibleRecord {
    /// `"{book} {chapter}:{verse}"`, e.g. `John 3:16`.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Shared handle to the dataset. Clones observe the same slot.
///
/// The slot starts empty ("not loaded yet / failed") and is filled at most
/// once. An empty but loaded dataset is distinct from an unavailable one.
#[derive(Debug, Clone, Default)]
pub struct FullBible {
    slot: Arc<OnceLock<Vec<BibleRecord>>>,
}

impl FullBible {
    /// A handle with nothing loaded.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// A handle that is already populated.
    pub fn from_records(records: Vec<BibleRecord>) -> Self {
        let bible = Self::default();
        bible.publish(records);
        bible
    }

    /// Fill the slot. Returns `false` if it was already filled, in which case
    /// `records` is dropped.
    pub fn publish(&self, records: Vec<BibleRecord>) -> bool {
        self.slot.set(records).is_ok()
    }

    pub fn records(&self) -> Option<&[BibleRecord]> {
        self.slot.get().map(Vec::as_slice)
    }

    pub fn is_available(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Number of loaded verses, or `None` while unavailable.
    pub fn len(&self) -> Option<usize> {
        self.slot.get().map(Vec::len)
    }
}
