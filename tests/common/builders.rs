//! Test builders — ergonomic constructors for presenters and datasets.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fmv_core::{Catalog, Presenter};
use fmv_corpus::{BibleRecord, FullBible};
use rand::{rngs::StdRng, SeedableRng};
use std::io::Write;
use tempfile::NamedTempFile;

/// Presenter over the built-in catalog with a fixed seed.
pub fn seeded_presenter(seed: u64) -> Presenter<StdRng> {
    Presenter::with_rng(Catalog::builtin(), StdRng::seed_from_u64(seed))
}

// ---------------------------------------------------------------------------
// DatasetBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for full-Bible record lists.
///
/// # Example
///
/// ```rust
/// let bible = DatasetBuilder::new()
///     .verse("John", 3, 16, "For God so loved the world")
///     .blank("Psalm", 23, 1)
///     .bible();
/// ```
#[derive(Default)]
pub struct DatasetBuilder {
    records: Vec<BibleRecord>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verse(mut self, book: &str, chapter: u32, verse: u32, text: &str) -> Self {
        self.records.push(BibleRecord {
            book: book.to_string(),
            chapter,
            verse,
            text: text.to_string(),
        });
        self
    }

    /// A record with no text, as found in some exported datasets.
    pub fn blank(self, book: &str, chapter: u32, verse: u32) -> Self {
        self.verse(book, chapter, verse, "")
    }

    pub fn records(self) -> Vec<BibleRecord> {
        self.records
    }

    pub fn bible(self) -> FullBible {
        FullBible::from_records(self.records)
    }

    /// Serialise to the on-disk JSON array format.
    pub fn json(&self) -> String {
        let rows: Vec<_> = self
            .records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "book": r.book,
                    "chapter": r.chapter,
                    "verse": r.verse,
                    "text": r.text,
                })
            })
            .collect();
        serde_json::Value::Array(rows).to_string()
    }

    /// Write the dataset to a temp file that lives as long as the handle.
    pub fn write_temp(&self) -> NamedTempFile {
        write_temp_json(&self.json())
    }
}

/// Write raw `contents` to a temp `.json` file.
pub fn write_temp_json(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp dataset");
    file.write_all(contents.as_bytes()).expect("write temp dataset");
    file.flush().expect("flush temp dataset");
    file
}
