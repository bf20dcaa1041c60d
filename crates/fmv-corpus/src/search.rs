//! Case-insensitive substring search over the full-Bible dataset.

use crate::FullBible;
use fmv_core::{normalize, Verse};

pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Return up to `max_results` verses whose text contains `query`.
///
/// The query is normalised like matcher input (trimmed, lowercased) and
/// compared against each record's lowercased text. Results keep dataset
/// order. Records with empty text are skipped. An unavailable dataset yields
/// no results.
pub fn search(bible: &FullBible, query: &str, max_results: usize) -> Vec<Verse> {
    let Some(records) = bible.records() else {
        tracing::debug!("search requested but full bible is unavailable");
        return Vec::new();
    };

    let needle = normalize(query);
    records
        .iter()
        .filter(|r| !r.text.is_empty() && r.text.to_lowercase().contains(&needle))
        .take(max_results)
        .map(|r| Verse::new(r.text.clone(), r.reference()))
        .collect()
}
