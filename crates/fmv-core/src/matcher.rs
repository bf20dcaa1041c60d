//! Matcher — resolves a free-text feeling to a catalog category.
//!
//! Resolution runs three tiers against the normalised input and returns the
//! first hit:
//!
//! 1. **Exact** — the input equals a category key.
//! 2. **Contains** — the first key, in definition order, found inside the input.
//! 3. **Synonym** — the first synonym, in definition order, found inside the
//!    input, mapped to its canonical category.
//!
//! First hit wins at every tier. There is no scoring and no longest-match
//! preference: "i feel anxious and lonely" resolves to `anxious` because it is
//! defined before `lonely`.

use crate::{
    catalog::Catalog,
    types::{Match, MatchTier},
};

/// Lowercase and trim. Shared by the matcher and the corpus search.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

impl Catalog {
    /// Resolve `input` to a category, or `None` when no tier matches.
    ///
    /// Empty and whitespace-only input yields `None`. Never panics.
    pub fn find(&self, input: &str) -> Option<Match> {
        let input = normalize(input);
        if input.is_empty() {
            return None;
        }

        if let Some(category) = self.get(&input) {
            return Some(Match::new(category, MatchTier::Exact));
        }

        if let Some(category) = self
            .categories()
            .iter()
            .find(|c| input.contains(c.key))
        {
            return Some(Match::new(category, MatchTier::Contains));
        }

        self.synonyms()
            .iter()
            .find(|s| input.contains(s.word))
            .and_then(|s| self.get(s.key))
            .map(|category| Match::new(category, MatchTier::Synonym))
    }
}

/// Resolve `input` against the built-in catalog.
pub fn find_match(input: &str) -> Option<Match> {
    Catalog::builtin().find(input)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
