//! Presenter — turns a feeling into a sampled [`Presentation`] and remembers
//! the last category shown so "more" can re-sample it.
//!
//! The last-match slot is a plain field. All mutation goes through `&mut self`,
//! so sharing a presenter across threads requires the caller to wrap it in a
//! lock.

use crate::{
    catalog::Catalog,
    display::{Presentation, Surface},
    sampler::sample_without_replacement,
    types::{Match, Verse},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// How many verses are drawn per presentation unless configured otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 3;

pub struct Presenter<R = StdRng> {
    catalog: Catalog,
    rng: R,
    sample_count: usize,
    last_match: Option<Match>,
}

impl Presenter<StdRng> {
    /// Presenter seeded from OS entropy.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }
}

impl<R: Rng> Presenter<R> {
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            sample_count: DEFAULT_SAMPLE_COUNT,
            last_match: None,
        }
    }

    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// The most recently presented category, if any.
    pub fn last_match(&self) -> Option<&Match> {
        self.last_match.as_ref()
    }

    /// Resolve `input`, substituting the fallback category on no match.
    pub fn resolve(&self, input: &str) -> Match {
        self.catalog
            .find(input)
            .unwrap_or_else(|| self.catalog.fallback_match())
    }

    /// Resolve `input`, sample its category and present the sample.
    ///
    /// Always presents something: unmatched input shows the fallback
    /// category, which then becomes the last match like any other.
    pub fn submit(&mut self, input: &str, surface: &mut dyn Surface) -> Match {
        let matched = self.resolve(input);
        tracing::debug!(key = matched.key, tier = %matched.tier, "feeling resolved");

        let sample = sample_without_replacement(matched.verses, self.sample_count, &mut self.rng);
        self.present(matched, sample, surface);
        matched
    }

    /// Hand `verses` to the surface and record `matched` as the last match.
    ///
    /// The recorded match keeps the category's full verse list, not the
    /// sample, so later re-samples draw from everything.
    pub fn present(&mut self, matched: Match, verses: Vec<Verse>, surface: &mut dyn Surface) {
        tracing::debug!(key = matched.key, shown = verses.len(), "presenting verses");
        surface.show(Presentation::new(matched.key, verses));
        self.last_match = Some(matched);
    }

    /// Re-sample the last match and present it again.
    ///
    /// Returns `false` without touching the surface when nothing has been
    /// presented yet.
    pub fn request_more(&mut self, surface: &mut dyn Surface) -> bool {
        let Some(matched) = self.last_match else {
            tracing::debug!("more requested before any match; ignoring");
            return false;
        };
        let sample = sample_without_replacement(matched.verses, self.sample_count, &mut self.rng);
        self.present(matched, sample, surface);
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
