#![allow(unused)]
//! Presenter and sampler integration harness.
//!
//! # What this covers
//!
//! - **Sampling**: draws are without replacement, capped at the pool size,
//!   and only ever contain items from the pool.
//! - **Presentation**: every submit shows exactly one presentation; unmatched
//!   input shows the "seeking" category.
//! - **Last match**: "more" re-samples the most recently presented category,
//!   including the fallback, and is a no-op before the first submit.
//! - **Clipboard**: copied text is the `text — reference` blocks of what is on
//!   screen.
//!
//! # Running
//!
//! ```sh
//! cargo test --test presenter_harness
//! ```

mod common;
use common::*;

use fmv_core::{
    clipboard::{copy_verses, format_verses, MemoryClipboard},
    sample_without_replacement, Catalog, MatchTier, Presentation, Presenter,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

// ---------------------------------------------------------------------------
// Sampler properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn sample_size_is_min_of_count_and_pool(
        pool in proptest::collection::vec(any::<u32>(), 0..30),
        count in 0usize..40,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = sample_without_replacement(&pool, count, &mut rng);
        prop_assert_eq!(sample.len(), count.min(pool.len()));
    }

    /// Distinct pool positions are never drawn twice.
    #[test]
    fn sample_draws_without_replacement(
        len in 0usize..30,
        count in 0usize..40,
        seed in any::<u64>(),
    ) {
        let pool: Vec<usize> = (0..len).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sample = sample_without_replacement(&pool, count, &mut rng);
        sample.sort_unstable();
        sample.dedup();
        prop_assert_eq!(sample.len(), count.min(len));
        prop_assert!(sample.iter().all(|i| *i < len));
    }

    #[test]
    fn sampling_leaves_pool_untouched(seed in any::<u64>()) {
        let pool = vec!["a", "b", "c", "d"];
        let before = pool.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        let _ = sample_without_replacement(&pool, 3, &mut rng);
        prop_assert_eq!(pool, before);
    }
}

/// Over many draws every item of a small pool shows up.
#[test]
fn every_item_is_eventually_drawn() {
    let pool = ["a", "b", "c", "d", "e"];
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.extend(sample_without_replacement(&pool, 1, &mut rng));
    }
    assert_eq!(seen.len(), pool.len());
}

// ---------------------------------------------------------------------------
// Presenter behaviour
// ---------------------------------------------------------------------------

#[test]
fn each_fixture_feeling_presents_its_category() {
    for (input, key) in FEELING_CASES {
        let mut presenter = seeded_presenter(3);
        let mut shown: Vec<Presentation> = Vec::new();
        presenter.submit(input, &mut shown);

        assert_eq!(shown.len(), 1, "input {input:?}");
        assert_presented!(shown[0], *key);
        assert_distinct_verses!(shown[0].verses);
    }
}

#[test]
fn fallback_becomes_last_match() {
    let mut presenter = seeded_presenter(4);
    let mut shown: Vec<Presentation> = Vec::new();

    let m = presenter.submit("nothing relevant", &mut shown);
    assert_eq!(m.tier, MatchTier::Fallback);
    assert_eq!(presenter.last_match().map(|m| m.key), Some("seeking"));

    assert!(presenter.request_more(&mut shown));
    assert_eq!(shown.len(), 2);
    assert_presented!(shown[1], "seeking");
}

#[test]
fn more_before_submit_shows_nothing() {
    let mut presenter = seeded_presenter(5);
    let mut shown: Vec<Presentation> = Vec::new();
    assert!(!presenter.request_more(&mut shown));
    assert!(shown.is_empty());
    assert!(presenter.last_match().is_none());
}

#[test]
fn more_follows_latest_submit() {
    let mut presenter = seeded_presenter(6);
    let mut shown: Vec<Presentation> = Vec::new();
    presenter.submit("joyful", &mut shown);
    presenter.submit("grateful", &mut shown);
    presenter.request_more(&mut shown);

    let keys: Vec<_> = shown.iter().map(|p| p.key).collect();
    assert_eq!(keys, ["joyful", "thankful", "thankful"]);
}

/// The last match keeps the full category, so a 1-verse sample followed by
/// "more" can still surface the other verse.
#[test]
fn more_resamples_from_full_category() {
    let mut presenter = seeded_presenter(8).with_sample_count(1);
    let mut shown: Vec<Presentation> = Vec::new();
    presenter.submit("lonely", &mut shown);
    for _ in 0..50 {
        presenter.request_more(&mut shown);
    }
    let refs: std::collections::HashSet<_> =
        shown.iter().map(|p| p.verses[0].reference.clone()).collect();
    assert_eq!(refs.len(), 2);
}

#[test]
fn same_seed_same_presentations() {
    let run = |seed| {
        let mut presenter = seeded_presenter(seed).with_sample_count(1);
        let mut shown: Vec<Presentation> = Vec::new();
        presenter.submit("anxious", &mut shown);
        presenter.request_more(&mut shown);
        shown
            .into_iter()
            .map(|p| p.verses[0].reference.to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(42), run(42));
}

// ---------------------------------------------------------------------------
// Clipboard
// ---------------------------------------------------------------------------

#[test]
fn copied_text_matches_presentation() {
    let mut presenter = seeded_presenter(9);
    let mut shown: Option<Presentation> = None;
    presenter.submit("overwhelmed", &mut shown);
    let p = shown.unwrap();

    let mut clip = MemoryClipboard::default();
    assert!(copy_verses(&mut clip, &p.verses));
    let text = clip.contents.unwrap();
    assert_eq!(text, format_verses(&p.verses));
    assert_eq!(text.split("\n\n").count(), p.verses.len());
    for verse in &p.verses {
        assert!(text.contains(&format!("{} — {}", verse.text, verse.reference)));
    }
}

#[test]
fn fallback_clipboard_text() {
    let catalog = Catalog::builtin();
    insta::assert_snapshot!(format_verses(catalog.fallback().verses), @r"
    Seek the LORD while he may be found; call upon him while he is near. — Isaiah 55:6

    Be still and know that I am God. — Psalm 46:10
    ");
}

#[test]
fn presentation_carries_title_and_image() {
    let mut presenter = seeded_presenter(10);
    let mut shown: Option<Presentation> = None;
    presenter.submit("thankful", &mut shown);
    let p = shown.unwrap();
    assert_eq!(p.title, "Thankful");
    assert!(p.image.starts_with("https://"));
    assert_eq!(p.references().matches(" | ").count(), p.verses.len() - 1);
}
