//! Domain-specific assertion macros for fmv harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* verse or category broke the expectation.

/// Assert that every verse in `$verses` belongs to the catalog category `$key`.
/// The fallback category counts as a catalog category here.
///
/// ```rust
/// assert_verses_from!(presentation.verses, "anxious");
/// ```
#[macro_export]
macro_rules! assert_verses_from {
    ($verses:expr, $key:expr) => {{
        let key: &str = $key;
        let catalog = fmv_core::Catalog::builtin();
        let category = catalog
            .get(key)
            .or_else(|| (catalog.fallback().key == key).then(|| catalog.fallback()))
            .unwrap_or_else(|| panic!("assert_verses_from! failed: no category {:?}", key));
        for verse in $verses.iter() {
            if !category.verses.contains(verse) {
                panic!(
                    "assert_verses_from! failed: {:?} is not in category {:?}",
                    verse.reference, key
                );
            }
        }
    }};
}

/// Assert that a verse list has no duplicate references.
#[macro_export]
macro_rules! assert_distinct_verses {
    ($verses:expr) => {{
        let verses = &$verses;
        for (i, a) in verses.iter().enumerate() {
            for b in verses.iter().skip(i + 1) {
                if a == b {
                    panic!("assert_distinct_verses! failed: {:?} appears twice", a.reference);
                }
            }
        }
    }};
}

/// Assert that the presentation's key matches, with a readable diff.
#[macro_export]
macro_rules! assert_presented {
    ($presentation:expr, $key:expr) => {{
        let presentation: &fmv_core::Presentation = &$presentation;
        pretty_assertions::assert_eq!(
            presentation.key, $key,
            "presented category differs from expected"
        );
        $crate::assert_verses_from!(presentation.verses, $key);
    }};
}
