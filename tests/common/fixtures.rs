//! Static fixtures used across harnesses.

use super::builders::DatasetBuilder;

/// Feelings paired with the category key they resolve to.
pub const FEELING_CASES: &[(&str, &str)] = &[
    ("anxious", "anxious"),
    ("  JOYFUL  ", "joyful"),
    ("I feel overwhelmed today", "overwhelmed"),
    ("so sad right now", "lonely"),
    ("home alone", "lonely"),
    ("stressed about exams", "anxious"),
    ("feeling blessed", "thankful"),
    ("grateful", "thankful"),
    ("xyzzy", "seeking"),
    ("", "seeking"),
];

/// Inputs that should never resolve to a built-in category.
pub const UNMATCHED: &[&str] = &["", "   ", "hungry", "purple elephant", "😀"];

/// A small, realistic slice of the full-Bible dataset.
pub fn small_dataset() -> DatasetBuilder {
    DatasetBuilder::new()
        .verse("Genesis", 1, 1, "In the beginning God created the heaven and the earth.")
        .verse("Psalms", 23, 1, "The LORD is my shepherd; I shall not want.")
        .blank("Psalms", 23, 2)
        .verse("John", 3, 16, "For God so loved the world, that he gave his only begotten Son.")
        .verse("1 John", 4, 8, "He that loveth not knoweth not God; for God is love.")
        .verse("Romans", 8, 28, "And we know that all things work together for good to them that love God.")
}

/// `n` synthetic records, every third one mentioning "light".
pub fn large_dataset(n: u32) -> DatasetBuilder {
    (0..n).fold(DatasetBuilder::new(), |b, i| {
        let text = if i % 3 == 0 {
            format!("And there was light upon the land, record {i}.")
        } else {
            format!("The waters covered the earth, record {i}.")
        };
        b.verse("Synthetic", i / 50 + 1, i % 50 + 1, &text)
    })
}
