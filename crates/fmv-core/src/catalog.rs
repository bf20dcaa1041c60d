//! Catalog — the static feeling → verse tables.
//!
//! The built-in tables are `const` data: five feeling categories in a fixed
//! definition order, an ordered synonym table, and the `seeking` category
//! shown when nothing matches. Definition order is significant; the matcher
//! walks both tables front to back and stops at the first hit.

use crate::types::{Category, Match, MatchTier, Synonym, Verse};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

/// Key of the category substituted when a lookup finds nothing.
pub const FALLBACK_KEY: &str = "seeking";

const ANXIOUS: &[Verse] = &[
    Verse::new_static(
        "Do not be anxious about anything, but in every situation, by prayer and petition, with thanksgiving, present your requests to God.",
        "Philippians 4:6",
    ),
    Verse::new_static(
        "Cast all your anxiety on him because he cares for you.",
        "1 Peter 5:7",
    ),
];

const LONELY: &[Verse] = &[
    Verse::new_static(
        "The LORD is near to the brokenhearted and saves the crushed in spirit.",
        "Psalm 34:18",
    ),
    Verse::new_static("I will never leave you nor forsake you.", "Hebrews 13:5"),
];

const OVERWHELMED: &[Verse] = &[
    Verse::new_static(
        "Come to me, all who labor and are heavy laden, and I will give you rest.",
        "Matthew 11:28",
    ),
    Verse::new_static(
        "When you pass through the waters, I will be with you.",
        "Isaiah 43:2",
    ),
];

const JOYFUL: &[Verse] = &[
    Verse::new_static(
        "Rejoice in the Lord always; again I will say, Rejoice.",
        "Philippians 4:4",
    ),
    Verse::new_static("The joy of the Lord is your strength.", "Nehemiah 8:10"),
];

const THANKFUL: &[Verse] = &[
    Verse::new_static(
        "Give thanks to the LORD, for he is good; his steadfast love endures forever.",
        "Psalm 107:1",
    ),
    Verse::new_static(
        "Do not be anxious about anything, but in everything by prayer and supplication with thanksgiving let your requests be made known to God.",
        "Philippians 4:6",
    ),
];

const SEEKING: &[Verse] = &[
    Verse::new_static(
        "Seek the LORD while he may be found; call upon him while he is near.",
        "Isaiah 55:6",
    ),
    Verse::new_static("Be still and know that I am God.", "Psalm 46:10"),
];

/// Built-in categories in definition (= match precedence) order.
pub const CATEGORIES: &[Category] = &[
    Category { key: "anxious", verses: ANXIOUS },
    Category { key: "lonely", verses: LONELY },
    Category { key: "overwhelmed", verses: OVERWHELMED },
    Category { key: "joyful", verses: JOYFUL },
    Category { key: "thankful", verses: THANKFUL },
];

/// Built-in synonyms in definition (= match precedence) order.
pub const SYNONYMS: &[Synonym] = &[
    Synonym { word: "sad", key: "lonely" },
    Synonym { word: "depressed", key: "lonely" },
    Synonym { word: "alone", key: "lonely" },
    Synonym { word: "stressed", key: "anxious" },
    Synonym { word: "worry", key: "anxious" },
    Synonym { word: "worried", key: "anxious" },
    Synonym { word: "grateful", key: "thankful" },
    Synonym { word: "blessed", key: "thankful" },
];

pub const FALLBACK: Category = Category {
    key: FALLBACK_KEY,
    verses: SEEKING,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("category key {0:?} is defined more than once")]
    DuplicateKey(&'static str),

    #[error("synonym {word:?} points at unknown category {key:?}")]
    DanglingSynonym {
        word: &'static str,
        key: &'static str,
    },

    #[error("fallback key {0:?} collides with a regular category")]
    FallbackCollision(&'static str),
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Read-only view over a set of category and synonym tables.
///
/// Cheap to copy; every field is a `'static` reference. Use
/// [`Catalog::builtin`] for the shipped tables or [`Catalog::new`] to build a
/// validated catalog from custom `static` tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    categories: &'static [Category],
    synonyms: &'static [Synonym],
    fallback: &'static Category,
}

impl Catalog {
    /// The built-in tables. Their validity is asserted by the unit tests.
    pub fn builtin() -> Self {
        Self {
            categories: CATEGORIES,
            synonyms: SYNONYMS,
            fallback: &FALLBACK,
        }
    }

    /// Build a catalog, rejecting duplicate keys and synonyms that resolve
    /// to a missing category.
    pub fn new(
        categories: &'static [Category],
        synonyms: &'static [Synonym],
        fallback: &'static Category,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            categories,
            synonyms,
            fallback,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].iter().any(|c| c.key == category.key) {
                return Err(CatalogError::DuplicateKey(category.key));
            }
        }
        if self.get(self.fallback.key).is_some() {
            return Err(CatalogError::FallbackCollision(self.fallback.key));
        }
        for synonym in self.synonyms {
            if self.get(synonym.key).is_none() {
                return Err(CatalogError::DanglingSynonym {
                    word: synonym.word,
                    key: synonym.key,
                });
            }
        }
        Ok(())
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn synonyms(&self) -> &'static [Synonym] {
        self.synonyms
    }

    pub fn fallback(&self) -> &'static Category {
        self.fallback
    }

    /// Look up a category by exact key. The fallback category is not part of
    /// the mapping and is never returned here.
    pub fn get(&self, key: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// The fallback category wrapped as a [`Match`].
    pub fn fallback_match(&self) -> Match {
        Match::new(self.fallback, MatchTier::Fallback)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
