//! Core types for fmv-core — Find Me a Verse.
//!
//! This module defines the data shared across every layer: the [`Verse`]
//! snippet, the [`Category`] and [`Synonym`] table rows, and the transient
//! [`Match`] produced by a lookup.

use serde::Serialize;
use std::borrow::Cow;

/// A quoted passage plus the reference label it is cited by.
///
/// Built-in verses borrow `'static` strings; verses produced by the bulk
/// corpus search own their text and a formatted reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Verse {
    pub text: Cow<'static, str>,
    #[serde(rename = "ref")]
    pub reference: Cow<'static, str>,
}

impl Verse {
    /// Construct a verse from static strings. Usable in `const` tables.
    pub const fn new_static(text: &'static str, reference: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            reference: Cow::Borrowed(reference),
        }
    }

    pub fn new(text: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
            reference: Cow::Owned(reference.into()),
        }
    }
}

impl std::fmt::Display for Verse {
    /// `text — reference`, the form used for clipboard export.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.text, self.reference)
    }
}

/// A named feeling and the verses curated for it, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub verses: &'static [Verse],
}

/// An alternate keyword that resolves to a canonical category key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synonym {
    pub word: &'static str,
    pub key: &'static str,
}

/// Which lookup tier produced a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Normalised input equals a category key.
    Exact,
    /// A category key appears inside the input.
    Contains,
    /// A synonym keyword appears inside the input.
    Synonym,
    /// Nothing matched; the catalog's fallback category was substituted.
    Fallback,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchTier::Exact => write!(f, "exact"),
            MatchTier::Contains => write!(f, "contains"),
            MatchTier::Synonym => write!(f, "synonym"),
            MatchTier::Fallback => write!(f, "fallback"),
        }
    }
}

/// The outcome of resolving free text to a category.
///
/// `verses` is always the category's full sequence, never a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub key: &'static str,
    pub verses: &'static [Verse],
    pub tier: MatchTier,
}

impl Match {
    pub fn new(category: &Category, tier: MatchTier) -> Self {
        Self {
            key: category.key,
            verses: category.verses,
            tier,
        }
    }
}
