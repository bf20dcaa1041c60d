//! fmv-core — Find Me a Verse core library.
//!
//! This crate holds everything between the keyboard and the screen that does
//! not depend on a terminal: the static feeling catalog, the three-tier
//! matcher, the sampler and the presenter, plus the display and clipboard
//! contracts the shells implement.
//!
//! # Architecture
//!
//! ```text
//! input ──► Matcher ──► Presenter ──► Surface (TUI / CLI)
//!              │            │
//!           Catalog      Sampler ──► Clipboard
//! ```
//!
//! Everything here is synchronous. The optional full-Bible corpus lives in
//! `fmv-corpus` and never feeds the presenter.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod display;
pub mod matcher;
pub mod presenter;
pub mod sampler;
pub mod types;

pub use catalog::Catalog;
pub use display::{Presentation, Surface};
pub use matcher::{find_match, normalize};
pub use presenter::Presenter;
pub use sampler::sample_without_replacement;
pub use types::{Category, Match, MatchTier, Synonym, Verse};
