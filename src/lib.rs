//! fmv — Find Me a Verse
//!
//! Terminal companion that maps a feeling to a few encouraging Bible verses.
//! The library crates are re-exported here so that integration tests and
//! benches can import them through a single path.
//!
//! # Architecture
//!
//! ```text
//! fmv-core ──► fmv-tui (interactive shell)
//!    │     └─► headless (fmv ask)
//! fmv-corpus ──► headless (fmv search)
//! ```
//!
//! The matcher, sampler and presenter are synchronous. Only the optional
//! full-Bible dataset is loaded on a background tokio task.

pub mod headless;

pub use fmv_core;
pub use fmv_corpus;
