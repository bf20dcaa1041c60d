//! Shared test utilities for fmv integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Randomness is always seeded so failures reproduce.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
