//! Dignities - essential-dignities derivation engine
//!
//! Derives the four essential-dignity attribute sets (domicile,
//! exaltation, detriment, fall) for the twelve zodiac signs from a
//! hand-authored base table and the fixed opposite-sign relation:
//! a planet is in detriment where the opposite sign is its domicile,
//! and in fall where the opposite sign is its exaltation. Hand-authored
//! extras are merged in on top of the derived sets.
//!
//! The engine is a pure, synchronous computation over the fixed
//! twelve-sign domain: callers [`build`] a [`DignityTable`] once (or
//! use the cached reference table in [`data`]) and read from it for the
//! rest of the process.

pub mod data;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use data::{base_table, resolved_table};
pub use domain::entities::{BaseEntry, DignityTable, ResolvedEntry};
pub use domain::services::{build, build_with};
pub use domain::value_objects::{resolve_sign_name, Element, Planet, Sign};
pub use error::{DignityError, DignityResult};
