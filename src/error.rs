//! Error types for the dignities engine
//!
//! Uses `thiserror` for library errors.

use thiserror::Error;

/// Result type alias for dignities operations
pub type DignityResult<T> = Result<T, DignityError>;

/// Main error type for dignities operations
///
/// Slug-keyed lookups are the only fallible operations in the crate;
/// derivation itself is total over the twelve-sign domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DignityError {
    /// Lookup key does not name one of the twelve signs
    #[error("unknown sign '{slug}' - expected one of the twelve sign slugs")]
    UnknownSign { slug: String },
}
