//! Domain services
//!
//! Pure derivation logic that operates on domain entities. Services
//! have no I/O dependencies and no state; the builder is a function
//! from authored data to a resolved table.

mod table_builder;

pub use table_builder::{build, build_with};
