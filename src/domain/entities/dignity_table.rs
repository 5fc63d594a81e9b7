//! Dignity table - the immutable resolved table
//!
//! Built once by the table builder and read-only thereafter. Storage is
//! a fixed-size array indexed by sign cycle index, so lookup by `Sign`
//! is total and allocation-free.

use crate::domain::value_objects::Sign;
use crate::error::{DignityError, DignityResult};

use super::ResolvedEntry;

/// Fully resolved dignity sets for all twelve signs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DignityTable<L> {
    entries: [ResolvedEntry<L>; 12],
}

impl<L> DignityTable<L> {
    pub(crate) fn from_entries(entries: [ResolvedEntry<L>; 12]) -> Self {
        Self { entries }
    }

    /// The resolved entry for a sign
    ///
    /// Total over the domain: every sign has an entry, even when all
    /// its sets are empty.
    pub fn get(&self, sign: Sign) -> &ResolvedEntry<L> {
        &self.entries[sign.cycle_index()]
    }

    /// Look up a resolved entry by sign slug
    ///
    /// The component's only error path: an unknown slug fails with
    /// [`DignityError::UnknownSign`].
    pub fn lookup(&self, slug: &str) -> DignityResult<&ResolvedEntry<L>> {
        Sign::from_slug(slug)
            .map(|sign| self.get(sign))
            .ok_or_else(|| DignityError::UnknownSign {
                slug: slug.to_string(),
            })
    }

    /// All entries in cycle order
    pub fn iter(&self) -> impl Iterator<Item = (Sign, &ResolvedEntry<L>)> + '_ {
        Sign::ALL.into_iter().map(move |sign| (sign, self.get(sign)))
    }
}
