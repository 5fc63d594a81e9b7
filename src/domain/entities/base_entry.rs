//! Base entry - the hand-authored half of the dignity model
//!
//! Authored records are sparse: every field defaults to empty, and a
//! sign absent from the base table behaves exactly like an all-empty
//! entry. A label may legally appear in both `domicile` and
//! `exaltation` of the same sign (Mercury in Virgo in the reference
//! data); the engine derives structure and never validates
//! astrological content.

use serde::{Deserialize, Serialize};

/// Hand-authored dignity data for one sign
///
/// Generic over the label type so callers can bring their own finite
/// label set; the shipped reference data uses [`crate::Planet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "L: Serialize", deserialize = "L: Deserialize<'de>"))]
pub struct BaseEntry<L> {
    /// Labels ruling this sign
    #[serde(default)]
    pub domicile: Vec<L>,

    /// Labels exalted in this sign
    #[serde(default)]
    pub exaltation: Vec<L>,

    /// Hand-authored additions to the derived detriment set
    #[serde(default, rename = "detriment-extra")]
    pub detriment_extra: Vec<L>,

    /// Hand-authored additions to the derived fall set
    #[serde(default, rename = "fall-extra")]
    pub fall_extra: Vec<L>,
}

// Manual impl: the derived one would require `L: Default`.
impl<L> Default for BaseEntry<L> {
    fn default() -> Self {
        Self {
            domicile: Vec::new(),
            exaltation: Vec::new(),
            detriment_extra: Vec::new(),
            fall_extra: Vec::new(),
        }
    }
}

impl<L> BaseEntry<L> {
    /// Entry with the given ruling labels and nothing else
    pub fn ruled_by(domicile: impl IntoIterator<Item = L>) -> Self {
        Self {
            domicile: domicile.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the exalted labels
    pub fn with_exaltation(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.exaltation = labels.into_iter().collect();
        self
    }

    /// Set the hand-authored detriment additions
    pub fn with_detriment_extra(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.detriment_extra = labels.into_iter().collect();
        self
    }

    /// Set the hand-authored fall additions
    pub fn with_fall_extra(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.fall_extra = labels.into_iter().collect();
        self
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        self.domicile.is_empty()
            && self.exaltation.is_empty()
            && self.detriment_extra.is_empty()
            && self.fall_extra.is_empty()
    }
}
