//! Resolved entry - the fully derived per-sign record

use serde::{Deserialize, Serialize};

/// The four consumer-facing dignity sets for one sign
///
/// Produced by the table builder: `domicile` and `exaltation` pass
/// through from the authored entry, `detriment` and `fall` are derived
/// from the opposite sign and merged with the authored extras. Every
/// set is deduplicated in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEntry<L> {
    /// Labels ruling this sign
    pub domicile: Vec<L>,

    /// Labels exalted in this sign
    pub exaltation: Vec<L>,

    /// Opposite sign's domicile, plus authored extras
    pub detriment: Vec<L>,

    /// Opposite sign's exaltation, plus authored extras
    pub fall: Vec<L>,
}
