//! Dignity table builder
//!
//! Derives the full per-sign dignity table from a hand-authored base
//! table and an opposite-sign relation:
//! - `detriment(s)` = domicile of the opposite sign, plus authored extras
//! - `fall(s)` = exaltation of the opposite sign, plus authored extras
//!
//! Derivation runs in two passes. The first walks the whole base table
//! and accumulates every sign's exaltations into its opposite's fall
//! accumulator; the second composes each sign's sets from the
//! already-built maps. Accumulation never assumes a sign's fall has
//! exactly one source, even though the canonical involutive relation
//! guarantees it.

use crate::domain::entities::{BaseEntry, DignityTable, ResolvedEntry};
use crate::domain::value_objects::Sign;

/// Build the resolved table using the canonical opposite-sign relation
pub fn build<L>(base: &[(Sign, BaseEntry<L>)]) -> DignityTable<L>
where
    L: Clone + Eq,
{
    build_with(base, |sign| sign.opposite())
}

/// Build the resolved table with an explicit opposite relation
///
/// Signs absent from `base` behave as all-empty entries; a sign that
/// appears more than once has its rows merged in slice order.
pub fn build_with<L, F>(base: &[(Sign, BaseEntry<L>)], opposite: F) -> DignityTable<L>
where
    L: Clone + Eq,
    F: Fn(Sign) -> Sign,
{
    let mut domicile: [Vec<L>; 12] = Default::default();
    let mut exaltation: [Vec<L>; 12] = Default::default();
    let mut detriment_extra: [Vec<L>; 12] = Default::default();
    let mut fall_extra: [Vec<L>; 12] = Default::default();

    for (sign, entry) in base {
        let index = sign.cycle_index();
        extend_unique(&mut domicile[index], &entry.domicile);
        extend_unique(&mut exaltation[index], &entry.exaltation);
        extend_unique(&mut detriment_extra[index], &entry.detriment_extra);
        extend_unique(&mut fall_extra[index], &entry.fall_extra);
    }

    // Pass 1: every sign's exaltations land in its opposite's fall
    // accumulator. An empty exaltation contributes nothing.
    let mut fall_sources: [Vec<L>; 12] = Default::default();
    for sign in Sign::ALL {
        let index = sign.cycle_index();
        if exaltation[index].is_empty() {
            continue;
        }
        let target = opposite(sign).cycle_index();
        extend_unique(&mut fall_sources[target], &exaltation[index]);
    }

    // Pass 2: compose per-sign sets from the already-built maps.
    // Derived labels come first, authored extras after; duplicates
    // collapse to the first occurrence.
    let entries: [ResolvedEntry<L>; 12] = std::array::from_fn(|index| {
        let sign = Sign::ALL[index];
        let source = opposite(sign).cycle_index();

        let mut detriment = domicile[source].clone();
        extend_unique(&mut detriment, &detriment_extra[index]);

        let mut fall = fall_sources[index].clone();
        extend_unique(&mut fall, &fall_extra[index]);

        ResolvedEntry {
            domicile: domicile[index].clone(),
            exaltation: exaltation[index].clone(),
            detriment,
            fall,
        }
    });

    DignityTable::from_entries(entries)
}

/// Append labels not already present, preserving first-occurrence order
fn extend_unique<L: Clone + PartialEq>(set: &mut Vec<L>, labels: &[L]) {
    for label in labels {
        if !set.contains(label) {
            set.push(label.clone());
        }
    }
}
