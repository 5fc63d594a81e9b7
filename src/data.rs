//! Reference dignity data
//!
//! The hand-authored base table for the ten-planet label set: modern
//! rulerships (with co-rulers for Scorpio, Aquarius and Pisces), the
//! traditional exaltations plus Mercury in Virgo, and hand-authored
//! fall extras for the outer-planet attributions the opposite rule
//! cannot derive.
//!
//! The resolved form is built once per process and cached; consumers
//! hold a reference and never observe a partial table.

use std::sync::OnceLock;

use crate::domain::entities::{BaseEntry, DignityTable};
use crate::domain::services::build;
use crate::domain::value_objects::{Planet, Sign};

/// The authored reference base table, one row per sign in cycle order
pub fn base_table() -> Vec<(Sign, BaseEntry<Planet>)> {
    use Planet::*;

    vec![
        (
            Sign::Aries,
            BaseEntry::ruled_by([Mars]).with_exaltation([Sun]),
        ),
        (
            Sign::Taurus,
            BaseEntry::ruled_by([Venus])
                .with_exaltation([Moon])
                .with_fall_extra([Uranus]),
        ),
        (Sign::Gemini, BaseEntry::ruled_by([Mercury])),
        (
            Sign::Cancer,
            BaseEntry::ruled_by([Moon]).with_exaltation([Jupiter]),
        ),
        (Sign::Leo, BaseEntry::ruled_by([Sun])),
        // Mercury is both ruler and exalted here; preserved as authored.
        (
            Sign::Virgo,
            BaseEntry::ruled_by([Mercury]).with_exaltation([Mercury]),
        ),
        (
            Sign::Libra,
            BaseEntry::ruled_by([Venus])
                .with_exaltation([Saturn])
                .with_fall_extra([Pluto]),
        ),
        (Sign::Scorpio, BaseEntry::ruled_by([Mars, Pluto])),
        (Sign::Sagittarius, BaseEntry::ruled_by([Jupiter])),
        (
            Sign::Capricorn,
            BaseEntry::ruled_by([Saturn]).with_exaltation([Mars]),
        ),
        (
            Sign::Aquarius,
            BaseEntry::ruled_by([Saturn, Uranus]).with_fall_extra([Neptune]),
        ),
        (
            Sign::Pisces,
            BaseEntry::ruled_by([Jupiter, Neptune]).with_exaltation([Venus]),
        ),
    ]
}

/// The resolved reference table, built on first use and cached for
/// process lifetime
pub fn resolved_table() -> &'static DignityTable<Planet> {
    static TABLE: OnceLock<DignityTable<Planet>> = OnceLock::new();
    TABLE.get_or_init(|| build(&base_table()))
}
