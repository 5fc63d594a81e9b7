//! Sign value object - the twelve-member cyclic domain
//!
//! Signs are fixed at compile time: each has a stable slug, a cycle
//! index in `0..12`, and exactly one opposite sign six places around
//! the cycle. The domain is closed; nothing is added at runtime.

use serde::{Deserialize, Serialize};

use crate::error::{DignityError, DignityResult};

use super::Element;

/// One of the twelve zodiac signs, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// All twelve signs in cycle order
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Position in the cycle, `0..12`
    pub fn cycle_index(&self) -> usize {
        *self as usize
    }

    /// The sign six places around the cycle
    ///
    /// Involutive and fixed-point-free: every sign has exactly one
    /// opposite, and no sign is its own opposite.
    pub fn opposite(&self) -> Sign {
        Sign::ALL[(self.cycle_index() + 6) % 12]
    }

    /// The sign's element
    ///
    /// Opposition runs along element lines: opposite signs always carry
    /// opposite elements (fire with air, earth with water).
    pub fn element(&self) -> Element {
        match self.cycle_index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Stable lowercase key used by lookups and serialized forms
    pub fn slug(&self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Inverse of [`Sign::slug`]
    pub fn from_slug(slug: &str) -> Option<Sign> {
        Sign::ALL.iter().copied().find(|sign| sign.slug() == slug)
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resolve a sign slug to its display name
///
/// Convenience for consumers that hold only the slug; fails with
/// [`DignityError::UnknownSign`] for anything outside the twelve-sign
/// domain.
pub fn resolve_sign_name(slug: &str) -> DignityResult<&'static str> {
    Sign::from_slug(slug)
        .map(|sign| sign.display_name())
        .ok_or_else(|| DignityError::UnknownSign {
            slug: slug.to_string(),
        })
}
