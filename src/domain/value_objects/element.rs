//! Element value object - the four classical elements
//!
//! The sign opposition runs along element lines: fire pairs with air,
//! earth pairs with water.

use serde::{Deserialize, Serialize};

/// Element of a sign, `cycle_index % 4` in sign order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// The element paired with this one across the sign opposition
    pub fn opposite(&self) -> Element {
        match self {
            Element::Fire => Element::Air,
            Element::Air => Element::Fire,
            Element::Earth => Element::Water,
            Element::Water => Element::Earth,
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
