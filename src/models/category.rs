//! Lore content categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content categories of the almanac.
///
/// Entries carry their category as a free string (see [`super::EntryRef`]);
/// this enum names the categories the almanac ships with so providers can
/// enumerate them and map file names onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Named people and creatures.
    Characters,
    /// Realms and their ruling houses.
    Kingdoms,
    /// Places on the map.
    Locations,
    /// Artifacts and heirlooms.
    Relics,
    /// Peoples and species.
    Races,
    /// Schools of magic and spells.
    Magic,
    /// Abstract ideas, philosophies, events.
    Concepts,
    /// Honorifics and ranks.
    Titles,
}

impl Category {
    /// Returns all categories in almanac display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Characters,
            Self::Kingdoms,
            Self::Locations,
            Self::Relics,
            Self::Races,
            Self::Magic,
            Self::Concepts,
            Self::Titles,
        ]
    }

    /// Returns the category as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Kingdoms => "kingdoms",
            Self::Locations => "locations",
            Self::Relics => "relics",
            Self::Races => "races",
            Self::Magic => "magic",
            Self::Concepts => "concepts",
            Self::Titles => "titles",
        }
    }

    /// Parses a category, accepting singular forms.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "characters" | "character" => Some(Self::Characters),
            "kingdoms" | "kingdom" => Some(Self::Kingdoms),
            "locations" | "location" => Some(Self::Locations),
            "relics" | "relic" => Some(Self::Relics),
            "races" | "race" => Some(Self::Races),
            "magic" => Some(Self::Magic),
            "concepts" | "concept" => Some(Self::Concepts),
            "titles" | "title" => Some(Self::Titles),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
