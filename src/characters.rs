use std::fmt;
use std::str::FromStr;

/// Stable identifier of a catalog character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterId {
    Fries,
    Burger,
    HotDog,
    Pizza,
    Taco,
    Chicken,
}

impl CharacterId {
    pub const ALL: [CharacterId; 6] = [
        CharacterId::Fries,
        CharacterId::Burger,
        CharacterId::HotDog,
        CharacterId::Pizza,
        CharacterId::Taco,
        CharacterId::Chicken,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CharacterId::Fries => "fries",
            CharacterId::Burger => "burger",
            CharacterId::HotDog => "hotdog",
            CharacterId::Pizza => "pizza",
            CharacterId::Taco => "taco",
            CharacterId::Chicken => "chicken",
        }
    }

    /// Catalog entry for this id.
    pub const fn character(self) -> Character {
        CATALOG[self as usize]
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CharacterParseError {
    #[error("unknown character: '{0}'")]
    Unknown(String),
}

impl FromStr for CharacterId {
    type Err = CharacterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        CharacterId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == t)
            .ok_or_else(|| CharacterParseError::Unknown(s.to_string()))
    }
}

/// 24-bit display color attached to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Immutable identity template a player picks when joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Character {
    id: CharacterId,
    name: &'static str,
    color: Rgb,
    emoji: &'static str,
}

impl Character {
    pub const fn id(&self) -> CharacterId {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn emoji(&self) -> &'static str {
        self.emoji
    }
}

impl From<Character> for CharacterId {
    fn from(c: Character) -> Self {
        c.id()
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}

/// The fixed character catalog, in presentation order.
///
/// ```
/// use fritanga_royale::characters::{CharacterId, CATALOG};
///
/// assert_eq!(CATALOG.len(), 6);
/// assert_eq!(CATALOG[0].id(), CharacterId::Fries);
/// assert_eq!(CATALOG[0].emoji(), "🍟");
/// ```
pub const CATALOG: [Character; 6] = [
    Character {
        id: CharacterId::Fries,
        name: "Fritanga Fries",
        color: Rgb(0xFF, 0xD7, 0x00),
        emoji: "🍟",
    },
    Character {
        id: CharacterId::Burger,
        name: "Burger Boss",
        color: Rgb(0xFF, 0x6B, 0x35),
        emoji: "🍔",
    },
    Character {
        id: CharacterId::HotDog,
        name: "Hot Dog Hero",
        color: Rgb(0xFF, 0x47, 0x57),
        emoji: "🌭",
    },
    Character {
        id: CharacterId::Pizza,
        name: "Pizza Power",
        color: Rgb(0xFF, 0x63, 0x48),
        emoji: "🍕",
    },
    Character {
        id: CharacterId::Taco,
        name: "Taco Thunder",
        color: Rgb(0xFF, 0xA5, 0x02),
        emoji: "🌮",
    },
    Character {
        id: CharacterId::Chicken,
        name: "Chicken Champion",
        color: Rgb(0xFF, 0x76, 0x75),
        emoji: "🍗",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_ids() {
        for (i, id) in CharacterId::ALL.iter().enumerate() {
            assert_eq!(CATALOG[i].id(), *id);
            assert_eq!(id.character(), CATALOG[i]);
        }
    }

    #[test]
    fn id_display_and_from_str() {
        assert_eq!(CharacterId::HotDog.to_string(), "hotdog");
        assert_eq!(CharacterId::from_str("Taco").unwrap(), CharacterId::Taco);
        assert_eq!(CharacterId::from_str(" chicken ").unwrap(), CharacterId::Chicken);
        assert!(CharacterId::from_str("sushi").is_err());
    }

    #[test]
    fn color_renders_as_hex() {
        assert_eq!(CharacterId::Fries.character().color().to_string(), "#FFD700");
        assert_eq!(CharacterId::Chicken.character().color().to_string(), "#FF7675");
    }
}
