//! The twelve palaces (宫) and their fixed ring order.
//!
//! Position 1 is always the life palace; the remaining names follow in
//! fixed order around the ring.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::ZiweiError;
use crate::star::{Star, StarName};

/// The 12 palace names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PalaceName {
    #[serde(rename = "命宫")]
    Life,
    #[serde(rename = "兄弟")]
    Siblings,
    #[serde(rename = "夫妻")]
    Spouse,
    #[serde(rename = "子女")]
    Children,
    #[serde(rename = "财帛")]
    Wealth,
    #[serde(rename = "疾厄")]
    Health,
    #[serde(rename = "迁移")]
    Travel,
    #[serde(rename = "交友")]
    Friends,
    #[serde(rename = "官禄")]
    Career,
    #[serde(rename = "田宅")]
    Property,
    #[serde(rename = "福德")]
    FortuneVirtue,
    #[serde(rename = "父母")]
    Parents,
}

/// All 12 palaces in ring order (index 0 = position 1 = 命宫).
pub const ALL_PALACES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::FortuneVirtue,
    PalaceName::Parents,
];

impl PalaceName {
    /// Chinese name of the palace.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::FortuneVirtue => "福德",
            Self::Parents => "父母",
        }
    }

    /// English name of the palace.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Siblings => "Siblings",
            Self::Spouse => "Spouse",
            Self::Children => "Children",
            Self::Wealth => "Wealth",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Friends => "Friends",
            Self::Career => "Career",
            Self::Property => "Property",
            Self::FortuneVirtue => "Fortune & Virtue",
            Self::Parents => "Parents",
        }
    }

    /// 1-based ring position of the palace.
    pub const fn position(self) -> u8 {
        match self {
            Self::Life => 1,
            Self::Siblings => 2,
            Self::Spouse => 3,
            Self::Children => 4,
            Self::Wealth => 5,
            Self::Health => 6,
            Self::Travel => 7,
            Self::Friends => 8,
            Self::Career => 9,
            Self::Property => 10,
            Self::FortuneVirtue => 11,
            Self::Parents => 12,
        }
    }

    /// All 12 palaces in ring order.
    pub const fn all() -> &'static [PalaceName; 12] {
        &ALL_PALACES
    }
}

impl Display for PalaceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PalaceName {
    type Err = ZiweiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_PALACES
            .iter()
            .copied()
            .find(|p| p.name() == s || p.english_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ZiweiError::UnknownName {
                kind: "palace",
                value: s.to_string(),
            })
    }
}

/// One palace of a chart and the stars placed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palace {
    pub name: PalaceName,
    /// Ring position in [1, 12], unique within a chart.
    pub position: u8,
    /// Stars ordered by descending strength.
    pub stars: Vec<Star>,
}

impl Palace {
    /// Empty palace for `name` at its ring position.
    pub fn empty(name: PalaceName) -> Self {
        Self {
            name,
            position: name.position(),
            stars: Vec::new(),
        }
    }

    /// Whether a star named `name` sits in this palace.
    pub fn has_star(&self, name: StarName) -> bool {
        self.stars.iter().any(|s| s.name == name)
    }

    /// Star names in palace order.
    pub fn star_names(&self) -> Vec<StarName> {
        self.stars.iter().map(|s| s.name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_ring_order() {
        for (i, p) in ALL_PALACES.iter().enumerate() {
            assert_eq!(p.position() as usize, i + 1);
        }
    }

    #[test]
    fn life_palace_is_first() {
        assert_eq!(ALL_PALACES[0], PalaceName::Life);
        assert_eq!(PalaceName::Life.name(), "命宫");
    }

    #[test]
    fn parse_palace_names() {
        assert_eq!("官禄".parse::<PalaceName>().unwrap(), PalaceName::Career);
        assert_eq!("career".parse::<PalaceName>().unwrap(), PalaceName::Career);
        assert!("天罗".parse::<PalaceName>().is_err());
    }

    #[test]
    fn empty_palace() {
        let p = Palace::empty(PalaceName::Wealth);
        assert_eq!(p.position, 5);
        assert!(p.is_empty());
        assert!(!p.has_star(StarName::ZiWei));
    }
}
