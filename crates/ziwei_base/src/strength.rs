//! Star strength scoring: base strength, palace tiers and tag deltas.
//!
//! strength = base + tier bonus + sum(tag deltas), clamped to [0, 100].
//!
//! Tiers are checked temple, prosperous, trapped; the first set containing
//! the star's position decides. The three sets of any star are disjoint.

use serde::Serialize;

use crate::star::{Star, StarName};

/// Base strength for a star with no table entry.
pub const DEFAULT_BASE_STRENGTH: i32 = 70;

/// Upper bound of a scored strength.
pub const MAX_STRENGTH: i32 = 100;

/// Palace tier of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dignity {
    /// 庙
    Temple,
    /// 旺
    Prosperous,
    /// 陷
    Trapped,
}

/// Tiers in the order they are checked.
pub const DIGNITY_ORDER: [Dignity; 3] = [Dignity::Temple, Dignity::Prosperous, Dignity::Trapped];

impl Dignity {
    /// Chinese name of the tier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temple => "庙",
            Self::Prosperous => "旺",
            Self::Trapped => "陷",
        }
    }

    /// Strength adjustment for a star in this tier.
    pub const fn strength_delta(self) -> i32 {
        match self {
            Self::Temple => 20,
            Self::Prosperous => 10,
            Self::Trapped => -20,
        }
    }
}

/// Position sets for one star's three tiers.
#[derive(Debug, Clone, Copy)]
pub struct DignityTable {
    pub temple: &'static [u8],
    pub prosperous: &'static [u8],
    pub trapped: &'static [u8],
}

impl DignityTable {
    /// Positions belonging to `tier`.
    pub const fn positions(&self, tier: Dignity) -> &'static [u8] {
        match tier {
            Dignity::Temple => self.temple,
            Dignity::Prosperous => self.prosperous,
            Dignity::Trapped => self.trapped,
        }
    }
}

/// Base strength from the static table, None if the star has no entry.
pub const fn base_strength(name: StarName) -> Option<i32> {
    match name {
        StarName::ZiWei => Some(90),
        StarName::TianFu => Some(85),
        StarName::TaiYang | StarName::TaiYin => Some(80),
        StarName::TanLang | StarName::TianXiang | StarName::TianLiang | StarName::QiSha => {
            Some(75)
        }
        StarName::JuMen | StarName::PoJun => Some(70),
        StarName::HuoXing | StarName::LingXing => Some(60),
        StarName::DiKong | StarName::DiJie => Some(55),
        StarName::WenChang | StarName::WenQu | StarName::ZuoFu | StarName::YouBi => None,
    }
}

/// Tier table for a star, None if its strength ignores position.
pub const fn dignity_table(name: StarName) -> Option<DignityTable> {
    let (temple, prosperous, trapped): (&'static [u8], &'static [u8], &'static [u8]) = match name {
        StarName::ZiWei => (&[1, 7], &[3, 5, 9, 11], &[]),
        StarName::TianFu => (&[1, 3, 7, 9], &[5, 11], &[]),
        StarName::TaiYang => (&[4, 5], &[3, 6, 7], &[10, 11, 12]),
        StarName::TaiYin => (&[10, 11, 12], &[1, 9], &[4, 5, 6]),
        StarName::TanLang => (&[2, 8], &[1, 7], &[6, 12]),
        StarName::JuMen => (&[4, 10], &[1, 7], &[5, 11]),
        StarName::TianXiang => (&[3, 9], &[1, 7], &[4, 10]),
        StarName::TianLiang => (&[1, 7], &[3, 9], &[6, 12]),
        StarName::QiSha => (&[3, 9], &[1, 7], &[5, 11]),
        StarName::PoJun => (&[1, 7], &[2, 8], &[4, 10]),
        StarName::HuoXing | StarName::LingXing => (&[3, 7, 11], &[], &[1, 5, 9]),
        _ => return None,
    };
    Some(DignityTable {
        temple,
        prosperous,
        trapped,
    })
}

/// First tier whose position set holds `position`.
pub fn dignity_at(name: StarName, position: u8) -> Option<Dignity> {
    let table = dignity_table(name)?;
    DIGNITY_ORDER
        .into_iter()
        .find(|&tier| table.positions(tier).contains(&position))
}

/// Score a star from its name, position and tags.
///
/// Returns the clamped strength and the tier that applied.
pub fn score(star: &Star) -> (u8, Option<Dignity>) {
    let mut strength = base_strength(star.name).unwrap_or(DEFAULT_BASE_STRENGTH);
    let dignity = dignity_at(star.name, star.position);
    if let Some(tier) = dignity {
        strength += tier.strength_delta();
    }
    strength += star.aspects.iter().map(|t| t.strength_delta()).sum::<i32>();
    (strength.clamp(0, MAX_STRENGTH) as u8, dignity)
}

/// Score `star` in place.
pub fn apply_strength(star: &mut Star) {
    let (strength, dignity) = score(star);
    star.strength = strength;
    star.dignity = dignity;
}
