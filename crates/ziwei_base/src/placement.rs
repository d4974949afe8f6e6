//! Anchor lookups and offset placement for the two star systems.
//!
//! The 紫微 system is anchored by the lunar day of birth. The 天府 system
//! is anchored by mirroring the 紫微 anchor across the 3/9 axis of the
//! ring. Every other star sits at a fixed offset from its system's anchor.

use crate::ring::offset_position;
use crate::star::{Star, StarName};

/// Inclusive lunar-day ranges and the 紫微 anchor each one selects.
///
/// Covers days 1-30 without gaps or overlaps.
pub const ZIWEI_DAY_RANGES: [(u8, u8, u8); 12] = [
    (1, 3, 2),
    (4, 5, 3),
    (6, 8, 4),
    (9, 10, 5),
    (11, 13, 6),
    (14, 15, 7),
    (16, 18, 8),
    (19, 20, 9),
    (21, 23, 10),
    (24, 25, 11),
    (26, 28, 12),
    (29, 30, 1),
];

/// 天府 anchor indexed by `ziwei_anchor - 1`.
pub const TIANFU_BY_ZIWEI: [u8; 12] = [5, 4, 3, 2, 1, 12, 11, 10, 9, 8, 7, 6];

/// Position used when a lookup has no entry.
const FALLBACK_ANCHOR: u8 = 1;

/// One star system: an anchor star and its satellites at fixed offsets.
#[derive(Debug, Clone, Copy)]
pub struct StarSystem {
    pub anchor: StarName,
    /// `(star, offset from anchor)` in placement order.
    pub offsets: &'static [(StarName, i32)],
}

/// System A, anchored on 紫微.
pub const ZIWEI_SYSTEM: StarSystem = StarSystem {
    anchor: StarName::ZiWei,
    offsets: &[
        (StarName::TaiYang, -3),
        (StarName::WenChang, 4),
        (StarName::ZuoFu, 2),
        (StarName::HuoXing, 7),
        (StarName::DiKong, -5),
    ],
};

/// System B, anchored on 天府.
pub const TIANFU_SYSTEM: StarSystem = StarSystem {
    anchor: StarName::TianFu,
    offsets: &[
        (StarName::TaiYin, 1),
        (StarName::TanLang, 2),
        (StarName::JuMen, 3),
        (StarName::TianXiang, 4),
        (StarName::TianLiang, 5),
        (StarName::QiSha, 6),
        (StarName::PoJun, 10),
        (StarName::WenQu, -4),
        (StarName::YouBi, -2),
        (StarName::LingXing, 8),
        (StarName::DiJie, 17),
    ],
};

/// 紫微 anchor for a lunar day, or None for a day outside 1-30.
pub fn ziwei_anchor_for_day(day: u8) -> Option<u8> {
    ZIWEI_DAY_RANGES
        .iter()
        .find(|&&(start, end, _)| (start..=end).contains(&day))
        .map(|&(_, _, position)| position)
}

/// 紫微 anchor for `day`, falling back to position 1.
pub fn ziwei_anchor(day: u8) -> u8 {
    ziwei_anchor_for_day(day).unwrap_or_else(|| {
        tracing::debug!(day, "lunar day outside 1-30, anchoring 紫微 at position 1");
        FALLBACK_ANCHOR
    })
}

/// 天府 anchor derived from the resolved 紫微 anchor.
pub fn tianfu_anchor(ziwei_position: u8) -> u8 {
    match ziwei_position {
        1..=12 => TIANFU_BY_ZIWEI[ziwei_position as usize - 1],
        _ => {
            tracing::debug!(ziwei_position, "紫微 anchor off the ring, anchoring 天府 at 1");
            FALLBACK_ANCHOR
        }
    }
}

impl StarSystem {
    /// Place the anchor at `anchor_position` and every satellite at its
    /// offset. The anchor comes first, satellites follow in table order.
    pub fn place(&self, anchor_position: u8) -> Vec<Star> {
        let mut stars = Vec::with_capacity(self.offsets.len() + 1);
        stars.push(Star::new(self.anchor, anchor_position));
        for &(name, offset) in self.offsets {
            stars.push(Star::new(name, offset_position(anchor_position, offset)));
        }
        stars
    }
}

/// Place both systems for a lunar day: 紫微 stars first, then 天府 stars.
pub fn place_stars(day: u8) -> Vec<Star> {
    let ziwei = ziwei_anchor(day);
    let tianfu = tianfu_anchor(ziwei);
    tracing::trace!(day, ziwei, tianfu, "resolved system anchors");
    let mut stars = ZIWEI_SYSTEM.place(ziwei);
    stars.extend(TIANFU_SYSTEM.place(tianfu));
    stars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::ALL_STARS;

    #[test]
    fn day_ranges_cover_one_to_thirty() {
        for day in 1..=30 {
            let hits = ZIWEI_DAY_RANGES
                .iter()
                .filter(|&&(s, e, _)| (s..=e).contains(&day))
                .count();
            assert_eq!(hits, 1, "day {day}");
        }
    }

    #[test]
    fn out_of_range_day_falls_back() {
        assert_eq!(ziwei_anchor_for_day(0), None);
        assert_eq!(ziwei_anchor_for_day(31), None);
        assert_eq!(ziwei_anchor(31), 1);
        assert_eq!(ziwei_anchor(0), 1);
    }

    #[test]
    fn known_anchors() {
        assert_eq!(ziwei_anchor(1), 2);
        assert_eq!(ziwei_anchor(12), 6);
        assert_eq!(ziwei_anchor(30), 1);
    }

    #[test]
    fn tianfu_mirrors_across_three_nine_axis() {
        assert_eq!(tianfu_anchor(3), 3);
        assert_eq!(tianfu_anchor(9), 9);
        assert_eq!(tianfu_anchor(6), 12);
        for z in 1..=12u8 {
            assert_eq!(tianfu_anchor(tianfu_anchor(z)), z);
        }
    }

    #[test]
    fn tianfu_off_ring_falls_back() {
        assert_eq!(tianfu_anchor(0), 1);
        assert_eq!(tianfu_anchor(13), 1);
    }

    #[test]
    fn every_star_placed_exactly_once() {
        let stars = place_stars(12);
        assert_eq!(stars.len(), ALL_STARS.len());
        for name in ALL_STARS {
            assert_eq!(stars.iter().filter(|s| s.name == name).count(), 1);
        }
    }

    #[test]
    fn offsets_wrap_both_ways() {
        // 紫微 at 6, 天府 at 12
        let stars = place_stars(12);
        let at = |n: StarName| stars.iter().find(|s| s.name == n).unwrap().position;
        assert_eq!(at(StarName::ZiWei), 6);
        assert_eq!(at(StarName::TaiYang), 3);
        assert_eq!(at(StarName::DiKong), 1);
        assert_eq!(at(StarName::TianFu), 12);
        assert_eq!(at(StarName::TaiYin), 1);
        assert_eq!(at(StarName::PoJun), 10);
        assert_eq!(at(StarName::DiJie), 5);
    }

    #[test]
    fn anchors_lead_their_systems() {
        let stars = place_stars(20);
        assert_eq!(stars[0].name, StarName::ZiWei);
        assert_eq!(stars[ZIWEI_SYSTEM.offsets.len() + 1].name, StarName::TianFu);
    }
}
