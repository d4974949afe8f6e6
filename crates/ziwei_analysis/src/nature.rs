//! Favorable / unfavorable classification of stars.

use serde::Serialize;
use ziwei_base::StarName;

/// Nature of a star for palace and fortune scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarNature {
    /// 吉星
    Favorable,
    /// 凶星
    Unfavorable,
    /// 中性
    Neutral,
}

/// 吉星
pub const FAVORABLE_STARS: [StarName; 8] = [
    StarName::ZiWei,
    StarName::TianFu,
    StarName::TaiYang,
    StarName::TaiYin,
    StarName::WenChang,
    StarName::WenQu,
    StarName::ZuoFu,
    StarName::YouBi,
];

/// 凶星
pub const UNFAVORABLE_STARS: [StarName; 4] = [
    StarName::HuoXing,
    StarName::LingXing,
    StarName::DiKong,
    StarName::DiJie,
];

impl StarNature {
    /// Chinese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Favorable => "吉星",
            Self::Unfavorable => "凶星",
            Self::Neutral => "中性",
        }
    }
}

/// Classify a star by membership in the favorable and unfavorable sets.
pub fn star_nature(name: StarName) -> StarNature {
    if FAVORABLE_STARS.contains(&name) {
        StarNature::Favorable
    } else if UNFAVORABLE_STARS.contains(&name) {
        StarNature::Unfavorable
    } else {
        StarNature::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::ALL_STARS;

    #[test]
    fn sets_disjoint() {
        for s in FAVORABLE_STARS {
            assert!(!UNFAVORABLE_STARS.contains(&s));
        }
    }

    #[test]
    fn neutral_remainder() {
        let neutral = ALL_STARS
            .iter()
            .filter(|&&s| star_nature(s) == StarNature::Neutral)
            .count();
        assert_eq!(neutral, 6);
        assert_eq!(star_nature(StarName::QiSha), StarNature::Neutral);
    }

    #[test]
    fn known_natures() {
        assert_eq!(star_nature(StarName::ZiWei), StarNature::Favorable);
        assert_eq!(star_nature(StarName::DiJie), StarNature::Unfavorable);
    }
}
