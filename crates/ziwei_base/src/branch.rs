//! Earthly branches (地支) and the birth-hour to branch mapping.
//!
//! The day is divided into twelve two-hour watches. The 子 watch straddles
//! midnight (23:00-00:59), so hour 23 and hour 0 share a branch.

use serde::Serialize;

/// The 12 earthly branches starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cyclic order (index 0 = 子).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}

/// Branch of the two-hour watch containing `hour`, or None outside 0..=23.
pub const fn branch_for_hour(hour: u8) -> Option<EarthlyBranch> {
    match hour {
        23 | 0 => Some(EarthlyBranch::Zi),
        1 | 2 => Some(EarthlyBranch::Chou),
        3 | 4 => Some(EarthlyBranch::Yin),
        5 | 6 => Some(EarthlyBranch::Mao),
        7 | 8 => Some(EarthlyBranch::Chen),
        9 | 10 => Some(EarthlyBranch::Si),
        11 | 12 => Some(EarthlyBranch::Wu),
        13 | 14 => Some(EarthlyBranch::Wei),
        15 | 16 => Some(EarthlyBranch::Shen),
        17 | 18 => Some(EarthlyBranch::You),
        19 | 20 => Some(EarthlyBranch::Xu),
        21 | 22 => Some(EarthlyBranch::Hai),
        _ => None,
    }
}

/// Branch for `hour`, falling back to 子 for an hour outside the table.
pub fn hour_branch(hour: u8) -> EarthlyBranch {
    branch_for_hour(hour).unwrap_or_else(|| {
        tracing::debug!(hour, "hour outside 0..=23, using 子 watch");
        EarthlyBranch::Zi
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn midnight_watch_spans_two_days() {
        assert_eq!(branch_for_hour(23), Some(EarthlyBranch::Zi));
        assert_eq!(branch_for_hour(0), Some(EarthlyBranch::Zi));
    }

    #[test]
    fn noon_is_wu() {
        assert_eq!(branch_for_hour(11), Some(EarthlyBranch::Wu));
        assert_eq!(branch_for_hour(12), Some(EarthlyBranch::Wu));
    }

    #[test]
    fn every_valid_hour_has_a_branch() {
        for h in 0..24 {
            assert!(branch_for_hour(h).is_some(), "hour {h}");
        }
    }

    #[test]
    fn each_branch_covers_two_hours() {
        for b in ALL_BRANCHES {
            let n = (0..24).filter(|&h| branch_for_hour(h) == Some(b)).count();
            assert_eq!(n, 2, "{}", b.name());
        }
    }

    #[test]
    fn out_of_range_hour_falls_back_to_zi() {
        assert_eq!(branch_for_hour(24), None);
        assert_eq!(hour_branch(24), EarthlyBranch::Zi);
        assert_eq!(hour_branch(200), EarthlyBranch::Zi);
    }
}
