//! Star names, categories, transformation tags and the placed `Star`.
//!
//! The star vocabulary is closed: every star the calculator can place is a
//! variant of [`StarName`]. Names serialize as their Chinese characters.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::ZiweiError;
use crate::strength::Dignity;

/// The 18 stars placed on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StarName {
    #[serde(rename = "紫微")]
    ZiWei,
    #[serde(rename = "天府")]
    TianFu,
    #[serde(rename = "太阳")]
    TaiYang,
    #[serde(rename = "太阴")]
    TaiYin,
    #[serde(rename = "文昌")]
    WenChang,
    #[serde(rename = "文曲")]
    WenQu,
    #[serde(rename = "左辅")]
    ZuoFu,
    #[serde(rename = "右弼")]
    YouBi,
    #[serde(rename = "火星")]
    HuoXing,
    #[serde(rename = "铃星")]
    LingXing,
    #[serde(rename = "地空")]
    DiKong,
    #[serde(rename = "地劫")]
    DiJie,
    #[serde(rename = "贪狼")]
    TanLang,
    #[serde(rename = "巨门")]
    JuMen,
    #[serde(rename = "天相")]
    TianXiang,
    #[serde(rename = "天梁")]
    TianLiang,
    #[serde(rename = "七杀")]
    QiSha,
    #[serde(rename = "破军")]
    PoJun,
}

/// All 18 stars, favorable first, then unfavorable, then the rest.
pub const ALL_STARS: [StarName; 18] = [
    StarName::ZiWei,
    StarName::TianFu,
    StarName::TaiYang,
    StarName::TaiYin,
    StarName::WenChang,
    StarName::WenQu,
    StarName::ZuoFu,
    StarName::YouBi,
    StarName::HuoXing,
    StarName::LingXing,
    StarName::DiKong,
    StarName::DiJie,
    StarName::TanLang,
    StarName::JuMen,
    StarName::TianXiang,
    StarName::TianLiang,
    StarName::QiSha,
    StarName::PoJun,
];

impl StarName {
    /// Chinese name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianFu => "天府",
            Self::TaiYang => "太阳",
            Self::TaiYin => "太阴",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::HuoXing => "火星",
            Self::LingXing => "铃星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
        }
    }

    /// Pinyin name, lowercase without tone marks.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::ZiWei => "ziwei",
            Self::TianFu => "tianfu",
            Self::TaiYang => "taiyang",
            Self::TaiYin => "taiyin",
            Self::WenChang => "wenchang",
            Self::WenQu => "wenqu",
            Self::ZuoFu => "zuofu",
            Self::YouBi => "youbi",
            Self::HuoXing => "huoxing",
            Self::LingXing => "lingxing",
            Self::DiKong => "dikong",
            Self::DiJie => "dijie",
            Self::TanLang => "tanlang",
            Self::JuMen => "jumen",
            Self::TianXiang => "tianxiang",
            Self::TianLiang => "tianliang",
            Self::QiSha => "qisha",
            Self::PoJun => "pojun",
        }
    }

    /// Category from the static classification table.
    pub const fn category(self) -> StarCategory {
        match self {
            Self::ZiWei
            | Self::TianFu
            | Self::TaiYang
            | Self::TaiYin
            | Self::TanLang
            | Self::JuMen
            | Self::TianXiang
            | Self::TianLiang
            | Self::QiSha
            | Self::PoJun => StarCategory::Major,
            Self::WenChang | Self::WenQu | Self::ZuoFu | Self::YouBi => StarCategory::Lucky,
            Self::HuoXing | Self::LingXing | Self::DiKong | Self::DiJie => StarCategory::Unlucky,
        }
    }

    /// All 18 stars.
    pub const fn all() -> &'static [StarName; 18] {
        &ALL_STARS
    }
}

impl Display for StarName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StarName {
    type Err = ZiweiError;

    /// Accepts the Chinese name or the pinyin name (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STARS
            .iter()
            .copied()
            .find(|star| star.name() == s || star.pinyin().eq_ignore_ascii_case(s))
            .ok_or_else(|| ZiweiError::UnknownName {
                kind: "star",
                value: s.to_string(),
            })
    }
}

/// Broad class of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarCategory {
    Major,
    Lucky,
    Unlucky,
    Neutral,
}

/// Year-stem transformation tags (四化).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Transformation {
    #[serde(rename = "化禄")]
    Lu,
    #[serde(rename = "化权")]
    Quan,
    #[serde(rename = "化科")]
    Ke,
    #[serde(rename = "化忌")]
    Ji,
}

/// All four tags in traditional order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    /// Chinese name of the tag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "化禄",
            Self::Quan => "化权",
            Self::Ke => "化科",
            Self::Ji => "化忌",
        }
    }

    /// Additive strength adjustment applied to a star carrying this tag.
    pub const fn strength_delta(self) -> i32 {
        match self {
            Self::Lu => 15,
            Self::Quan => 10,
            Self::Ke => 10,
            Self::Ji => -10,
        }
    }
}

impl Display for Transformation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A star placed on a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Star {
    /// `name-position`, unique within a chart.
    pub id: String,
    pub name: StarName,
    pub category: StarCategory,
    /// Ring position in [1, 12].
    pub position: u8,
    /// Scored strength in [0, 100].
    pub strength: u8,
    /// Transformation tags in the order they were assigned.
    pub aspects: Vec<Transformation>,
    /// Palace tier that adjusted the strength, if any.
    pub dignity: Option<Dignity>,
}

impl Star {
    /// Unscored star at `position` with no tags.
    pub fn new(name: StarName, position: u8) -> Self {
        Self {
            id: format!("{}-{}", name.name(), position),
            name,
            category: name.category(),
            position,
            strength: 0,
            aspects: Vec::new(),
            dignity: None,
        }
    }

    /// Whether the star carries `tag`.
    pub fn has_aspect(&self, tag: Transformation) -> bool {
        self.aspects.contains(&tag)
    }

    /// Whether the star carries every tag in `tags`.
    pub fn has_all_aspects(&self, tags: &[Transformation]) -> bool {
        tags.iter().all(|&t| self.has_aspect(t))
    }
}
