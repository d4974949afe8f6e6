//! Per-palace interpretation (宫位解读).
//!
//! score = 10 * favorable stars - 8 * unfavorable stars. The interpretation
//! text is the palace's empty, favorable or unfavorable text.

use serde::Serialize;
use ziwei_base::{Palace, PalaceName};

use crate::nature::{StarNature, star_nature};

/// Score per favorable star in a palace.
pub const FAVORABLE_STAR_SCORE: i32 = 10;

/// Score per unfavorable star in a palace (subtracted).
pub const UNFAVORABLE_STAR_PENALTY: i32 = 8;

/// Static meaning and interpretation texts for one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalaceMeaning {
    pub meaning: &'static str,
    /// 空宫
    pub empty: &'static str,
    /// 吉星多
    pub favorable: &'static str,
    /// 凶星多
    pub unfavorable: &'static str,
}

/// Analysis of one palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalaceAnalysis {
    pub name: PalaceName,
    pub meaning: &'static str,
    pub star_count: usize,
    pub good_star_count: usize,
    pub bad_star_count: usize,
    pub interpretation: &'static str,
    pub score: i32,
}

const fn texts(
    meaning: &'static str,
    empty: &'static str,
    favorable: &'static str,
    unfavorable: &'static str,
) -> PalaceMeaning {
    PalaceMeaning {
        meaning,
        empty,
        favorable,
        unfavorable,
    }
}

/// Meaning table in ring order.
pub const PALACE_MEANINGS: [(PalaceName, PalaceMeaning); 12] = [
    (
        PalaceName::Life,
        texts(
            "代表个人的性格、才能、外貌与一生的总体运势",
            "命宫无主星，性格易受环境影响，需借对宫星耀论断",
            "命宫吉星汇聚，为人端正，才能出众，一生多得助力",
            "命宫凶星较多，性情急躁，人生多波折，宜修身养性",
        ),
    ),
    (
        PalaceName::Siblings,
        texts(
            "代表兄弟姐妹及同辈朋友的关系",
            "兄弟宫无主星，手足缘分平淡",
            "兄弟和睦，彼此扶持，同辈多助力",
            "兄弟缘薄，易有争执，宜各自发展",
        ),
    ),
    (
        PalaceName::Spouse,
        texts(
            "代表婚姻、配偶及感情生活",
            "夫妻宫无主星，感情需用心经营",
            "婚姻美满，配偶贤能，感情和谐",
            "感情多波折，婚姻需多包容与沟通",
        ),
    ),
    (
        PalaceName::Children,
        texts(
            "代表子女缘分及晚辈关系",
            "子女宫无主星，子女缘分较淡",
            "子女聪慧孝顺，晚辈有成",
            "子女教养费心，亲子关系需多经营",
        ),
    ),
    (
        PalaceName::Wealth,
        texts(
            "代表财运、理财能力及收入来源",
            "财帛宫无主星，财运起伏，需稳健理财",
            "财源广进，善于理财，积蓄丰厚",
            "财来财去，易有破耗，忌投机冒进",
        ),
    ),
    (
        PalaceName::Health,
        texts(
            "代表身体健康与疾病灾厄",
            "疾厄宫无主星，体质平常，注意作息",
            "身体康健，少病少灾",
            "体质较弱，需注意保养，防意外伤灾",
        ),
    ),
    (
        PalaceName::Travel,
        texts(
            "代表外出、迁徙及在外的际遇",
            "迁移宫无主星，外出机遇平平",
            "出外有贵人相助，远行多利",
            "外出多阻滞，远行宜谨慎",
        ),
    ),
    (
        PalaceName::Friends,
        texts(
            "代表朋友、下属及人际关系",
            "交友宫无主星，交际圈子较窄",
            "朋友得力，下属忠诚，人缘广阔",
            "交友不慎易受连累，宜择友而交",
        ),
    ),
    (
        PalaceName::Career,
        texts(
            "代表事业、职位及工作表现",
            "官禄宫无主星，事业方向需自行摸索",
            "事业顺遂，易得提拔，名利双收",
            "事业多阻，易有变动，宜稳扎稳打",
        ),
    ),
    (
        PalaceName::Property,
        texts(
            "代表家宅、不动产及家庭环境",
            "田宅宫无主星，置产宜缓",
            "家宅安宁，易置产业",
            "家宅不宁，置产需谨慎",
        ),
    ),
    (
        PalaceName::FortuneVirtue,
        texts(
            "代表精神生活、福分及兴趣爱好",
            "福德宫无主星，精神生活较平淡",
            "福分深厚，心境安乐，懂得享受生活",
            "思虑过多，精神易紧张，宜放宽心胸",
        ),
    ),
    (
        PalaceName::Parents,
        texts(
            "代表父母、长辈及与上级的关系",
            "父母宫无主星，与长辈缘分平淡",
            "父母慈爱，长辈提携，得上级赏识",
            "与父母长辈易有隔阂，宜多体谅",
        ),
    ),
];

/// Meaning texts for a palace, None if the table has no entry.
pub fn palace_meaning(name: PalaceName) -> Option<&'static PalaceMeaning> {
    PALACE_MEANINGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, meaning)| meaning)
}

/// Analyze one palace. None if its name has no meaning entry.
pub fn analyze_palace(palace: &Palace) -> Option<PalaceAnalysis> {
    let Some(meaning) = palace_meaning(palace.name) else {
        tracing::debug!(palace = palace.name.name(), "no meaning entry, skipping palace");
        return None;
    };

    let count = |nature| {
        palace
            .stars
            .iter()
            .filter(|s| star_nature(s.name) == nature)
            .count()
    };
    let good = count(StarNature::Favorable);
    let bad = count(StarNature::Unfavorable);

    let interpretation = if palace.stars.is_empty() {
        meaning.empty
    } else if good > bad {
        meaning.favorable
    } else {
        meaning.unfavorable
    };

    Some(PalaceAnalysis {
        name: palace.name,
        meaning: meaning.meaning,
        star_count: palace.stars.len(),
        good_star_count: good,
        bad_star_count: bad,
        interpretation,
        score: good as i32 * FAVORABLE_STAR_SCORE - bad as i32 * UNFAVORABLE_STAR_PENALTY,
    })
}
