//! Star readings (星耀解读) keyed by computed strength.
//!
//! A star at or above [`FAVORABLE_THRESHOLD`] gets its favorable clause,
//! anything below gets the unfavorable one. Stars without a table entry
//! produce no reading.

use serde::Serialize;
use ziwei_base::{Chart, StarName};

/// Minimum strength for the favorable clause.
pub const FAVORABLE_THRESHOLD: u8 = 80;

/// Separator between the meaning and the strength clause.
const CLAUSE_SEPARATOR: &str = "。";

/// Static reading text for one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingEntry {
    pub meaning: &'static str,
    pub favorable: &'static str,
    pub unfavorable: &'static str,
}

/// Reading produced for a star on a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarReading {
    pub star: StarName,
    pub text: String,
    /// Whether the favorable clause was chosen.
    pub favorable: bool,
}

const fn entry(
    meaning: &'static str,
    favorable: &'static str,
    unfavorable: &'static str,
) -> Option<ReadingEntry> {
    Some(ReadingEntry {
        meaning,
        favorable,
        unfavorable,
    })
}

/// Reading table lookup.
pub const fn reading_entry(star: StarName) -> Option<ReadingEntry> {
    match star {
        StarName::ZiWei => entry(
            "代表个人的尊贵、地位、权威",
            "紫微星有力，主贵气、有权威、受人尊重",
            "紫微星陷地，易傲慢、固执，不善处理人际关系",
        ),
        StarName::TianFu => entry(
            "代表财运、福德、人缘",
            "天府星有力，主财运亨通、人缘好、生活富足",
            "天府星失陷，易财运不稳、人际关系复杂",
        ),
        StarName::TaiYang => entry(
            "代表光明、博爱、男性长辈",
            "太阳星明亮，主热情开朗、乐于助人、名声远播",
            "太阳星失辉，易劳而无功、与男性长辈缘薄",
        ),
        StarName::TaiYin => entry(
            "代表财富、田宅、女性长辈",
            "太阴星明亮，主心思细腻、积蓄丰厚、家宅安稳",
            "太阴星失辉，易多愁善感、财来财去",
        ),
        StarName::WenChang => entry(
            "代表文书、科名、学识",
            "文昌星得地，主聪明好学、考运亨通",
            "文昌星落陷，易文书出错、学业多阻",
        ),
        StarName::WenQu => entry(
            "代表才艺、口才、灵感",
            "文曲星得地，主多才多艺、能言善辩",
            "文曲星落陷，易言多有失、才华难展",
        ),
        StarName::ZuoFu => entry(
            "代表助力、贵人、同辈扶持",
            "左辅星有力，主得人相助、做事稳健",
            "左辅星无力，易孤军奋战、助力不足",
        ),
        StarName::YouBi => entry(
            "代表助力、人缘、异性扶持",
            "右弼星有力，主人缘广阔、逢凶化吉",
            "右弼星无力，易所托非人、助力反成拖累",
        ),
        StarName::TanLang => entry(
            "代表欲望、交际、才艺",
            "贪狼星有力，主多才多艺、善于交际、机遇多",
            "贪狼星失陷，易贪多务得、沉溺享乐",
        ),
        StarName::JuMen => entry(
            "代表口才、是非、研究",
            "巨门星有力，主口才出众、善于钻研",
            "巨门星失陷，易招口舌是非、多疑",
        ),
        StarName::TianXiang => entry(
            "代表辅佐、印信、公正",
            "天相星有力，主为人正直、善于协调",
            "天相星失陷，易优柔寡断、受人牵连",
        ),
        StarName::TianLiang => entry(
            "代表荫庇、长寿、清高",
            "天梁星有力，主逢凶化吉、得长辈荫庇",
            "天梁星失陷，易孤高自许、多管闲事",
        ),
        StarName::QiSha => entry(
            "代表魄力、变动、开创",
            "七杀星有力，主果敢坚毅、能开创局面",
            "七杀星失陷，易冲动冒进、波折多",
        ),
        StarName::PoJun => entry(
            "代表破旧、变革、消耗",
            "破军星有力，主勇于革新、破而后立",
            "破军星失陷，易反复无常、耗损多",
        ),
        StarName::HuoXing | StarName::LingXing | StarName::DiKong | StarName::DiJie => None,
    }
}

/// Reading text for `star` at `strength`, None without a table entry.
pub fn read_star(star: StarName, strength: u8) -> Option<StarReading> {
    let entry = reading_entry(star)?;
    let favorable = strength >= FAVORABLE_THRESHOLD;
    let clause = if favorable {
        entry.favorable
    } else {
        entry.unfavorable
    };
    Some(StarReading {
        star,
        text: format!("{}{CLAUSE_SEPARATOR}{clause}", entry.meaning),
        favorable,
    })
}

/// Readings for every star on `chart` with a table entry, palace by palace.
pub fn generate_star_readings(chart: &Chart) -> Vec<StarReading> {
    chart
        .stars()
        .filter_map(|star| read_star(star.name, star.strength))
        .collect()
}
