//! Formation (格局) detection.
//!
//! Each table entry carries one rule:
//! - [`PatternRule::Stars`]: every listed star sits in one palace, or every
//!   listed star sits in some palace together with its opposite palace.
//! - [`PatternRule::Transformations`]: one single star carries every listed tag.
//! - [`PatternRule::EmptyLifePalace`]: the life palace holds no stars.
//!
//! Results follow table order: good formations first, then bad ones.

use serde::Serialize;
use ziwei_base::{Chart, StarName, Transformation, opposite_position};

/// Which table partition a formation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternClass {
    Good,
    Bad,
}

/// Match condition of a formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRule {
    Stars(&'static [StarName]),
    Transformations(&'static [Transformation]),
    EmptyLifePalace,
}

/// Static formation table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub score: i32,
    pub rule: PatternRule,
}

/// A formation found on a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternResult {
    pub name: &'static str,
    pub description: &'static str,
    pub score: i32,
    pub classification: PatternClass,
}

/// 吉格
pub const GOOD_PATTERNS: [Pattern; 5] = [
    Pattern {
        name: "禄权科格",
        description: "禄、权、科三星会照",
        score: 90,
        rule: PatternRule::Transformations(&[
            Transformation::Lu,
            Transformation::Quan,
            Transformation::Ke,
        ]),
    },
    Pattern {
        name: "紫府同宫",
        description: "紫微天府同宫",
        score: 85,
        rule: PatternRule::Stars(&[StarName::ZiWei, StarName::TianFu]),
    },
    Pattern {
        name: "日月并明",
        description: "太阳太阴同宫或对宫",
        score: 80,
        rule: PatternRule::Stars(&[StarName::TaiYang, StarName::TaiYin]),
    },
    Pattern {
        name: "左右同宫",
        description: "左辅右弼同宫或对宫",
        score: 75,
        rule: PatternRule::Stars(&[StarName::ZuoFu, StarName::YouBi]),
    },
    Pattern {
        name: "昌曲同宫",
        description: "文昌文曲同宫或对宫",
        score: 70,
        rule: PatternRule::Stars(&[StarName::WenChang, StarName::WenQu]),
    },
];

/// 凶格
pub const BAD_PATTERNS: [Pattern; 3] = [
    Pattern {
        name: "火铃格",
        description: "火星铃星同宫",
        score: -60,
        rule: PatternRule::Stars(&[StarName::HuoXing, StarName::LingXing]),
    },
    Pattern {
        name: "空劫格",
        description: "地空地劫同宫",
        score: -55,
        rule: PatternRule::Stars(&[StarName::DiKong, StarName::DiJie]),
    },
    Pattern {
        name: "孤寒格",
        description: "命宫无主星照会",
        score: -50,
        rule: PatternRule::EmptyLifePalace,
    },
];

/// Look up a formation by name in either table.
pub fn find_pattern(name: &str) -> Option<(&'static Pattern, PatternClass)> {
    GOOD_PATTERNS
        .iter()
        .map(|p| (p, PatternClass::Good))
        .chain(BAD_PATTERNS.iter().map(|p| (p, PatternClass::Bad)))
        .find(|(p, _)| p.name == name)
}

/// Every listed star sits in one palace.
fn stars_same_palace(chart: &Chart, stars: &[StarName]) -> bool {
    chart
        .palaces
        .iter()
        .any(|palace| stars.iter().all(|&s| palace.has_star(s)))
}

/// Every listed star sits in some palace or its opposite palace.
fn stars_across_opposites(chart: &Chart, stars: &[StarName]) -> bool {
    chart.palaces.iter().any(|palace| {
        let opposite = chart.palace(opposite_position(palace.position));
        stars
            .iter()
            .all(|&s| palace.has_star(s) || opposite.is_some_and(|o| o.has_star(s)))
    })
}

/// Some single star carries every listed tag.
fn tags_on_one_star(chart: &Chart, tags: &[Transformation]) -> bool {
    chart.stars().any(|star| star.has_all_aspects(tags))
}

/// The life palace is missing or holds no stars.
fn life_palace_empty(chart: &Chart) -> bool {
    chart.life_palace().is_none_or(|p| p.is_empty())
}

impl PatternRule {
    /// Whether the rule holds on `chart`.
    pub fn matches(&self, chart: &Chart) -> bool {
        match *self {
            Self::Stars(stars) => {
                stars_same_palace(chart, stars) || stars_across_opposites(chart, stars)
            }
            Self::Transformations(tags) => tags_on_one_star(chart, tags),
            Self::EmptyLifePalace => life_palace_empty(chart),
        }
    }
}

fn detect_in(chart: &Chart, table: &[Pattern], class: PatternClass, out: &mut Vec<PatternResult>) {
    for pattern in table {
        if pattern.rule.matches(chart) {
            tracing::trace!(pattern = pattern.name, "formation matched");
            out.push(PatternResult {
                name: pattern.name,
                description: pattern.description,
                score: pattern.score,
                classification: class,
            });
        }
    }
}

/// Detect every formation on `chart`, good table first.
pub fn detect_patterns(chart: &Chart) -> Vec<PatternResult> {
    let mut results = Vec::new();
    detect_in(chart, &GOOD_PATTERNS, PatternClass::Good, &mut results);
    detect_in(chart, &BAD_PATTERNS, PatternClass::Bad, &mut results);
    tracing::debug!(chart = %chart.id, matched = results.len(), "detected formations");
    results
}

/// Sum of the scores of `results`.
pub fn total_score(results: &[PatternResult]) -> i32 {
    results.iter().map(|r| r.score).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::{BirthData, Gender, Palace, Star, compute_chart};

    /// Chart with no stars; tests place what they need.
    fn bare_chart() -> Chart {
        let mut chart = compute_chart(&BirthData::new(1991, 7, 12, 12, Gender::Male));
        for palace in &mut chart.palaces {
            palace.stars.clear();
        }
        chart
    }

    fn put(chart: &mut Chart, name: StarName, position: u8) -> &mut Star {
        let palace: &mut Palace = &mut chart.palaces[position as usize - 1];
        palace.stars.push(Star::new(name, position));
        palace.stars.last_mut().unwrap()
    }

    fn names(results: &[PatternResult]) -> Vec<&'static str> {
        results.iter().map(|r| r.name).collect()
    }

    #[test]
    fn same_palace_pair() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::ZiWei, 1);
        put(&mut chart, StarName::TianFu, 1);
        assert_eq!(names(&detect_patterns(&chart)), vec!["紫府同宫"]);
    }

    #[test]
    fn opposite_palace_pair() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::TaiYang, 4);
        put(&mut chart, StarName::TaiYin, 10);
        let results = detect_patterns(&chart);
        assert!(names(&results).contains(&"日月并明"));
    }

    #[test]
    fn opposite_wraps_past_twelve() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::ZuoFu, 9);
        put(&mut chart, StarName::YouBi, 3);
        put(&mut chart, StarName::ZiWei, 1);
        assert_eq!(names(&detect_patterns(&chart)), vec!["左右同宫"]);
    }

    #[test]
    fn adjacent_palaces_do_not_match() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::ZiWei, 1);
        put(&mut chart, StarName::TianFu, 2);
        assert!(detect_patterns(&chart).is_empty());
    }

    #[test]
    fn bad_pair_detected() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::TaiYin, 1);
        put(&mut chart, StarName::HuoXing, 5);
        put(&mut chart, StarName::LingXing, 5);
        let results = detect_patterns(&chart);
        assert_eq!(names(&results), vec!["火铃格"]);
        assert_eq!(results[0].classification, PatternClass::Bad);
        assert_eq!(results[0].score, -60);
    }

    #[test]
    fn tags_must_share_one_star() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::JuMen, 2).aspects.push(Transformation::Lu);
        put(&mut chart, StarName::TaiYang, 2).aspects.push(Transformation::Quan);
        put(&mut chart, StarName::WenQu, 2).aspects.push(Transformation::Ke);
        put(&mut chart, StarName::TianFu, 1);
        assert!(detect_patterns(&chart).is_empty());
    }

    #[test]
    fn tags_on_single_star_match() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::TianFu, 1);
        put(&mut chart, StarName::TaiYin, 8).aspects.extend([
            Transformation::Lu,
            Transformation::Quan,
            Transformation::Ke,
        ]);
        let results = detect_patterns(&chart);
        assert_eq!(names(&results), vec!["禄权科格"]);
        assert_eq!(results[0].classification, PatternClass::Good);
    }

    #[test]
    fn empty_life_palace_is_isolation() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::QiSha, 2);
        let results = detect_patterns(&chart);
        assert_eq!(names(&results), vec!["孤寒格"]);
        assert_eq!(results[0].score, -50);
    }

    #[test]
    fn results_in_table_order() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::DiKong, 6);
        put(&mut chart, StarName::DiJie, 6);
        put(&mut chart, StarName::WenChang, 3);
        put(&mut chart, StarName::WenQu, 3);
        put(&mut chart, StarName::ZiWei, 7);
        put(&mut chart, StarName::TianFu, 7);
        assert_eq!(
            names(&detect_patterns(&chart)),
            vec!["紫府同宫", "昌曲同宫", "空劫格", "孤寒格"]
        );
    }

    #[test]
    fn find_pattern_by_name() {
        let (p, class) = find_pattern("孤寒格").unwrap();
        assert_eq!(p.score, -50);
        assert_eq!(class, PatternClass::Bad);
        assert!(find_pattern("不存在").is_none());
    }

    #[test]
    fn table_names_unique() {
        let all: Vec<&str> = GOOD_PATTERNS
            .iter()
            .chain(BAD_PATTERNS.iter())
            .map(|p| p.name)
            .collect();
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn score_signs_follow_partition() {
        assert!(GOOD_PATTERNS.iter().all(|p| p.score > 0));
        assert!(BAD_PATTERNS.iter().all(|p| p.score < 0));
    }

    #[test]
    fn total() {
        let mut chart = bare_chart();
        put(&mut chart, StarName::ZiWei, 4);
        put(&mut chart, StarName::TianFu, 4);
        assert_eq!(total_score(&detect_patterns(&chart)), 85 - 50);
    }
}
