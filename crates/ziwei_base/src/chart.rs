//! Chart assembly: life and body palaces, star placement and scoring.
//!
//! Pipeline for one chart:
//! 1. life palace from birth hour branch and month
//! 2. body palace six positions further round the ring
//! 3. 紫微 and 天府 anchors from the lunar day
//! 4. satellite stars at fixed offsets
//! 5. year-stem transformation tags
//! 6. strength scoring
//! 7. palaces filled and sorted by descending strength
//!
//! Every step is a pure function of the birth data and the static tables.
//! Only the chart identifier depends on the wall clock.

use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::birth::BirthData;
use crate::branch::hour_branch;
use crate::palace::{ALL_PALACES, Palace};
use crate::placement::{ZIWEI_SYSTEM, place_stars};
use crate::ring::{OPPOSITE_OFFSET, RING_SIZE, normalize_position, slot};
use crate::star::{Star, StarName};
use crate::strength::apply_strength;
use crate::transformation::apply_transformations;

/// Time-derived chart identifier (milliseconds since the Unix epoch).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChartId(String);

impl ChartId {
    /// Identifier from the current wall-clock time.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChartId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for ChartId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A computed chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: ChartId,
    pub birth_data: BirthData,
    /// Birth year used for fortune analysis. Always set by [`compute_chart`].
    pub birth_year: Option<i32>,
    /// Exactly 12 palaces, `palaces[i]` at position `i + 1`.
    pub palaces: Vec<Palace>,
    pub main_star: StarName,
    /// Body palace position in [1, 12].
    pub body_palace: u8,
}

impl Chart {
    /// Palace at a ring position, None outside [1, 12].
    pub fn palace(&self, position: u8) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.position == position)
    }

    /// Palace at position 1.
    pub fn life_palace(&self) -> Option<&Palace> {
        self.palace(1)
    }

    /// Palace at the body palace position.
    pub fn body_palace(&self) -> Option<&Palace> {
        self.palace(self.body_palace)
    }

    /// Palace holding a star named `name`.
    pub fn find_star(&self, name: StarName) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.has_star(name))
    }

    /// Every star on the chart, palace by palace.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.palaces.iter().flat_map(|p| p.stars.iter())
    }
}

/// Life palace (命宫) position: `12 - (month - 1) + branch index`, wrapped.
pub fn life_palace_position(birth: &BirthData) -> u8 {
    let branch = hour_branch(birth.hour);
    normalize_position(RING_SIZE - (birth.month as i32 - 1) + branch.index() as i32)
}

/// Body palace (身宫) position: six past the life palace.
///
/// `life_palace` must already be a ring position in [1, 12]; a single wrap
/// is applied.
pub fn body_palace_position(life_palace: u8) -> u8 {
    debug_assert!((1..=12).contains(&life_palace), "life palace off the ring");
    let body = life_palace as i32 + OPPOSITE_OFFSET;
    if body > RING_SIZE {
        (body - RING_SIZE) as u8
    } else {
        body as u8
    }
}

/// Stable sort by descending strength; equal strengths keep insertion order.
pub fn sort_by_strength(stars: &mut [Star]) {
    stars.sort_by(|a, b| b.strength.cmp(&a.strength));
}

/// Twelve empty palaces in ring order.
fn empty_palaces() -> Vec<Palace> {
    ALL_PALACES.iter().map(|&name| Palace::empty(name)).collect()
}

/// Compute the full chart for `birth`.
pub fn compute_chart(birth: &BirthData) -> Chart {
    let life = life_palace_position(birth);
    let body = body_palace_position(life);

    let mut stars = place_stars(birth.day);
    apply_transformations(&mut stars, birth.year);

    let mut palaces = empty_palaces();
    for mut star in stars {
        apply_strength(&mut star);
        palaces[slot(star.position)].stars.push(star);
    }
    for palace in &mut palaces {
        sort_by_strength(&mut palace.stars);
    }

    tracing::debug!(
        year = birth.year,
        month = birth.month,
        day = birth.day,
        hour = birth.hour,
        life,
        body,
        "computed chart"
    );

    Chart {
        id: ChartId::now(),
        birth_data: *birth,
        birth_year: Some(birth.year),
        palaces,
        main_star: ZIWEI_SYSTEM.anchor,
        body_palace: body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::Gender;
    use crate::star::Transformation;

    fn sample() -> BirthData {
        BirthData::new(1991, 7, 12, 12, Gender::Male)
    }

    #[test]
    fn life_palace_formula() {
        // 午 watch (index 6), month 7: 12 - 6 + 6 = 12
        assert_eq!(life_palace_position(&sample()), 12);
        // 子 watch, month 1: 12 - 0 + 0 = 12
        assert_eq!(life_palace_position(&BirthData::new(2000, 1, 1, 0, Gender::Male)), 12);
        // 亥 watch, month 1: 12 + 11 = 23 -> 11
        assert_eq!(life_palace_position(&BirthData::new(2000, 1, 1, 22, Gender::Male)), 11);
        // 子 watch, month 12: 12 - 11 = 1
        assert_eq!(life_palace_position(&BirthData::new(2000, 12, 1, 23, Gender::Male)), 1);
    }

    #[test]
    fn unknown_hour_uses_zi_watch() {
        let odd = BirthData::new(2000, 5, 1, 30, Gender::Female);
        let zi = BirthData::new(2000, 5, 1, 0, Gender::Female);
        assert_eq!(life_palace_position(&odd), life_palace_position(&zi));
    }

    #[test]
    fn extreme_birth_years_compute() {
        for year in [i32::MIN, i32::MAX] {
            let chart = compute_chart(&BirthData::new(year, 7, 12, 12, Gender::Male));
            assert_eq!(chart.birth_year, Some(year));
            assert_eq!(chart.stars().count(), 18);
        }
    }

    #[test]
    #[should_panic(expected = "life palace off the ring")]
    #[cfg(debug_assertions)]
    fn body_palace_rejects_off_ring_input() {
        body_palace_position(0);
    }

    #[test]
    fn body_palace_single_wrap() {
        assert_eq!(body_palace_position(1), 7);
        assert_eq!(body_palace_position(6), 12);
        assert_eq!(body_palace_position(7), 1);
        assert_eq!(body_palace_position(12), 6);
    }

    #[test]
    fn chart_has_twelve_ordered_palaces() {
        let chart = compute_chart(&sample());
        assert_eq!(chart.palaces.len(), 12);
        for (i, p) in chart.palaces.iter().enumerate() {
            assert_eq!(p.position as usize, i + 1);
            assert_eq!(p.name, ALL_PALACES[i]);
        }
    }

    #[test]
    fn chart_fields() {
        let chart = compute_chart(&sample());
        assert_eq!(chart.main_star, StarName::ZiWei);
        assert_eq!(chart.body_palace, 6);
        assert_eq!(chart.birth_year, Some(1991));
        assert_eq!(chart.stars().count(), 18);
    }

    #[test]
    fn stars_land_in_matching_palace() {
        let chart = compute_chart(&sample());
        for palace in &chart.palaces {
            for star in &palace.stars {
                assert_eq!(star.position, palace.position);
            }
        }
    }

    #[test]
    fn life_palace_contents_sorted() {
        let chart = compute_chart(&sample());
        let life = chart.life_palace().unwrap();
        let names = life.star_names();
        assert_eq!(names, vec![StarName::TaiYin, StarName::DiKong, StarName::HuoXing]);
        let strengths: Vec<u8> = life.stars.iter().map(|s| s.strength).collect();
        assert_eq!(strengths, vec![90, 55, 40]);
    }

    #[test]
    fn transformed_star_strength() {
        let chart = compute_chart(&sample());
        let spouse = chart.palace(3).unwrap();
        let taiyang = spouse.stars.iter().find(|s| s.name == StarName::TaiYang).unwrap();
        assert_eq!(taiyang.aspects, vec![Transformation::Quan]);
        assert_eq!(taiyang.strength, 100);
        let jumen = spouse.stars.iter().find(|s| s.name == StarName::JuMen).unwrap();
        assert_eq!(jumen.aspects, vec![Transformation::Lu]);
        assert_eq!(jumen.strength, 85);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut stars = vec![
            Star::new(StarName::ZuoFu, 1),
            Star::new(StarName::YouBi, 1),
            Star::new(StarName::ZiWei, 1),
            Star::new(StarName::WenQu, 1),
        ];
        stars[0].strength = 70;
        stars[1].strength = 70;
        stars[2].strength = 90;
        stars[3].strength = 70;
        sort_by_strength(&mut stars);
        let order: Vec<StarName> = stars.iter().map(|s| s.name).collect();
        assert_eq!(
            order,
            vec![StarName::ZiWei, StarName::ZuoFu, StarName::YouBi, StarName::WenQu]
        );
    }

    #[test]
    fn find_star_and_missing_palace() {
        let chart = compute_chart(&sample());
        assert_eq!(chart.find_star(StarName::ZiWei).unwrap().position, 6);
        assert!(chart.palace(0).is_none());
        assert!(chart.palace(13).is_none());
        assert_eq!(chart.body_palace().unwrap().position, 6);
    }
}
