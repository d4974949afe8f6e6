//! Yearly fortune (流年运势) from the major-cycle and annual palaces.
//!
//! The major-cycle (大限) palace is selected by decade of age,
//! `floor(age / 10) mod 12`. The annual (流年) palace is selected by the
//! absolute calendar year, `year mod 12`, not by age. Both are 0-based
//! indices into the chart's palace list. Favorable and unfavorable stars
//! in each palace add their deltas; neutral stars contribute nothing.

use serde::Serialize;
use ziwei_base::{Chart, Palace};

use crate::error::AnalysisError;
use crate::nature::{StarNature, star_nature};

/// Years per major cycle.
pub const DECADE_LENGTH: i64 = 10;

/// Separator between description fragments.
pub const FRAGMENT_SEPARATOR: &str = "，";

/// Deltas and description templates for one palace layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerRule {
    pub favorable_delta: i32,
    pub unfavorable_delta: i32,
    prefix: &'static str,
    favorable_suffix: &'static str,
    unfavorable_suffix: &'static str,
}

impl LayerRule {
    fn fragment(&self, star: &str, nature: StarNature) -> Option<(i32, String)> {
        let (delta, suffix) = match nature {
            StarNature::Favorable => (self.favorable_delta, self.favorable_suffix),
            StarNature::Unfavorable => (self.unfavorable_delta, self.unfavorable_suffix),
            StarNature::Neutral => return None,
        };
        Some((delta, format!("{}{star}{suffix}", self.prefix)))
    }
}

/// 大限
pub const MAJOR_CYCLE_RULE: LayerRule = LayerRule {
    favorable_delta: 10,
    unfavorable_delta: -10,
    prefix: "大限宫位有",
    favorable_suffix: "吉星照会",
    unfavorable_suffix: "凶星冲克",
};

/// 流年
pub const ANNUAL_RULE: LayerRule = LayerRule {
    favorable_delta: 5,
    unfavorable_delta: -5,
    prefix: "流年遇",
    favorable_suffix: "吉星",
    unfavorable_suffix: "凶星",
};

/// Fortune for one target year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyFortune {
    pub year: i32,
    pub score: i32,
    pub description: String,
    /// 0-based palace index of the major cycle.
    pub major_cycle_index: usize,
    /// 0-based palace index of the annual palace.
    pub annual_index: usize,
}

/// Palace index of the major cycle for `age`.
pub fn major_cycle_index(age: i64) -> usize {
    age.div_euclid(DECADE_LENGTH).rem_euclid(12) as usize
}

/// Palace index of the annual palace for `year`.
pub fn annual_index(year: i32) -> usize {
    year.rem_euclid(12) as usize
}

fn score_layer(palace: Option<&Palace>, rule: &LayerRule, score: &mut i32, out: &mut Vec<String>) {
    let Some(palace) = palace else { return };
    for star in &palace.stars {
        if let Some((delta, text)) = rule.fragment(star.name.name(), star_nature(star.name)) {
            *score += delta;
            out.push(text);
        }
    }
}

/// Fortune for `year`. Fails when the chart carries no birth year.
pub fn calculate_yearly_fortune(chart: &Chart, year: i32) -> Result<YearlyFortune, AnalysisError> {
    let birth_year = chart.birth_year.ok_or(AnalysisError::MissingBirthYear)?;
    let age = i64::from(year) - i64::from(birth_year);
    let major = major_cycle_index(age);
    let annual = annual_index(year);

    let mut score = 0;
    let mut fragments = Vec::new();
    score_layer(chart.palaces.get(major), &MAJOR_CYCLE_RULE, &mut score, &mut fragments);
    score_layer(chart.palaces.get(annual), &ANNUAL_RULE, &mut score, &mut fragments);

    tracing::debug!(year, age, major, annual, score, "computed yearly fortune");

    Ok(YearlyFortune {
        year,
        score,
        description: fragments.join(FRAGMENT_SEPARATOR),
        major_cycle_index: major,
        annual_index: annual,
    })
}
