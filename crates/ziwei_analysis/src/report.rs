//! Chart summary and the bundled reading report.

use serde::Serialize;
use ziwei_base::{Chart, Palace, PalaceName, StarName};

use crate::error::AnalysisError;
use crate::fortune::{YearlyFortune, calculate_yearly_fortune};
use crate::palace::{PalaceAnalysis, analyze_palace};
use crate::pattern::{PatternResult, detect_patterns, total_score};
use crate::reading::{StarReading, generate_star_readings};

/// A palace named together with the stars it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalaceSummary {
    pub name: PalaceName,
    pub position: u8,
    pub stars: Vec<StarName>,
}

impl From<&Palace> for PalaceSummary {
    fn from(palace: &Palace) -> Self {
        Self {
            name: palace.name,
            position: palace.position,
            stars: palace.star_names(),
        }
    }
}

/// Life palace, body palace and main star location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSummary {
    pub life_palace: Option<PalaceSummary>,
    pub body_palace: Option<PalaceSummary>,
    pub main_star: StarName,
    /// Palace holding the main star, None if it is not placed.
    pub main_star_palace: Option<PalaceName>,
}

/// Everything derived from one chart for one target year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub chart: Chart,
    pub summary: ChartSummary,
    pub patterns: Vec<PatternResult>,
    pub pattern_score: i32,
    pub star_readings: Vec<StarReading>,
    pub palaces: Vec<PalaceAnalysis>,
    pub yearly_fortune: YearlyFortune,
}

/// Summarize the life palace, body palace and main star.
pub fn chart_summary(chart: &Chart) -> ChartSummary {
    ChartSummary {
        life_palace: chart.life_palace().map(PalaceSummary::from),
        body_palace: chart.body_palace().map(PalaceSummary::from),
        main_star: chart.main_star,
        main_star_palace: chart.find_star(chart.main_star).map(|p| p.name),
    }
}

/// Run every analysis on `chart` for `year`.
///
/// Fails only when the yearly fortune fails.
pub fn chart_report(chart: &Chart, year: i32) -> Result<ChartReport, AnalysisError> {
    let yearly_fortune = calculate_yearly_fortune(chart, year)?;
    let patterns = detect_patterns(chart);
    let pattern_score = total_score(&patterns);
    Ok(ChartReport {
        summary: chart_summary(chart),
        pattern_score,
        patterns,
        star_readings: generate_star_readings(chart),
        palaces: chart.palaces.iter().filter_map(analyze_palace).collect(),
        yearly_fortune,
        chart: chart.clone(),
    })
}
