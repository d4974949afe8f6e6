//! Rule-based readings of a computed Zi Wei Dou Shu chart.
//!
//! This crate provides:
//! - Formation (格局) detection from star co-location, opposite palaces
//!   and shared transformation tags
//! - Star readings chosen by computed strength
//! - Per-palace scores and interpretations
//! - Yearly fortune from the major-cycle and annual palaces
//! - A chart summary and a bundled report of all of the above
//!
//! All analyses read a [`ziwei_base::Chart`] and never modify it.

pub mod error;
pub mod fortune;
pub mod nature;
pub mod palace;
pub mod pattern;
pub mod reading;
pub mod report;

pub use error::AnalysisError;
pub use fortune::{
    ANNUAL_RULE, DECADE_LENGTH, MAJOR_CYCLE_RULE, YearlyFortune, annual_index,
    calculate_yearly_fortune, major_cycle_index,
};
pub use nature::{FAVORABLE_STARS, StarNature, UNFAVORABLE_STARS, star_nature};
pub use palace::{PALACE_MEANINGS, PalaceAnalysis, PalaceMeaning, analyze_palace, palace_meaning};
pub use pattern::{
    BAD_PATTERNS, GOOD_PATTERNS, Pattern, PatternClass, PatternResult, PatternRule,
    detect_patterns, find_pattern, total_score,
};
pub use reading::{
    FAVORABLE_THRESHOLD, ReadingEntry, StarReading, generate_star_readings, read_star,
    reading_entry,
};
pub use report::{ChartReport, ChartSummary, PalaceSummary, chart_report, chart_summary};
