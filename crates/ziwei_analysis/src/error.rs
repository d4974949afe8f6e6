//! Error types for chart analysis.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Yearly fortune requested on a chart without a birth year.
    MissingBirthYear,
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBirthYear => write!(f, "birth year is not available in the chart data"),
        }
    }
}

impl Error for AnalysisError {}
