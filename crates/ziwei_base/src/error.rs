//! Error types for chart vocabulary parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the chart calculator's public vocabulary.
///
/// Chart computation itself has no failure path; these only arise when
/// turning user text into typed names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ZiweiError {
    /// Text did not match any name of the given kind.
    UnknownName { kind: &'static str, value: String },
}

impl Display for ZiweiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownName { kind, value } => write!(f, "unknown {kind} name: {value:?}"),
        }
    }
}

impl Error for ZiweiError {}
