//! Zi Wei Dou Shu chart calculation.
//!
//! This crate provides:
//! - Cyclic arithmetic on the twelve-palace ring
//! - Earthly-branch and heavenly-stem cycles
//! - Placement of the 紫微 and 天府 star systems
//! - Year-stem transformations (四化) and star strength scoring
//! - Assembly of a complete [`Chart`] from [`BirthData`]
//!
//! Every calculation is a pure function of its inputs and compiled-in
//! tables, so charts for independent inputs can be computed in parallel
//! without coordination.

pub mod birth;
pub mod branch;
pub mod chart;
pub mod error;
pub mod palace;
pub mod placement;
pub mod ring;
pub mod star;
pub mod stem;
pub mod strength;
pub mod transformation;

pub use birth::{BirthData, Gender};
pub use branch::{ALL_BRANCHES, EarthlyBranch, branch_for_hour, hour_branch};
pub use chart::{
    Chart, ChartId, body_palace_position, compute_chart, life_palace_position, sort_by_strength,
};
pub use error::ZiweiError;
pub use palace::{ALL_PALACES, Palace, PalaceName};
pub use placement::{
    StarSystem, TIANFU_SYSTEM, ZIWEI_SYSTEM, place_stars, tianfu_anchor, ziwei_anchor,
};
pub use ring::{normalize_position, offset_position, opposite_position};
pub use star::{
    ALL_STARS, ALL_TRANSFORMATIONS, Star, StarCategory, StarName, Transformation,
};
pub use stem::{ALL_STEMS, HeavenlyStem, year_stem};
pub use strength::{
    DEFAULT_BASE_STRENGTH, Dignity, base_strength, dignity_at, dignity_table,
};
pub use transformation::{apply_transformations, stem_transformations};
