//! Birth data supplied by the caller.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ZiweiError;

/// Gender of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Chinese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ZiweiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            other => Err(ZiweiError::UnknownName {
                kind: "gender",
                value: other.to_string(),
            }),
        }
    }
}

/// Birth timestamp and location.
///
/// `day` is read as the lunar day-of-month when anchoring the 紫微 star.
/// Longitude and latitude are carried through for display only; no
/// calculation reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    /// Month 1-12.
    pub month: u8,
    /// Day 1-31.
    pub day: u8,
    /// Hour 0-23.
    pub hour: u8,
    /// Minute 0-59.
    #[serde(default)]
    pub minute: u8,
    /// Degrees east.
    #[serde(default)]
    pub longitude: f64,
    /// Degrees north.
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub gender: Gender,
}

impl BirthData {
    /// Birth data at minute 0 with a zero location.
    pub const fn new(year: i32, month: u8, day: u8, hour: u8, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute: 0,
            longitude: 0.0,
            latitude: 0.0,
            gender,
        }
    }

    /// Same birth data with a location attached.
    pub const fn with_location(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    /// Same birth data with the minute set.
    pub const fn with_minute(mut self, minute: u8) -> Self {
        self.minute = minute;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parse() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("女".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn builder_sets_fields() {
        let b = BirthData::new(1991, 7, 12, 12, Gender::Male)
            .with_minute(30)
            .with_location(110.85, 21.92);
        assert_eq!(b.minute, 30);
        assert!((b.longitude - 110.85).abs() < 1e-12);
        assert!((b.latitude - 21.92).abs() < 1e-12);
    }
}
