//! Configuration for the `ziwei` command-line tool.
//!
//! Every section and field is optional; missing values take the defaults
//! below.
//!
//! ```toml
//! [birth]
//! longitude = 110.85402
//! latitude = 21.919654
//! gender = "male"
//!
//! [output]
//! format = "text"
//!
//! [logging]
//! filter = "warn"
//! ```

pub mod error;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ziwei_base::Gender;

pub use error::ConfigError;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ziwei.toml";

/// Defaults applied to birth data the user does not supply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthDefaults {
    /// Degrees east.
    pub longitude: f64,
    /// Degrees north.
    pub latitude: f64,
    pub gender: Gender,
}

impl Default for BirthDefaults {
    fn default() -> Self {
        Self {
            longitude: 110.854020,
            latitude: 21.919654,
            gender: Gender::Male,
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiweiConfig {
    pub birth: BirthDefaults,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl ZiweiConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] in `dir` if it
    /// exists, else defaults. An explicit path that cannot be read is an error.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(&fallback)
        } else {
            tracing::debug!("no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject coordinates off the globe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-90.0..=90.0).contains(&self.birth.latitude) {
            return Err(ConfigError::Invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.birth.longitude) {
            return Err(ConfigError::Invalid("longitude must be within [-180, 180]"));
        }
        Ok(())
    }
}
