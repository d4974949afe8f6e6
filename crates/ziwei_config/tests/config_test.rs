//! File-based configuration loading.

use std::path::PathBuf;

use ziwei_base::Gender;
use ziwei_config::{ConfigError, DEFAULT_CONFIG_FILE, OutputFormat, ZiweiConfig};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ziwei_config_{name}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn load_full_file() {
    let dir = scratch_dir("full");
    let path = dir.join("full.toml");
    std::fs::write(
        &path,
        r#"
[birth]
longitude = 116.4
latitude = 39.9
gender = "female"

[output]
format = "json"

[logging]
filter = "ziwei_base=debug"
"#,
    )
    .unwrap();

    let c = ZiweiConfig::load(&path).unwrap();
    assert!((c.birth.longitude - 116.4).abs() < 1e-9);
    assert!((c.birth.latitude - 39.9).abs() < 1e-9);
    assert_eq!(c.birth.gender, Gender::Female);
    assert_eq!(c.output.format, OutputFormat::Json);
    assert_eq!(c.logging.filter, "ziwei_base=debug");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn discover_picks_up_working_directory_file() {
    let dir = scratch_dir("discover");
    std::fs::write(dir.join(DEFAULT_CONFIG_FILE), "[output]\nformat = \"json\"\n").unwrap();

    let c = ZiweiConfig::discover(None, &dir).unwrap();
    assert_eq!(c.output.format, OutputFormat::Json);
    assert_eq!(c.birth.gender, Gender::Male);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn explicit_path_wins_over_working_directory() {
    let dir = scratch_dir("explicit");
    std::fs::write(dir.join(DEFAULT_CONFIG_FILE), "[output]\nformat = \"json\"\n").unwrap();
    let other = dir.join("other.toml");
    std::fs::write(&other, "[output]\nformat = \"text\"\n").unwrap();

    let c = ZiweiConfig::discover(Some(&other), &dir).unwrap();
    assert_eq!(c.output.format, OutputFormat::Text);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn invalid_file_reports_location_error() {
    let dir = scratch_dir("invalid");
    let path = dir.join("bad.toml");
    std::fs::write(&path, "[birth]\nlatitude = -91.0\n").unwrap();

    let err = ZiweiConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().starts_with("invalid config:"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = ZiweiConfig::from_toml_str("[birth\nlatitude = 1").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
