use crate::conf::{AnalyzerConfig, ConfigError, ConfigOverrides, load_config, parse_config_file};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn defaults_without_a_file() {
    let cfg = load_config(None, ConfigOverrides::default()).unwrap();

    assert_eq!(cfg, AnalyzerConfig::default());
    assert_eq!(cfg.raw_dir, PathBuf::from("data/raw"));
    assert_eq!(cfg.log_glob, "application_*/*.log");
    assert_eq!(cfg.sample_size, 10);
    assert_eq!(cfg.century_base, 2000);
}

#[test]
fn file_values_override_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("sparklog.toml");
    fs::write(
        &path,
        r#"
raw_dir = "/srv/spark/raw"
sample_size = 25
century_base = 1900
"#,
    )
    .unwrap();

    // Act
    let cfg = parse_config_file(&path).unwrap();

    // Assert
    assert_eq!(cfg.raw_dir, PathBuf::from("/srv/spark/raw"));
    assert_eq!(cfg.sample_size, 25);
    assert_eq!(cfg.century_base, 1900);
    assert_eq!(cfg.output_dir, PathBuf::from("data/output"));
    assert_eq!(cfg.seed, 42);
}

#[test]
fn cli_overrides_win_over_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("sparklog.toml");
    fs::write(&path, "seed = 1\nsample_size = 3\n").unwrap();
    let overrides = ConfigOverrides {
        seed: Some(7),
        output_dir: Some(PathBuf::from("out")),
        ..Default::default()
    };

    // Act
    let cfg = load_config(Some(&path), overrides).unwrap();

    // Assert
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.sample_size, 3);
    assert_eq!(cfg.output_dir, PathBuf::from("out"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = load_config(Some(&path), ConfigOverrides::default()).unwrap_err();

    match err {
        ConfigError::ReadFile { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sparklog.toml");
    fs::write(&path, "sampel_size = 3\n").unwrap();

    let err = parse_config_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn zero_sample_size_is_rejected() {
    let overrides = ConfigOverrides {
        sample_size: Some(0),
        ..Default::default()
    };

    let err = load_config(None, overrides).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidSampleSize));
}
