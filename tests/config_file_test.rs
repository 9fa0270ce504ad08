//! Tests for loading game configuration from disk.

use british_square::{Dimensions, GameConfig};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rows = 3\ncols = 5\nprompt = \"move> \"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.dimensions().unwrap(), Dimensions::new(3, 5).unwrap());
    assert_eq!(config.prompt(), "move> ");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rows = \"four\"").unwrap();

    let err = GameConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
