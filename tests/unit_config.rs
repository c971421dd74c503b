// tests/unit_config.rs
use std::fs;
use arbor_core::config::{Config, OutputFormat};
use arbor_core::error::ArborError;

#[test]
fn test_defaults() {
    let c = Config::default();
    assert!(!c.algorithm.path_compression);
    assert!(!c.algorithm.verify);
    assert_eq!(c.output.format, OutputFormat::Text);
    assert!(c.output.show_total);
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(Config::parse_toml("").unwrap(), Config::default());
}

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("arbor.toml");
    fs::write(&path, "[algorithm]\npath_compression = true\n\n[output]\nformat = \"json\"\nshow_total = false\n").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert!(c.algorithm.path_compression);
    assert!(!c.algorithm.verify);
    assert_eq!(c.output.format, OutputFormat::Json);
    assert!(!c.output.show_total);
}

#[test]
fn test_partial_section_keeps_defaults() {
    let c = Config::parse_toml("[output]\nformat = \"json\"").unwrap();
    assert!(c.output.show_total);
}

#[test]
fn test_bad_format_is_config_error() {
    let err = Config::parse_toml("[output]\nformat = \"yaml\"").unwrap_err();
    assert!(matches!(err, ArborError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::load_from(&d.path().join("arbor.toml")).unwrap_err();
    assert!(matches!(err, ArborError::Io { .. }));
}
