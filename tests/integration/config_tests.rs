use std::fs;
use std::path::PathBuf;

use suffix_sweep::config::{unknown_key_warnings, Config, ConfigError};
use tempfile::TempDir;

#[test]
fn test_load_from_path_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
store_path = "/var/lib/sweep/suffixes.txt"
extension = ".json"
include_hidden = true
default_suffixes = ["-1.json"]
"#,
    )
    .unwrap();

    let config = Config::load_from_path(&path).unwrap();

    assert_eq!(config.store_path, PathBuf::from("/var/lib/sweep/suffixes.txt"));
    assert_eq!(config.extension, ".json");
    assert!(config.include_hidden);
    assert_eq!(config.default_suffixes, vec!["-1.json"]);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "include_hidden = true\n").unwrap();

    let config = Config::load_from_path(&path).unwrap();

    assert!(config.include_hidden);
    assert_eq!(config.extension, ".xml");
    assert_eq!(config.default_suffixes.len(), 6);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from_path(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.extension, ".xml");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn test_wrong_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "default_suffixes = 5\n").unwrap();

    let result = Config::load_from_path(&path);

    assert!(matches!(result, Err(ConfigError::Figment(_))));
}

#[test]
fn test_unknown_keys_get_suggestions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "default_sufixes = []\ncolour = \"red\"\n").unwrap();

    let warnings = unknown_key_warnings(&path);

    assert_eq!(warnings.len(), 2);
    assert!(warnings
        .iter()
        .any(|w| w.contains("did you mean 'default_suffixes'")));
    assert!(warnings.iter().any(|w| w == "Unknown config key 'colour'"));
}

#[test]
fn test_configured_store_seeds_configured_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        store_path: dir.path().join("suffixes.txt"),
        default_suffixes: vec!["-7.xml".to_string()],
        ..Config::default()
    };

    let set = config.store().load();

    assert_eq!(set.as_slice(), ["-7.xml"]);
    assert_eq!(
        fs::read_to_string(dir.path().join("suffixes.txt")).unwrap(),
        "-7.xml\n"
    );
}
