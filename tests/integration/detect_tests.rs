use std::fs::{self, File};
use std::path::Path;

use suffix_sweep::resolver::{detect_suffixes, ResolveError, ResolverOptions};
use suffix_sweep::suffixes::{SuffixRegistry, SuffixStore};
use tempfile::TempDir;

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        File::create(dir.join(name)).unwrap();
    }
}

#[test]
fn test_detect_proposes_suffixes_of_repeated_bases() {
    let dir = TempDir::new().unwrap();
    touch(
        dir.path(),
        &["INV-210210.xml", "INV-210999.xml", "STANDALONE-555.xml"],
    );

    let report = detect_suffixes(dir.path(), &ResolverOptions::default()).unwrap();

    let candidates: Vec<&str> = report.candidates.iter().map(String::as_str).collect();
    assert_eq!(candidates, vec!["-210210.xml", "-210999.xml"]);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].base, "INV");
    assert_eq!(report.groups[0].file_names.len(), 2);
}

#[test]
fn test_detect_single_file_yields_nothing() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), &["INV-210210.xml"]);

    let report = detect_suffixes(dir.path(), &ResolverOptions::default()).unwrap();

    assert!(report.is_empty());
    assert!(report.groups.is_empty());
    assert_eq!(report.matched, 1);
}

#[test]
fn test_detect_ignores_plain_and_foreign_names() {
    let dir = TempDir::new().unwrap();
    touch(
        dir.path(),
        &["INV.xml", "INV-1.txt", "INV-2.txt", "INV-a.xml", "INV-b.xml"],
    );

    let report = detect_suffixes(dir.path(), &ResolverOptions::default()).unwrap();

    assert!(report.is_empty());
    assert_eq!(report.scanned, 3);
}

#[test]
fn test_detect_does_not_modify_folder_or_registry() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    touch(&data, &["A-1.xml", "A-2.xml"]);
    let store_path = dir.path().join("suffixes.txt");
    fs::write(&store_path, "").unwrap();

    detect_suffixes(&data, &ResolverOptions::default()).unwrap();

    assert_eq!(fs::read_dir(&data).unwrap().count(), 2);
    assert_eq!(fs::read_to_string(&store_path).unwrap(), "");
}

#[test]
fn test_accepting_candidates_adds_each_once() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    touch(&data, &["INV-210210.xml", "INV-210999.xml"]);
    let store_path = dir.path().join("suffixes.txt");
    fs::write(&store_path, "-210210.xml\n").unwrap();

    let report = detect_suffixes(&data, &ResolverOptions::default()).unwrap();
    let mut registry = SuffixRegistry::open(SuffixStore::new(&store_path), ".xml");
    let summary = registry.add_all(&report.candidates).unwrap();

    assert_eq!(summary.added, vec!["-210999.xml"]);
    assert_eq!(summary.skipped, vec!["-210210.xml"]);
    assert_eq!(
        fs::read_to_string(&store_path).unwrap(),
        "-210210.xml\n-210999.xml\n"
    );
}

#[test]
fn test_detect_invalid_folder() {
    let result = detect_suffixes(
        Path::new("/non/existent/path/12345"),
        &ResolverOptions::default(),
    );
    assert!(matches!(result, Err(ResolveError::NotFound(_))));
}
