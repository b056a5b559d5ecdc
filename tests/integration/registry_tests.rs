use std::fs;
use std::io;
use std::path::Path;

use suffix_sweep::app::{execute, Confirm, Confirmation};
use suffix_sweep::cli::{Commands, DetectArgs, ReportFormat, SuffixCommand};
use suffix_sweep::config::Config;
use suffix_sweep::error::{kind_of, ErrorKind};
use suffix_sweep::suffixes::{
    AddOutcome, RegistryError, SuffixRegistry, SuffixSet, SuffixStore, DEFAULT_SUFFIXES,
};
use tempfile::TempDir;

const LATIN1_STORE: &[u8] = b"-c\xf3pia.xml\n-110110.xml\n-210210.xml\n";

struct NeverAsked;

impl Confirm for NeverAsked {
    fn confirm(&mut self, _prompt: &str) -> io::Result<Confirmation> {
        Ok(Confirmation::No)
    }
}

fn store_in(dir: &TempDir) -> SuffixStore {
    SuffixStore::new(dir.path().join("duplicate_suffixes.txt"))
}

fn config_for(store: &Path) -> Config {
    Config {
        store_path: store.to_path_buf(),
        ..Config::default()
    }
}

fn run(command: Commands, config: &Config) -> anyhow::Result<Vec<u8>> {
    let mut out = Vec::new();
    execute(command, config, true, &mut out, &mut NeverAsked)?;
    Ok(out)
}

#[test]
fn test_first_run_creates_store_with_defaults() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let set = store.load();

    assert_eq!(set.as_slice(), DEFAULT_SUFFIXES);
    let on_disk = fs::read_to_string(store.path()).unwrap();
    assert_eq!(on_disk.lines().collect::<Vec<_>>(), DEFAULT_SUFFIXES);
}

#[test]
fn test_existing_empty_store_is_not_seeded() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "").unwrap();

    let set = store.load();

    assert!(set.is_empty());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
}

#[test]
fn test_load_skips_blank_lines_and_trims() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "  -1.xml  \n\n\t\n-2.xml\r\n-1.xml\n").unwrap();

    let set = store.load();

    assert_eq!(set.as_slice(), ["-1.xml", "-2.xml"]);
}

#[test]
fn test_save_then_load_preserves_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let set = SuffixSet::from_lines(["-z.xml", "-a.xml", "-m.xml"]);

    store.save(&set).unwrap();

    assert_eq!(store.load(), set);
}

#[test]
fn test_add_normalizes_and_persists() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("duplicate_suffixes.txt"), "").unwrap();
    let mut registry = SuffixRegistry::open(store_in(&dir), ".xml");

    let outcome = registry.add("  -110110  ").unwrap();
    assert_eq!(outcome, AddOutcome::Added("-110110.xml".to_string()));

    let reopened = SuffixRegistry::open(store_in(&dir), ".xml");
    assert_eq!(reopened.suffixes().as_slice(), ["-110110.xml"]);
}

#[test]
fn test_add_duplicate_is_a_notice() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("duplicate_suffixes.txt"), "-110110.xml\n").unwrap();
    let mut registry = SuffixRegistry::open(store_in(&dir), ".xml");

    let outcome = registry.add("-110110").unwrap();

    assert!(!outcome.is_added());
    assert_eq!(outcome.suffix(), "-110110.xml");
    assert_eq!(registry.suffixes().len(), 1);
}

#[test]
fn test_add_rejects_blank() {
    let dir = TempDir::new().unwrap();
    let mut registry = SuffixRegistry::open(store_in(&dir), ".xml");
    let before = registry.suffixes().clone();

    let err = registry.add("   ").unwrap_err();

    assert!(matches!(err, RegistryError::EmptySuffix));
    assert_eq!(err.kind(), ErrorKind::InvalidSuffix);
    assert_eq!(registry.suffixes(), &before);
}

#[test]
fn test_remove_is_reflected_after_reload() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("duplicate_suffixes.txt"), "-1.xml\n-2.xml\n-3.xml\n").unwrap();
    let mut registry = SuffixRegistry::open(store_in(&dir), ".xml");

    assert_eq!(registry.remove(1).unwrap(), "-2.xml");

    let reloaded = store_in(&dir).load();
    assert_eq!(reloaded.as_slice(), ["-1.xml", "-3.xml"]);
}

#[test]
fn test_remove_out_of_range_leaves_list_unchanged() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("duplicate_suffixes.txt"), "-1.xml\n").unwrap();
    let mut registry = SuffixRegistry::open(store_in(&dir), ".xml");

    let err = registry.remove(1).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(registry.suffixes().as_slice(), ["-1.xml"]);
    assert_eq!(
        fs::read_to_string(dir.path().join("duplicate_suffixes.txt")).unwrap(),
        "-1.xml\n"
    );
}

#[test]
fn test_write_failure_keeps_in_memory_change() {
    let dir = TempDir::new().unwrap();
    let store = SuffixStore::new(dir.path().join("missing").join("suffixes.txt"));
    let mut registry = SuffixRegistry::from_parts(store, SuffixSet::new(), ".xml");

    let err = registry.add("-9").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::StoreWriteFailure);
    assert!(registry.suffixes().contains("-9.xml"));
}

#[test]
fn test_unreadable_store_yields_empty_list() {
    let dir = TempDir::new().unwrap();
    // A directory where the store file should be cannot be read as text
    let path = dir.path().join("duplicate_suffixes.txt");
    fs::create_dir(&path).unwrap();
    let store = SuffixStore::new(&path);

    assert!(store.load().is_empty());
    let err = store.try_load().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StoreReadFailure);
}

#[test]
fn test_add_command_leaves_undecodable_store_untouched() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("duplicate_suffixes.txt");
    fs::write(&store, LATIN1_STORE).unwrap();

    let command = Commands::Suffixes(SuffixCommand::Add {
        suffix: "-999".to_string(),
    });
    let err = run(command, &config_for(&store)).unwrap_err();

    assert_eq!(kind_of(&err), Some(ErrorKind::StoreReadFailure));
    assert_eq!(fs::read(&store).unwrap(), LATIN1_STORE);
}

#[test]
fn test_remove_command_leaves_undecodable_store_untouched() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("duplicate_suffixes.txt");
    fs::write(&store, LATIN1_STORE).unwrap();

    let command = Commands::Suffixes(SuffixCommand::Remove { position: 1 });
    let err = run(command, &config_for(&store)).unwrap_err();

    assert_eq!(kind_of(&err), Some(ErrorKind::StoreReadFailure));
    assert_eq!(fs::read(&store).unwrap(), LATIN1_STORE);
}

#[test]
fn test_detect_accept_leaves_undecodable_store_untouched() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("duplicate_suffixes.txt");
    fs::write(&store, LATIN1_STORE).unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    for name in ["INV-210210.xml", "INV-210999.xml"] {
        fs::write(data.join(name), b"<x/>").unwrap();
    }

    let command = Commands::Detect(DetectArgs {
        path: data,
        output: ReportFormat::Text,
        accept: Vec::new(),
        accept_all: true,
    });
    let err = run(command, &config_for(&store)).unwrap_err();

    assert_eq!(kind_of(&err), Some(ErrorKind::StoreReadFailure));
    assert_eq!(fs::read(&store).unwrap(), LATIN1_STORE);
}

#[test]
fn test_list_command_reads_undecodable_store_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("duplicate_suffixes.txt");
    fs::write(&store, LATIN1_STORE).unwrap();

    let out = run(Commands::Suffixes(SuffixCommand::List), &config_for(&store)).unwrap();

    assert!(String::from_utf8(out).unwrap().contains("No suffixes registered"));
    assert_eq!(fs::read(&store).unwrap(), LATIN1_STORE);
}

#[test]
fn test_add_command_reports_duplicate_notice() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("duplicate_suffixes.txt");
    fs::write(&store, "-110110.xml\n").unwrap();

    let command = Commands::Suffixes(SuffixCommand::Add {
        suffix: "-110110".to_string(),
    });
    let out = String::from_utf8(run(command, &config_for(&store)).unwrap()).unwrap();

    assert_eq!(
        out.trim_end(),
        format!("{}: -110110.xml", ErrorKind::DuplicateSuffix.category())
    );
    assert_eq!(fs::read_to_string(&store).unwrap(), "-110110.xml\n");
}
