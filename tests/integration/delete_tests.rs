use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use suffix_sweep::actions::{delete_batch, BatchDeleteResult, DeleteProgressCallback, NoProgress};
use suffix_sweep::resolver::{analyze, ResolverOptions};
use suffix_sweep::suffixes::SuffixSet;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[derive(Default)]
struct Counter {
    before: AtomicUsize,
    success: AtomicUsize,
    failure: AtomicUsize,
    complete: AtomicUsize,
}

impl DeleteProgressCallback for Counter {
    fn on_before_delete(&self, _path: &Path, _index: usize, _total: usize) {
        self.before.fetch_add(1, Ordering::SeqCst);
    }
    fn on_delete_success(&self, _path: &Path, _size: u64) {
        self.success.fetch_add(1, Ordering::SeqCst);
    }
    fn on_delete_failure(&self, _path: &Path, _error: &str) {
        self.failure.fetch_add(1, Ordering::SeqCst);
    }
    fn on_complete(&self, _result: &BatchDeleteResult) {
        self.complete.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_analyze_then_delete_removes_marked_files_only() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A-110110.xml", b"<a/>");
    write(dir.path(), "A.xml", b"<a/>");
    write(dir.path(), "B-999.xml", b"<b/>");
    let suffixes = SuffixSet::from_lines(["-110110.xml"]);

    let report = analyze(dir.path(), &suffixes, &ResolverOptions::default()).unwrap();
    let result = delete_batch::<NoProgress>(&report.to_delete_paths(), None);

    assert_eq!(result.success_count(), 1);
    assert!(result.all_succeeded());
    assert_eq!(result.bytes_freed, 4);
    assert!(!dir.path().join("A-110110.xml").exists());
    assert!(dir.path().join("A.xml").exists());
    assert!(dir.path().join("B-999.xml").exists());
}

#[test]
fn test_vanished_file_is_reported_and_batch_continues() {
    let dir = TempDir::new().unwrap();
    let first = write(dir.path(), "A-110110.xml", b"one");
    let gone = write(dir.path(), "B-110110.xml", b"two");
    let last = write(dir.path(), "C-110110.xml", b"three");
    let paths = vec![first.clone(), gone.clone(), last.clone()];

    fs::remove_file(&gone).unwrap();
    let counter = Counter::default();
    let result = delete_batch(&paths, Some(&counter));

    assert_eq!(result.success_count(), 2);
    assert_eq!(result.failure_count(), 1);
    assert_eq!(result.failures[0].path, gone);
    assert_eq!(result.failures[0].reason, "file not found");
    assert!(!first.exists());
    assert!(!last.exists());

    assert_eq!(counter.before.load(Ordering::SeqCst), 3);
    assert_eq!(counter.success.load(Ordering::SeqCst), 2);
    assert_eq!(counter.failure.load(Ordering::SeqCst), 1);
    assert_eq!(counter.complete.load(Ordering::SeqCst), 1);
}

#[test]
fn test_delete_does_not_recheck_suffixes() {
    let dir = TempDir::new().unwrap();
    let plain = write(dir.path(), "plain.xml", b"x");

    let result = delete_batch::<NoProgress>(&[plain.clone()], None);

    assert!(result.all_succeeded());
    assert!(!plain.exists());
}

#[test]
fn test_delete_empty_list() {
    let result = delete_batch::<NoProgress>(&[], None);
    assert_eq!(result.total_count(), 0);
    assert!(result.all_succeeded());
}

#[cfg(unix)]
#[test]
fn test_delete_symlink_keeps_target() {
    let dir = TempDir::new().unwrap();
    let target = write(dir.path(), "target.xml", b"keep me");
    let link = dir.path().join("target-110110.xml");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    let result = delete_batch::<NoProgress>(&[link.clone()], None);

    assert!(result.all_succeeded());
    assert!(fs::symlink_metadata(&link).is_err());
    assert_eq!(fs::read(&target).unwrap(), b"keep me");
}
