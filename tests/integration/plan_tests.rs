use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use suffix_sweep::app::{execute, Confirm, Confirmation};
use suffix_sweep::cli::{AnalyzeArgs, Commands, DeleteArgs, OutputFormat, ReportFormat};
use suffix_sweep::config::Config;
use suffix_sweep::error::ExitCode;
use suffix_sweep::plan::DeletionPlan;
use tempfile::TempDir;

struct AlwaysYes;

impl Confirm for AlwaysYes {
    fn confirm(&mut self, _prompt: &str) -> io::Result<Confirmation> {
        Ok(Confirmation::Yes)
    }
}

fn setup(dir: &TempDir, names: &[&str]) -> (Config, PathBuf) {
    let store = dir.path().join("suffixes.txt");
    fs::write(&store, "-110110.xml\n").unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    for name in names {
        fs::write(data.join(name), b"<x/>").unwrap();
    }
    let config = Config {
        store_path: store,
        ..Config::default()
    };
    (config, data)
}

fn save_plan(config: &Config, data: &Path, plan: &Path) -> ExitCode {
    let args = AnalyzeArgs {
        path: data.to_path_buf(),
        output: OutputFormat::Json,
        save_plan: Some(plan.to_path_buf()),
    };
    execute(Commands::Analyze(args), config, true, &mut Vec::new(), &mut AlwaysYes).unwrap()
}

fn delete_plan(config: &Config, plan: &Path) -> ExitCode {
    let args = DeleteArgs {
        path: None,
        plan: Some(plan.to_path_buf()),
        yes: false,
        output: ReportFormat::Json,
    };
    execute(Commands::Delete(args), config, true, &mut Vec::new(), &mut AlwaysYes).unwrap()
}

#[test]
fn test_plan_captures_to_delete_list() {
    let dir = TempDir::new().unwrap();
    let (config, data) = setup(&dir, &["A-110110.xml", "A.xml"]);
    let plan_path = dir.path().join("plan.json");

    assert_eq!(save_plan(&config, &data, &plan_path), ExitCode::Success);

    let plan = DeletionPlan::load(&plan_path).unwrap();
    assert_eq!(plan.files, vec![data.join("A-110110.xml")]);
    assert_eq!(plan.suffixes, vec!["-110110.xml"]);
    assert_eq!(plan.extension, ".xml");
}

#[test]
fn test_plan_deletes_exactly_the_saved_list() {
    let dir = TempDir::new().unwrap();
    let (config, data) = setup(&dir, &["A-110110.xml", "A.xml"]);
    let plan_path = dir.path().join("plan.json");
    save_plan(&config, &data, &plan_path);

    // Appears after the analysis, so it is not in the plan
    fs::write(data.join("B-110110.xml"), b"<x/>").unwrap();

    assert_eq!(delete_plan(&config, &plan_path), ExitCode::Success);
    assert!(!data.join("A-110110.xml").exists());
    assert!(data.join("B-110110.xml").exists());
    assert!(data.join("A.xml").exists());
}

#[test]
fn test_plan_with_vanished_file_is_partial_success() {
    let dir = TempDir::new().unwrap();
    let (config, data) = setup(&dir, &["A-110110.xml", "C-110110.xml"]);
    let plan_path = dir.path().join("plan.json");
    save_plan(&config, &data, &plan_path);

    fs::remove_file(data.join("A-110110.xml")).unwrap();

    assert_eq!(delete_plan(&config, &plan_path), ExitCode::PartialSuccess);
    assert!(!data.join("C-110110.xml").exists());
}

#[test]
fn test_tampered_plan_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (config, data) = setup(&dir, &["A-110110.xml", "A.xml"]);
    let plan_path = dir.path().join("plan.json");
    save_plan(&config, &data, &plan_path);

    let content = fs::read_to_string(&plan_path)
        .unwrap()
        .replace("A-110110.xml", "A.xml");
    fs::write(&plan_path, content).unwrap();

    let args = DeleteArgs {
        path: None,
        plan: Some(plan_path),
        yes: true,
        output: ReportFormat::Text,
    };
    let result = execute(Commands::Delete(args), &config, true, &mut Vec::new(), &mut AlwaysYes);

    assert!(result.is_err());
    assert!(data.join("A.xml").exists());
    assert!(data.join("A-110110.xml").exists());
}

#[test]
fn test_empty_plan_is_nothing_matched() {
    let dir = TempDir::new().unwrap();
    let (config, data) = setup(&dir, &["A.xml"]);
    let plan_path = dir.path().join("plan.json");

    assert_eq!(save_plan(&config, &data, &plan_path), ExitCode::NothingMatched);
    assert_eq!(delete_plan(&config, &plan_path), ExitCode::NothingMatched);
}
