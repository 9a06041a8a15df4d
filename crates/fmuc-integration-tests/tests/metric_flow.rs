//! # Metric Flow
//!
//! Resolver, invoker, and writer wired together through `run_metric`,
//! checked against the verdicts OCEAN consumers rely on.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use fmuc_cli::run_metric;
use fmuc_core::record::{MSG_FMU_NOT_FOUND, MSG_NO_ERRORS, MSG_NO_FMU_PROVIDED, MSG_PATH_MISSING};
use fmuc_core::{find_fmu_files, MetricConfig, ResultRecord};
use fmuc_validate::{check_fmu_model_description, MockValidator};

// =========================================================================
// Helpers
// =========================================================================

struct Mounts {
    _root: tempfile::TempDir,
    config: MetricConfig,
}

impl Mounts {
    fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let input_dir = root.path().join("inputs");
        let output_dir = root.path().join("outputs");
        std::fs::create_dir_all(&input_dir).unwrap();
        std::fs::create_dir_all(&output_dir).unwrap();
        Self {
            _root: root,
            config: MetricConfig {
                input_dir,
                output_dir,
                ..MetricConfig::default()
            },
        }
    }

    fn add_input(&self, relative: &str) -> PathBuf {
        let path = self.config.input_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, b"PK\x03\x04").unwrap();
        path
    }

    fn written(&self) -> ResultRecord {
        let content = std::fs::read_to_string(self.config.result_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}

// =========================================================================
// Invoker verdicts
// =========================================================================

#[test]
fn invoker_verdicts_match_published_messages() {
    let dir = tempfile::tempdir().unwrap();
    let fmu = dir.path().join("Model.fmu");
    std::fs::write(&fmu, b"PK").unwrap();

    let clean = MockValidator::clean();
    let broken = MockValidator::with_problems(["missing unit", "duplicate name"]);

    let cases: Vec<(Option<&Path>, &MockValidator, ResultRecord)> = vec![
        (None, &clean, ResultRecord::failed(MSG_PATH_MISSING)),
        (
            Some(Path::new("/definitely/not/here.fmu")),
            &clean,
            ResultRecord::failed(MSG_FMU_NOT_FOUND),
        ),
        (Some(fmu.as_path()), &clean, ResultRecord::passed()),
        (
            Some(fmu.as_path()),
            &broken,
            ResultRecord::failed("missing unit // next error: duplicate name"),
        ),
    ];

    for (path, validator, expected) in cases {
        let record = check_fmu_model_description(validator, path).unwrap();
        assert_eq!(record, expected, "path: {path:?}");
    }
}

// =========================================================================
// End-to-end runs
// =========================================================================

#[test]
fn empty_input_writes_no_fmu_provided() {
    let mounts = Mounts::new();
    let report = run_metric(&mounts.config, &MockValidator::clean()).unwrap();

    assert_eq!(report.record, ResultRecord::failed(MSG_NO_FMU_PROVIDED));
    assert_eq!(mounts.written(), report.record);

    let raw = std::fs::read_to_string(mounts.config.result_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"result": false, "log": "No FMU file provided"})
    );
}

#[test]
fn non_fmu_inputs_are_treated_as_empty() {
    let mounts = Mounts::new();
    mounts.add_input("docs/readme.md");
    mounts.add_input("model.zip");
    let validator = MockValidator::clean();

    let report = run_metric(&mounts.config, &validator).unwrap();

    assert_eq!(validator.calls(), 0);
    assert_eq!(report.record.log, MSG_NO_FMU_PROVIDED);
}

#[test]
fn clean_fmu_passes_end_to_end() {
    let mounts = Mounts::new();
    let fmu = mounts.add_input("did-op-1234/0/BouncingBall.fmu");

    let report = run_metric(&mounts.config, &MockValidator::clean()).unwrap();

    assert_eq!(report.fmu.as_deref(), Some(fmu.as_path()));
    assert!(report.record.result);
    assert_eq!(mounts.written().log, MSG_NO_ERRORS);
}

#[test]
fn one_of_several_fmus_is_checked_exactly_once() {
    let mounts = Mounts::new();
    let a = mounts.add_input("a/First.fmu");
    let b = mounts.add_input("b/Second.fmu");
    let validator = MockValidator::with_problems(["duplicate name"]);

    let report = run_metric(&mounts.config, &validator).unwrap();

    assert_eq!(validator.calls(), 1);
    let chosen = report.fmu.unwrap();
    assert!(chosen == a || chosen == b, "unexpected choice {chosen:?}");
    assert_eq!(mounts.written(), ResultRecord::failed("duplicate name"));
}

#[test]
fn second_run_overwrites_first_verdict() {
    let mounts = Mounts::new();
    run_metric(&mounts.config, &MockValidator::clean()).unwrap();
    assert_eq!(mounts.written().log, MSG_NO_FMU_PROVIDED);

    mounts.add_input("Plant.fmu");
    run_metric(&mounts.config, &MockValidator::clean()).unwrap();
    assert_eq!(mounts.written(), ResultRecord::passed());
}

#[test]
fn resolver_results_all_carry_fmu_suffix() {
    let mounts = Mounts::new();
    mounts.add_input("x/y/z/Deep.fmu");
    mounts.add_input("x/notes.txt");
    mounts.add_input("Top.fmu");

    let files = find_fmu_files(&mounts.config.input_dir).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|p| p.to_string_lossy().ends_with(".fmu")));
}

// =========================================================================
// Round-trip of arbitrary validator findings
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn written_file_reproduces_record(problems in prop::collection::vec("\\PC{0,40}", 0..5)) {
        let mounts = Mounts::new();
        mounts.add_input("Model.fmu");
        let validator = MockValidator::with_problems(problems.clone());

        let report = run_metric(&mounts.config, &validator).unwrap();

        prop_assert_eq!(&report.record, &ResultRecord::from_problems(&problems));
        prop_assert_eq!(mounts.written(), report.record);
    }
}
