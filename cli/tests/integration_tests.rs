use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hardware-fit"))
}

/// Fixtures are shared with the analyzer crate.
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("analyzer")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    bin().args(args).output().expect("failed to run hardware-fit")
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn hardware-fit");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait on hardware-fit")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "stdout is not JSON ({err}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn copy_fixtures(dir: &TempDir, names: &[&str]) {
    for name in names {
        fs::copy(fixture_path(name), dir.path().join(name)).expect("failed to copy fixture");
    }
}

// ---------------------------------------------------------------------------
// analyze-file / analyze-stdin
// ---------------------------------------------------------------------------

#[test]
fn analyze_file_prints_analysis_json() {
    let input = fixture_path("windows-about-en.txt");
    let output = run(&["analyze-file", "--input", input.to_str().unwrap()]);

    assert!(output.status.success(), "{output:?}");
    let json = stdout_json(&output);
    assert_eq!(json["platform"], "desktop");
    assert_eq!(json["score"]["points"], 100);
    assert_eq!(json["results"].as_array().unwrap().len(), 5);
    assert_eq!(json["results"][0]["attribute"], "processor");
}

#[test]
fn analyze_file_apple_silicon_with_report() {
    let input = fixture_path("macbook-pro-m2-sonoma.txt");
    let output = run(&[
        "analyze-file",
        "--input",
        input.to_str().unwrap(),
        "--platform",
        "apple-silicon",
        "--with-report",
    ]);

    assert!(output.status.success(), "{output:?}");
    let json = stdout_json(&output);
    assert_eq!(json["analysis"]["platform"], "apple_silicon");
    assert_eq!(json["analysis"]["score"]["points"], 0);
    assert_eq!(json["report"]["accepted"], false);
    assert_eq!(json["report"]["rejection_code"], "gating_failure");
}

#[test]
fn analyze_file_table_format() {
    let input = fixture_path("windows-about-en.txt");
    let output = run(&[
        "analyze-file",
        "--input",
        input.to_str().unwrap(),
        "--format",
        "table",
    ]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Score: 100/100"), "{stdout}");
}

#[test]
fn analyze_file_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");
    let output = run(&["analyze-file", "--input", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Failed to read"), "{stderr}");
}

#[test]
fn analyze_stdin_reports_no_data_for_noise() {
    let output = run_with_stdin(
        &["analyze-stdin", "--with-report", "--source", "noise"],
        "~~ ## ..\n",
    );

    assert!(output.status.success(), "{output:?}");
    let json = stdout_json(&output);
    assert_eq!(json["analysis"]["score"], "no_data");
    assert_eq!(json["report"]["source"], "noise");
    assert_eq!(json["report"]["rejection_code"], "no_data");
}

#[test]
fn analyze_stdin_allow_no_data_accepts_noise() {
    let output = run_with_stdin(&["analyze-stdin", "--with-report", "--allow-no-data"], "");

    assert!(output.status.success(), "{output:?}");
    let json = stdout_json(&output);
    assert_eq!(json["report"]["accepted"], true);
    assert_eq!(json["report"]["source"], "<stdin>");
}

#[test]
fn min_score_out_of_range_is_rejected_by_parser() {
    let output = run_with_stdin(&["analyze-stdin", "--min-score", "101"], "");
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// config handling
// ---------------------------------------------------------------------------

#[test]
fn config_min_score_applies_and_flag_overrides() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("hardware-fit.yml");
    fs::write(
        &config,
        "version: \"1.0\"\nacceptance:\n  min_score: 90\n",
    )
    .unwrap();
    let input = fixture_path("windows-about-fr.txt");

    let output = run(&[
        "analyze-file",
        "--input",
        input.to_str().unwrap(),
        "--with-report",
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");
    let json = stdout_json(&output);
    assert_eq!(json["report"]["accepted"], false);
    assert_eq!(json["report"]["rejection_code"], "below_min_score");

    let output = run(&[
        "analyze-file",
        "--input",
        input.to_str().unwrap(),
        "--with-report",
        "--config",
        config.to_str().unwrap(),
        "--min-score",
        "50",
    ]);
    assert!(output.status.success(), "{output:?}");
    let json = stdout_json(&output);
    assert_eq!(json["report"]["accepted"], true);
}

#[test]
fn config_platform_is_used_when_flag_absent() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("hardware-fit.yml");
    fs::write(&config, "version: \"1.0\"\nplatform: apple_silicon\n").unwrap();
    let input = fixture_path("macbook-air-ocr-misread.txt");

    let output = run(&[
        "analyze-file",
        "--input",
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");
    let json = stdout_json(&output);
    assert_eq!(json["platform"], "apple_silicon");
    assert_eq!(json["score"]["points"], 100);
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.yml");
    fs::write(&config, "version: \"1.0\"\nbatch:\n  jobs: 0\n").unwrap();

    let output = run_with_stdin(
        &["analyze-stdin", "--config", config.to_str().unwrap()],
        "",
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"), "{stderr}");
}

#[test]
fn init_config_writes_default_and_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("hardware-fit.yml");

    let output = run(&["init-config", "--output", path.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("min_score: 55"), "{raw}");

    let output = run(&["init-config", "--output", path.to_str().unwrap()]);
    assert!(!output.status.success());

    let output = run(&["init-config", "--output", path.to_str().unwrap(), "--force"]);
    assert!(output.status.success());
}

// ---------------------------------------------------------------------------
// batch
// ---------------------------------------------------------------------------

#[test]
fn batch_writes_report_file() {
    let inputs = TempDir::new().unwrap();
    copy_fixtures(
        &inputs,
        &[
            "windows-about-en.txt",
            "windows-about-de.txt",
            "windows-snapdragon.txt",
        ],
    );
    let out = TempDir::new().unwrap();
    let report_path = out.path().join("report.json");

    let output = run(&[
        "batch",
        inputs.path().to_str().unwrap(),
        "--output",
        report_path.to_str().unwrap(),
        "--jobs",
        "2",
    ]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 accepted, 1 rejected"), "{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 gating_failure"), "{stderr}");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["accepted"], 2);
    assert_eq!(json["summary"]["rejection_codes"]["gating_failure"], 1);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    let sources: Vec<&str> = json["reports"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["source"].as_str().unwrap())
        .collect();
    assert!(sources[0].ends_with("windows-about-de.txt"));
    assert!(sources[2].ends_with("windows-snapdragon.txt"));
}

#[test]
fn batch_strict_fails_on_rejection_but_still_writes_report() {
    let inputs = TempDir::new().unwrap();
    copy_fixtures(&inputs, &["windows-about-en.txt", "empty-noise.txt"]);
    let out = TempDir::new().unwrap();
    let report_path = out.path().join("report.yaml");

    let output = run(&[
        "batch",
        inputs.path().to_str().unwrap(),
        "--output",
        report_path.to_str().unwrap(),
        "--format",
        "yaml",
        "--strict",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rejected by the acceptance policy"), "{stderr}");

    let raw = fs::read_to_string(&report_path).unwrap();
    assert!(raw.contains("no_data"), "{raw}");
}

#[test]
fn batch_strict_passes_when_everything_is_accepted() {
    let inputs = TempDir::new().unwrap();
    copy_fixtures(&inputs, &["macbook-air-ocr-misread.txt"]);

    let output = run(&[
        "batch",
        inputs.path().to_str().unwrap(),
        "--platform",
        "apple-silicon",
        "--strict",
        "--format",
        "table",
    ]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 accepted, 0 rejected, 1 total"), "{stdout}");
}

#[test]
fn batch_without_text_files_fails() {
    let inputs = TempDir::new().unwrap();
    fs::write(inputs.path().join("notes.md"), "nothing").unwrap();

    let output = run(&["batch", inputs.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No .txt files"), "{stderr}");
}
