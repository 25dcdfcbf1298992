use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const GNI_FILE: &str = "restricted_traces_autogen.gni";
const HEADER_FILE: &str = "restricted_traces_autogen.h";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gen_restricted_traces"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn gen_restricted_traces")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn no_outputs(dir: &Path) -> bool {
    !dir.join(GNI_FILE).exists() && !dir.join(HEADER_FILE).exists()
}

#[test]
fn inputs_mode_prints_manifest_name() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["inputs"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "restricted_traces.json");
    assert!(no_outputs(tmp.path()));
}

#[test]
fn outputs_mode_prints_output_names() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["outputs"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        "restricted_traces_autogen.gni,restricted_traces_autogen.h"
    );
    assert!(no_outputs(tmp.path()));
}

#[test]
fn unknown_mode_exits_one() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["sources"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid script parameters."));
    assert!(no_outputs(tmp.path()));
}

#[test]
fn full_generation_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("restricted_traces.json"),
        r#"{ "traces": ["foo", "bar"] }"#,
    )
    .unwrap();

    let output = run(tmp.path(), &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).is_empty());

    let header = std::fs::read_to_string(tmp.path().join(HEADER_FILE)).unwrap();
    assert!(header.contains("{RestrictedTraceID::bar, {bar::kReplayFrameStart, bar::kReplayFrameEnd, \"bar\"}}"));
}

#[test]
fn dir_flag_points_at_manifest_directory() {
    let tmp = TempDir::new().unwrap();
    let traces_dir = tmp.path().join("restricted_traces");
    std::fs::create_dir(&traces_dir).unwrap();
    std::fs::write(traces_dir.join("restricted_traces.json"), r#"{ "traces": ["foo"] }"#).unwrap();

    let output = run(tmp.path(), &["-C", "restricted_traces"]);
    assert!(output.status.success());
    assert!(traces_dir.join(GNI_FILE).exists());
    assert!(no_outputs(tmp.path()));
}

#[test]
fn missing_traces_key_exits_one() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("restricted_traces.json"), r#"{}"#).unwrap();

    let output = run(tmp.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Trace data missing traces key."));
    assert!(no_outputs(tmp.path()));
}

#[test]
fn nested_duplicate_key_exits_one() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("restricted_traces.json"),
        r#"{ "traces": ["foo"], "extra": { "a": 1, "a": 2 } }"#,
    )
    .unwrap();

    let output = run(tmp.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("E_DUPLICATE_KEY"));
    assert!(no_outputs(tmp.path()));
}

#[test]
fn check_flag_does_not_write() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("restricted_traces.json"), r#"{ "traces": ["foo"] }"#).unwrap();

    let output = run(tmp.path(), &["--check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(no_outputs(tmp.path()));

    assert!(run(tmp.path(), &[]).status.success());
    assert!(run(tmp.path(), &["--check"]).status.success());
}

#[test]
fn unknown_flag_exits_one_not_usage_status() {
    let tmp = TempDir::new().unwrap();
    for args in [&["--bogus"][..], &["-x"][..]] {
        let output = run(tmp.path(), args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(no_outputs(tmp.path()));
    }
}

#[test]
fn arguments_after_mode_are_ignored() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["inputs", "extra", "--bogus"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "restricted_traces.json");

    let output = run(tmp.path(), &["outputs", "extra"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        "restricted_traces_autogen.gni,restricted_traces_autogen.h"
    );
}

#[test]
fn help_and_version_exit_zero() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(run(tmp.path(), &["--help"]).status.code(), Some(0));
    assert_eq!(run(tmp.path(), &["--version"]).status.code(), Some(0));
}

#[test]
fn json_flag_prints_report_on_stdout() {
    let tmp = TempDir::new().unwrap();
    let long = "t".repeat(40);
    std::fs::write(
        tmp.path().join("restricted_traces.json"),
        format!(r#"{{ "traces": ["foo", "foo", "{long}"] }}"#),
    )
    .unwrap();

    let output = run(tmp.path(), &["--json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(no_outputs(tmp.path()));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ok"], false);
    let codes: Vec<&str> = report["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["E_DUPLICATE_TRACE", "E_NAME_TOO_LONG"]);
    assert_eq!(report["errors"][0]["path"], "$.traces[1]");
}

#[test]
fn json_flag_reports_load_failures() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("restricted_traces.json"), r#"{}"#).unwrap();

    let output = run(tmp.path(), &["--json"]);
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["errors"][0]["code"], "E_MISSING_FIELD");
    assert_eq!(report["errors"][0]["severity"], "error");
}
