use std::fs;
use std::process::Command;

use serde_json::Value;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_drumkit_cli"));
    cmd.env("DRUMKIT_BRIDGE_CONFIG", "/nonexistent/bridge_config.json");
    cmd
}

fn data_location(kits: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::create_dir(dir.path().join("Kits")).expect("Kits dir");
    for kit in kits {
        fs::write(dir.path().join("Kits").join(format!("{kit}.xml")), "").expect("kit file");
    }
    dir
}

#[test]
fn version_prints_package_version() {
    let output = cli().arg("version").output().expect("failed to run version");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    assert_eq!(stdout.trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn kits_lists_names() {
    let dir = data_location(&["Rock", "Jazz"]);
    let output = cli()
        .args(["kits", "--data", dir.path().to_str().unwrap()])
        .output()
        .expect("failed to run kits");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, vec!["Jazz", "Rock"]);
}

#[test]
fn call_prints_json_result() {
    let dir = data_location(&["Rock"]);
    let output = cli()
        .args(["call", "--data", dir.path().to_str().unwrap(), "getKitsNames"])
        .output()
        .expect("failed to run call");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    let json: Value = serde_json::from_str(stdout.trim()).expect("JSON result");
    assert_eq!(json, serde_json::json!(["Rock"]));
}

#[test]
fn call_with_bad_argument_fails() {
    let dir = data_location(&[]);
    let output = cli()
        .args([
            "call",
            "--data",
            dir.path().to_str().unwrap(),
            "enableMetronome",
            "5",
        ])
        .output()
        .expect("failed to run call");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
    assert!(
        stderr.contains("Wrong argument type"),
        "expected type error in stderr, got {stderr}"
    );
}

#[test]
fn run_script_reports_failures() {
    let dir = data_location(&["Rock"]);
    let script = dir.path().join("session.txt");
    fs::write(
        &script,
        "# session\nstart\nisStarted\nchangeClickVolume loud\nstop\nisStarted\n",
    )
    .expect("script file");

    let output = cli()
        .args([
            "run",
            "--data",
            dir.path().to_str().unwrap(),
            script.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run script");
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["null", "true", "null", "false"]);

    let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
    assert!(stderr.contains("line 4"), "got {stderr}");
}
