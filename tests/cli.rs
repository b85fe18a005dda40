use assert_cmd::Command;
use predicates::prelude::*;

fn razed() -> Command {
    Command::cargo_bin("razed").unwrap()
}

#[test]
fn lists_profiles() {
    razed()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("zscaler"));
}

#[test]
fn shows_default_profile() {
    razed()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Process prefix: ZSA"))
        .stdout(predicate::str::contains("ZSAUpdater"))
        .stdout(predicate::str::contains(r"C:\ProgramData\Zscaler"));
}

#[test]
fn shows_profile_as_json() {
    let output = razed().args(["--json", "show"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "zscaler");
    assert_eq!(json["services"].as_array().unwrap().len(), 5);
}

#[test]
fn unknown_profile_fails() {
    razed()
        .args(["purge", "--profile", "nonexistent", "--dry-run"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid target"));
}

#[test]
fn dry_run_reports_every_phase() {
    let output = razed()
        .args(["--json", "purge", "--dry-run"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dry_run"], true);
    let phases: Vec<&str> = json["phases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["phase"].as_str().unwrap())
        .collect();
    assert_eq!(
        phases,
        vec!["terminate", "delete_services", "remove_registry_keys", "remove_directories"]
    );

    let services = json["phases"][1]["items"].as_array().unwrap();
    assert_eq!(services.len(), 5);
    assert_eq!(services[0]["outcome"]["status"], "planned");
}
