use assert_cmd::Command;
use assert_fs::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

const SETTINGS: &str = r#"{ "referenceDate": "2020-06-15", "englandCutoverDate": "2020-07-01" }"#;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("grant-apply").expect("binary");
    cmd.env_remove("GRANT_APPLY_CONFIG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout JSON")
}

#[test]
fn describe_prints_default_form() {
    let output = cli().arg("describe").assert().success().get_output().clone();
    let value = stdout_json(&output);
    assert_eq!(value["id"], "standard-proposal");
    assert_eq!(value["title"], "Your funding proposal");
}

#[test]
fn describe_in_welsh() {
    let output = cli()
        .args(["describe", "--form", "get-advice", "--locale", "cy"])
        .assert()
        .success()
        .get_output()
        .clone();
    assert_eq!(stdout_json(&output)["title"], "Cael cyngor ar eich syniad");
}

#[test]
fn validate_fails_for_incomplete_data() {
    let workspace = assert_fs::TempDir::new().unwrap();
    let data = workspace.child("data.json");
    data.write_str(r#"{ "projectName": "Repair cafe", "projectCountries": ["england"] }"#)
        .unwrap();

    let output = cli()
        .arg("validate")
        .arg("--data")
        .arg(data.path())
        .assert()
        .failure()
        .get_output()
        .clone();
    let value = stdout_json(&output);
    assert_eq!(value["isValid"], false);
    assert!(String::from_utf8_lossy(&output.stderr).contains("validation failed"));
}

#[test]
fn validate_accepts_complete_proposal() {
    let fixture = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../apply-spec/tests/fixtures/standard_proposal_england.json"
    );
    let workspace = assert_fs::TempDir::new().unwrap();
    let config = workspace.child("settings.json");
    config.write_str(SETTINGS).unwrap();

    cli()
        .args(["validate", "--data", fixture])
        .env("GRANT_APPLY_CONFIG", config.path())
        .assert()
        .success();
}

#[test]
fn unknown_form_is_rejected_by_the_parser() {
    cli()
        .args(["validate", "--form", "standard-enquiry"])
        .assert()
        .failure();
}

#[test]
fn submission_prefixes_programme_title() {
    let workspace = TempDir::new().expect("temp dir");
    let data = workspace.path().join("data.json");
    let metadata = workspace.path().join("metadata.json");
    std::fs::write(&data, json!({ "projectName": "Repair cafe" }).to_string()).unwrap();
    std::fs::write(
        &metadata,
        json!({ "programme": { "title": "Awards for All" } }).to_string(),
    )
    .unwrap();

    let output = cli()
        .arg("submission")
        .arg("--data")
        .arg(&data)
        .arg("--metadata")
        .arg(&metadata)
        .assert()
        .success()
        .get_output()
        .clone();
    assert_eq!(
        stdout_json(&output)["submission"]["projectName"],
        "Awards for All: Repair cafe"
    );
}

#[test]
fn enrich_applies_england_cutover() {
    let workspace = assert_fs::TempDir::new().unwrap();
    let application = workspace.child("application.json");
    application
        .write_str(
            &json!({
                "id": "app-1",
                "formId": "standard-proposal",
                "applicationData": { "projectCountries": ["england"] },
                "createdAt": "2020-01-10T09:30:00Z",
                "updatedAt": "2020-01-10T09:30:00Z",
                "expiresAt": "2020-09-30T00:00:00Z",
            })
            .to_string(),
        )
        .unwrap();
    let config = workspace.child("settings.json");
    config.write_str(SETTINGS).unwrap();

    let output = cli()
        .arg("enrich")
        .arg("--application")
        .arg(application.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .get_output()
        .clone();
    let value = stdout_json(&output);
    assert_eq!(value["daysRemaining"], 16);
    assert_eq!(value["isExpired"], false);
}

#[test]
fn missing_data_file_reports_path() {
    let output = cli()
        .args(["progress", "--data", "does-not-exist.json"])
        .assert()
        .failure()
        .get_output()
        .clone();
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.json"));
}
