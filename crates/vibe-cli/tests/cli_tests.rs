//! End-to-end tests driving both executables with scripted stdin.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TEMPLATE: &str = "# [PROJECT_NAME]\n\nType: [PROJECT_TYPE] / [DOMAIN] / [STATUS]\n";

/// Full questionnaire answers: an API for developers in finance.
const FULL_ANSWERS: &str = "Foo\n5\n6\nd\ndevs\n3\n2\n\nSync\n1\n3\n\ny\nn\nn\n\n\n\n\n";

fn project(with_template: bool) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".vibe")).unwrap();
    if with_template {
        fs::write(dir.path().join(".vibe/ai-context.md"), TEMPLATE).unwrap();
    }
    dir
}

fn bin(name: &str, dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--dir")
        .arg(dir);
    cmd
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn generate_help_names_the_binary() {
    Command::cargo_bin("vibe-generate")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vibe-generate"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn quick_setup_help_names_the_binary() {
    Command::cargo_bin("vibe-quick-setup")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vibe-quick-setup"));
}

#[test]
fn generate_writes_config_and_context() {
    let dir = project(true);

    bin("vibe-generate", dir.path())
        .write_stdin(FULL_ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Vibe Project Generator"))
        .stdout(predicate::str::contains("Project configuration generated!"))
        .stdout(predicate::str::contains("vibe-project.config.json"));

    let json = read_json(&dir.path().join("vibe-project.config.json"));
    assert_eq!(json["metadata"]["name"], "Foo");
    assert_eq!(json["metadata"]["type"], "api");
    assert_eq!(json["metadata"]["domain"], "finance");
    assert_eq!(json["audience"]["primary"]["demographics"], "devs");

    let context = fs::read_to_string(dir.path().join(".vibe/ai-context.md")).unwrap();
    assert_eq!(context, "# Foo\n\nType: api / finance / planning\n");
}

#[test]
fn generate_without_template_exits_not_found() {
    let dir = project(false);

    bin("vibe-generate", dir.path())
        .write_stdin(FULL_ANSWERS)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found"));

    assert!(!dir.path().join("vibe-project.config.json").exists());
}

#[test]
fn quick_setup_defaults_everything_on_empty_input() {
    let dir = project(false);

    bin("vibe-quick-setup", dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick setup complete!"))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("vibe-generate"));

    let json = read_json(&dir.path().join("vibe-project.config.json"));
    assert_eq!(json["metadata"]["name"], "My Project");
    assert_eq!(json["metadata"]["type"], "web-app");
    assert_eq!(json["deployment"]["platform"], "vercel");
    assert!(!dir.path().join(".vibe/ai-context.md").exists());
}

#[test]
fn quick_setup_updates_existing_template() {
    let dir = project(true);

    bin("vibe-quick-setup", dir.path())
        .write_stdin("Shop\n3\nSales board\nManagers\nspeed\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI context updated"));

    let context = fs::read_to_string(dir.path().join(".vibe/ai-context.md")).unwrap();
    assert_eq!(context, "# Shop\n\nType: dashboard / business / planning\n");
}

#[test]
fn dry_run_prints_json_and_writes_nothing() {
    let dir = project(true);

    let assert = bin("vibe-quick-setup", dir.path())
        .arg("--dry-run")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Quick Vibe Project Setup"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["$schema"], "./schemas/vibe-project.schema.json");
    assert_eq!(json["metadata"]["name"], "My Project");

    assert!(!dir.path().join("vibe-project.config.json").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join(".vibe/ai-context.md")).unwrap(),
        TEMPLATE
    );
}

#[test]
fn full_dry_run_output_is_a_json_document() {
    let dir = project(false);

    let assert = bin("vibe-generate", dir.path())
        .arg("--dry-run")
        .write_stdin(FULL_ANSWERS)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["metadata"]["name"], "Foo");
    assert_eq!(json["metadata"]["type"], "api");
}

#[test]
fn custom_output_paths_from_environment() {
    let dir = project(false);

    bin("vibe-quick-setup", dir.path())
        .env("VIBE_PATHS__CONFIG_FILE", "custom.json")
        .write_stdin("")
        .assert()
        .success();

    assert!(dir.path().join("custom.json").exists());
    assert!(!dir.path().join("vibe-project.config.json").exists());
}

#[test]
fn missing_config_file_exits_with_configuration_error() {
    let dir = project(false);

    bin("vibe-quick-setup", dir.path())
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .write_stdin("")
        .assert()
        .failure()
        .code(4);
}
