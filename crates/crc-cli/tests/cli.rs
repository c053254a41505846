//! End-to-end tests for the `crc` binary in flag mode

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn crc(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("crc").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn help_lists_flags_and_examples() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--styled"))
        .stdout(predicate::str::contains("--zustand"))
        .stdout(predicate::str::contains("crc Modal --ts --styled --test"));
}

#[test]
fn version_flag_works() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crc"));
}

#[test]
fn plain_javascript_component() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .arg("Button")
        .assert()
        .success()
        .stdout(predicate::str::contains("Component Button created successfully!"));

    let dir = tmp.path().join("Button");
    assert_eq!(listing(&dir), vec!["Button.css", "Button.jsx", "index.js"]);

    let component = fs::read_to_string(dir.join("Button.jsx")).unwrap();
    assert!(component.contains("import \"./Button.css\";"));
    assert!(component.contains("className=\"button\""));

    let index = fs::read_to_string(dir.join("index.js")).unwrap();
    assert_eq!(index, "export { Button } from \"./Button\";\n");
}

#[test]
fn styled_typescript_component_with_test() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .args(["Modal", "--ts", "--styled", "--test"])
        .assert()
        .success();

    let dir = tmp.path().join("Modal");
    assert_eq!(
        listing(&dir),
        vec!["Modal.test.tsx", "Modal.tsx", "index.ts", "styled.ts"]
    );
    let styles = fs::read_to_string(dir.join("styled.ts")).unwrap();
    assert!(styles.starts_with("import styled from \"styled-components\";"));
}

#[test]
fn component_with_store_and_context() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .args(["Dashboard", "--ts", "-z", "-c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("useDashboardStore"));

    let dir = tmp.path().join("Dashboard");
    assert_eq!(
        listing(&dir),
        vec!["Dashboard.css", "Dashboard.tsx", "context.ts", "index.ts", "store.ts"]
    );

    let index = fs::read_to_string(dir.join("index.ts")).unwrap();
    assert_eq!(index.lines().count(), 3);
    assert!(index.contains("useDashboardStore"));
    assert!(index.contains("DashboardProvider, useDashboardContext, dashboardActions"));
}

#[test]
fn nested_path_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .args(["Card", "--path", "./src/components"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created directory"));

    assert!(tmp.path().join("src/components/Card/Card.jsx").is_file());
}

#[test]
fn conflicting_styles_write_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .args(["Header", "-s", "-e"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot be used together"));

    assert!(listing(tmp.path()).is_empty());
}

#[test]
fn lowercase_name_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .arg("button")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid name 'button'"))
        .stderr(predicate::str::contains("Usage: crc <ComponentName>"));

    assert!(listing(tmp.path()).is_empty());
}

#[test]
fn escaping_path_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .args(["Card", "--path", "../outside"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid path"));
}

#[test]
fn rerun_overwrites_existing_files() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("Button");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Button.jsx"), "stale").unwrap();

    crc(tmp.path()).arg("Button").assert().success();

    let component = fs::read_to_string(dir.join("Button.jsx")).unwrap();
    assert_ne!(component, "stale");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let tmp = tempfile::tempdir().unwrap();
    crc(tmp.path())
        .args(["Button", "--bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));

    assert!(listing(tmp.path()).is_empty());
}

#[test]
fn existing_project_is_refused_before_any_tool_runs() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("my-app")).unwrap();

    // no node, npm or git on PATH: only the directory check can answer
    crc(tmp.path())
        .args(["my-app", "--project", "--yes"])
        .env("PATH", "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("missing required runtime").not());

    assert_eq!(listing(tmp.path()), vec!["my-app"]);
}

#[test]
fn existing_boilerplate_target_is_refused_before_any_tool_runs() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("my-site")).unwrap();

    crc(tmp.path())
        .args(["my-site", "--nextjs", "--yes"])
        .env("PATH", "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}
