//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// `adr` running inside `dir`, with HOME pointed there so no real home config leaks in.
fn adr_in(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("adr"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("USERPROFILE", dir)
        .env_remove("RUST_LOG")
        .env_remove("ADR_REPOSITORY__PATH");
    cmd
}

fn init_repo() -> TempDir {
    let tmp = TempDir::new().expect("temp dir");
    adr_in(tmp.path()).arg("init").assert().success();
    tmp
}

fn add(dir: &Path, title: &str) {
    adr_in(dir).args(["add", title]).assert().success();
}

fn record(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join("docs/decisions").join(name)).expect("read record")
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("adr"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("adr"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("adr"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Architectural Decision Records"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("link"))
        .stdout(predicate::str::contains("supersede"));
}

#[test]
fn test_init_creates_config_and_repository() {
    let tmp = TempDir::new().expect("temp dir");
    adr_in(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initializing adr repository..."))
        .stdout(predicate::str::contains("Success!"));

    assert!(tmp.path().join(".adr.yaml").is_file());
    assert!(tmp.path().join("docs/decisions").is_dir());
    let yaml = fs::read_to_string(tmp.path().join(".adr.yaml")).expect("read config");
    assert!(yaml.contains("docs/decisions"));
}

#[test]
fn test_init_with_custom_repository() {
    let tmp = TempDir::new().expect("temp dir");
    adr_in(tmp.path()).args(["init", "--repository", "adrs"]).assert().success();
    assert!(tmp.path().join("adrs").is_dir());

    adr_in(tmp.path()).args(["add", "custom place"]).assert().success();
    assert!(tmp.path().join("adrs/001-custom-place.md").is_file());
}

#[test]
fn test_init_twice_is_a_notice() {
    let tmp = init_repo();
    adr_in(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_twice_strict_fails() {
    let tmp = init_repo();
    adr_in(tmp.path())
        .args(["init", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict flag"));
}

#[test]
fn test_add_creates_numbered_record() {
    let tmp = init_repo();
    adr_in(tmp.path())
        .args(["add", "My First Decision!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("001-my-first-decision.md"));

    let body = record(tmp.path(), "001-my-first-decision.md");
    assert!(body.starts_with("# 001-my-first-decision"));
    assert!(body.contains("## Status\nProposed"));

    add(tmp.path(), "second");
    assert!(tmp.path().join("docs/decisions/002-second.md").is_file());
}

#[test]
fn test_add_verbose_shows_conversion() {
    let tmp = init_repo();
    adr_in(tmp.path())
        .args(["add", "-v", "Use Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("will be converted to 'use-rust'"));
}

#[test]
fn test_update_replaces_status() {
    let tmp = init_repo();
    add(tmp.path(), "first");
    adr_in(tmp.path())
        .args(["update", "1", "accepted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status updated to Accepted"));

    let body = record(tmp.path(), "001-first.md");
    assert!(body.contains("## Status\nAccepted\n"));
    assert!(!body.contains("Proposed"));
}

#[test]
fn test_update_missing_record_fails() {
    let tmp = init_repo();
    adr_in(tmp.path())
        .args(["update", "7", "Accepted"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no record numbered 007"));
}

#[test]
fn test_update_four_digit_number_fails() {
    let tmp = init_repo();
    adr_in(tmp.path())
        .args(["update", "1000", "Accepted"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support 4 digit records"));
}

#[test]
fn test_link_writes_both_directions() {
    let tmp = init_repo();
    add(tmp.path(), "first");
    add(tmp.path(), "second");
    adr_in(tmp.path())
        .args(["link", "2", "Amends", "1", "Amended by"])
        .assert()
        .success();

    let second = record(tmp.path(), "002-second.md");
    let first = record(tmp.path(), "001-first.md");
    assert!(second.contains("[Links to 001-first.md: Amends](./001-first.md)"));
    assert!(first.contains("[Links to 002-second.md: Amended by](./002-second.md)"));
}

#[test]
fn test_link_with_empty_messages() {
    let tmp = init_repo();
    add(tmp.path(), "first");
    add(tmp.path(), "second");
    adr_in(tmp.path()).args(["link", "1", "", "2", ""]).assert().success();

    let first = record(tmp.path(), "001-first.md");
    let second = record(tmp.path(), "002-second.md");
    assert!(first.contains("[Links to 002-second.md: ](./002-second.md)"));
    assert!(second.contains("[Links to 001-first.md: ](./001-first.md)"));
}

#[test]
fn test_link_reports_record_without_status() {
    let tmp = init_repo();
    add(tmp.path(), "first");
    add(tmp.path(), "second");
    let second = tmp.path().join("docs/decisions/002-second.md");
    fs::write(&second, "# 002-second\n## Context\n").expect("rewrite record");

    adr_in(tmp.path())
        .args(["link", "1", "see", "2", "seen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("002-second.md has no \"## Status\" section"))
        .stdout(predicate::str::contains("Success!").not());
    assert_eq!(fs::read_to_string(&second).expect("read record"), "# 002-second\n## Context\n");
}

#[test]
fn test_supersede_marks_source() {
    let tmp = init_repo();
    add(tmp.path(), "old way");
    add(tmp.path(), "new way");
    adr_in(tmp.path())
        .args(["supersede", "1", "some note", "2", ""])
        .assert()
        .success();

    let old = record(tmp.path(), "001-old-way.md");
    let new = record(tmp.path(), "002-new-way.md");
    assert!(old.contains("## Status\nSuperseded\n"));
    let link = "[Superseded by 002-new-way.md: some note](./002-new-way.md)\n## Context";
    assert!(old.contains(link));
    assert!(!old.contains("Proposed"));
    assert!(new.contains("[Supersedes 001-old-way.md](./001-old-way.md)"));
}

#[test]
fn test_config_prints_yaml() {
    let tmp = init_repo();
    adr_in(tmp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(".adr.yaml"))
        .stdout(predicate::str::contains("status_section: Status"));
}

#[test]
fn test_env_overrides_repository() {
    let tmp = TempDir::new().expect("temp dir");
    fs::create_dir_all(tmp.path().join("elsewhere")).expect("mkdir");
    adr_in(tmp.path())
        .env("ADR_REPOSITORY__PATH", "elsewhere")
        .args(["add", "from env"])
        .assert()
        .success();
    assert!(tmp.path().join("elsewhere/001-from-env.md").is_file());
}

#[test]
fn test_explicit_config_file_missing_fails() {
    let tmp = TempDir::new().expect("temp dir");
    adr_in(tmp.path()).args(["--config", "nope.yaml", "config"]).assert().failure();
}

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().expect("temp dir");
    adr_in(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("adr"));
}
