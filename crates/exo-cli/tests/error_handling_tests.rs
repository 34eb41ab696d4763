//! Tests for error messages, suggestions and exit codes.

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn exo(project: &TempDir, home: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("exo");
    cmd.current_dir(project.path())
        .env("EXO_PATHS__HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

fn dirs() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

#[test]
fn test_unknown_generation_type_lists_available() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["gen", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown generation type 'nope'"))
        .stderr(predicate::str::contains("docker"))
        .stderr(predicate::str::contains("k8s"));
}

#[test]
fn test_infra_without_provider_names_the_flag() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["gen", "infra"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--provider"));
    assert!(!project.path().join("infra").exists());
}

#[test]
fn test_unknown_tool() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["add", "terraform"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown tool 'terraform'"))
        .stderr(predicate::str::contains("monitoring"));
}

#[test]
fn test_invalid_enum_value_is_a_usage_error() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["gen", "db", "--db", "oracle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("oracle"));
}

#[test]
fn test_init_non_interactive_requires_name() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["init", "--non-interactive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--name"));
    assert!(!project.path().join(".exo.yaml").exists());
}

#[test]
fn test_invalid_app_name() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["init", "--non-interactive", "--name", "bad name!"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid application name"));
}

#[test]
fn test_upgrade_without_config_is_not_found() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["upgrade", "--non-interactive"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exo init"));
}

#[test]
fn test_removing_missing_plugin_is_not_found() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["plugin", "remove", "ghost"])
        .assert()
        .code(3);
}

#[test]
fn test_unknown_config_key() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_explicit_config_file() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["-c", "does-not-exist.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_verbose_shows_causes() {
    let (project, home) = dirs();
    exo(&project, &home)
        .args(["-v", "-c", "does-not-exist.toml", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Caused by"));
}

#[test]
fn test_no_arguments_prints_usage() {
    let (project, home) = dirs();
    exo(&project, &home)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}
