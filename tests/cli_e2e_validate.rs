//! End-to-end tests for the `validate` command
//!
//! These tests invoke the actual CLI binary and validate its behavior
//! from a user's perspective.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Test that --help flag shows help information
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_validate_help() {
    let mut cmd = cargo_bin_cmd!("specs-site");

    cmd.arg("validate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validate a specs.yaml"));
}

/// A structurally clean configuration validates successfully
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_validate_clean_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_file = temp.child("specs.yaml");
    config_file
        .write_str(
            r#"
specs:
  - name: runtime
    remote: https://github.com/opencontainers/runtime-spec.git
    releases:
      - tag: v1.0.0
      - tag: v1.0.1
"#,
        )
        .unwrap();

    let mut cmd = cargo_bin_cmd!("specs-site");

    cmd.arg("validate")
        .arg("--config")
        .arg(config_file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

/// A release with neither a tag nor a commit is reported and fails
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_validate_unresolvable_release() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_file = temp.child("specs.yaml");
    config_file
        .write_str(
            r#"
specs:
  - name: runtime
    remote: https://github.com/opencontainers/runtime-spec.git
    releases:
      - branch: main
"#,
        )
        .unwrap();

    let mut cmd = cargo_bin_cmd!("specs-site");

    cmd.arg("validate")
        .arg("--config")
        .arg(config_file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("neither a tag nor a commit"));
}

/// Unparseable YAML is a failure, not a panic
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_validate_broken_yaml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_file = temp.child("specs.yaml");
    config_file.write_str("specs: [unclosed\n").unwrap();

    let mut cmd = cargo_bin_cmd!("specs-site");

    cmd.arg("validate")
        .arg("--config")
        .arg(config_file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration parsing failed"));
}
