//! Behavioral specs for junit-to-ctrf.toml.
//!
//! Tests discovery, precedence against flags, and validation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Discovery
// =============================================================================

/// > junit-to-ctrf.toml in the working directory is used
#[test]
fn config_in_working_directory() {
    let temp = Project::from_fixture("math");
    temp.config(
        r#"
[report]
output = "out/ctrf.json"
tool = "mocha"
use_suite_name = false

[environment]
os = "linux"
attempt = 2
"#,
    );

    convert("reports/*.xml").pwd(temp.path()).passes();

    let report = temp.read_json("out/ctrf.json");
    assert_eq!(report["results"]["tool"]["name"], "mocha");
    assert_eq!(report["results"]["tests"][0]["name"], "adds");
    assert_eq!(report["results"]["environment"]["os"], "linux");
    assert_eq!(report["results"]["environment"]["attempt"], "2");
}

/// > Discovery walks up from the working directory
#[test]
fn config_found_in_parent_directory() {
    let temp = Project::from_fixture("math");
    temp.config("[report]\ntool = \"from-parent\"\n");

    let report = convert("*.xml")
        .pwd(temp.path().join("reports"))
        .args(&["-o", "-"])
        .passes()
        .stdout_json();
    assert_eq!(report["results"]["tool"]["name"], "from-parent");
}

/// > Discovery stops at the repository root
#[test]
fn config_discovery_stops_at_git_root() {
    let temp = Project::from_fixture("math");
    temp.config("[report]\ntool = \"outside\"\n");
    std::fs::create_dir_all(temp.path().join("reports/.git")).unwrap();

    let report = convert("*.xml")
        .pwd(temp.path().join("reports"))
        .args(&["-o", "-"])
        .passes()
        .stdout_json();
    assert_eq!(report["results"]["tool"]["name"], "junit-to-ctrf");
}

/// > -C <FILE> specifies config file (short for --config)
#[test]
fn short_config_flag_works() {
    let temp = Project::from_fixture("math");
    temp.file("ci/ctrf.toml", "version = 1\n[report]\ntool = \"explicit\"\n");

    let report = convert("reports/*.xml")
        .pwd(temp.path())
        .args(&["-o", "-", "-C", "ci/ctrf.toml"])
        .passes()
        .stdout_json();
    assert_eq!(report["results"]["tool"]["name"], "explicit");
}

/// > CTRF_CONFIG sets config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::from_fixture("math");
    temp.file("ci/ctrf.toml", "version = 1\n[report]\ntool = \"from-env\"\n");

    let report = convert("reports/*.xml")
        .pwd(temp.path())
        .args(&["-o", "-"])
        .env("CTRF_CONFIG", "ci/ctrf.toml")
        .passes()
        .stdout_json();
    assert_eq!(report["results"]["tool"]["name"], "from-env");
}

// =============================================================================
// Precedence
// =============================================================================

/// > Flags override config values; --env overrides config environment keys
#[test]
fn flags_override_config() {
    let temp = Project::from_fixture("math");
    temp.config(
        r#"
[report]
tool = "mocha"
use_suite_name = false

[environment]
os = "linux"
ci = "true"
"#,
    );

    let report = convert("reports/*.xml")
        .pwd(temp.path())
        .args(&["-o", "-", "-t", "jest", "-u", "-e", "os=macos"])
        .passes()
        .stdout_json();

    assert_eq!(report["results"]["tool"]["name"], "jest");
    assert_eq!(report["results"]["tests"][0]["name"], "Math: adds");
    assert_eq!(report["results"]["environment"]["os"], "macos");
    assert_eq!(report["results"]["environment"]["ci"], "true");
}

/// > -o - overrides a configured output path
#[test]
fn dash_output_overrides_config_output() {
    let temp = Project::from_fixture("math");
    temp.config("[report]\noutput = \"out/ctrf.json\"\n");

    convert("reports/*.xml")
        .pwd(temp.path())
        .args(&["-o", "-"])
        .passes()
        .stdout_has("\"results\"");
    assert!(!temp.exists("out"));
}

// =============================================================================
// Validation
// =============================================================================

/// > Unknown keys are warnings (forward compatibility)
#[test]
fn unknown_config_key_warns() {
    let temp = Project::from_fixture("math");
    temp.config("unknown_key = true\n[report]\ncolor = \"auto\"\n");

    convert("reports/*.xml")
        .pwd(temp.path())
        .args(&["-o", "-"])
        .passes()
        .stderr_has("unrecognized field `unknown_key`")
        .stderr_has("unrecognized field `report.color`");
}

/// > Valid config produces no warnings
#[test]
fn valid_config_no_warnings() {
    let temp = Project::from_fixture("math");
    temp.config("[report]\ntool = \"mocha\"\n");

    convert("reports/*.xml")
        .pwd(temp.path())
        .args(&["-o", "-"])
        .passes()
        .stderr_lacks("warning");
}

/// > Unsupported versions are configuration errors
#[test]
fn unsupported_version_fails() {
    let temp = Project::from_fixture("math");
    temp.config("version = 2\n");

    convert("reports/*.xml")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// > Missing version is a configuration error
#[test]
fn missing_version_fails() {
    let temp = Project::from_fixture("math");
    temp.file("junit-to-ctrf.toml", "[report]\ntool = \"mocha\"\n");

    convert("reports/*.xml")
        .pwd(temp.path())
        .exits(2)
        .stderr_has("missing required field: version");
}

/// > An explicit config path that does not exist is a configuration error
#[test]
fn missing_explicit_config_fails() {
    let temp = Project::from_fixture("math");

    convert("reports/*.xml")
        .pwd(temp.path())
        .args(&["--config", "nope.toml"])
        .exits(2)
        .stderr_has("config file not found: nope.toml");
}

/// > An explicit config path that cannot be read is a configuration error
#[test]
fn unreadable_explicit_config_fails() {
    let temp = Project::from_fixture("math");
    std::fs::create_dir(temp.path().join("ctrf.toml")).unwrap();

    convert("reports/*.xml")
        .pwd(temp.path())
        .args(&["-C", "ctrf.toml"])
        .exits(2)
        .stderr_has("config error: failed to read ctrf.toml");
}
