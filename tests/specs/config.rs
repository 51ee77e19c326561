// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `testrig config`.
//!
//! Loading either succeeds and prints the descriptor, or fails before
//! anything else happens with a non-zero exit.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// VALID DECLARATIONS
// =============================================================================

#[test]
fn prints_original_declaration() {
    testrig_cmd()
        .arg("config")
        .current_dir(fixture("node-suite"))
        .assert()
        .success()
        .stdout(predicates::str::contains("environment: node"))
        .stdout(predicates::str::contains("  - test/**/*.test.ts"))
        .stdout(predicates::str::contains("testTimeout: 90000ms"))
        .stderr(predicates::str::is_empty());
}

#[test]
fn json_output_round_trips_option_values() {
    let output = testrig_cmd()
        .args(["config", "--output", "json"])
        .current_dir(fixture("node-suite"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["globals"], true);
    assert_eq!(value["environment"], "node");
    assert_eq!(value["include"], serde_json::json!(["test/**/*.test.ts"]));
    assert_eq!(value["testTimeout"], 90_000);
}

#[test]
fn loading_twice_prints_identical_descriptors() {
    let run = || {
        testrig_cmd()
            .args(["config", "-o", "json"])
            .current_dir(fixture("node-suite"))
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn config_found_from_subdirectory() {
    let temp = Project::with_config(ORIGINAL_CONFIG);
    temp.file("test/index/placeholder.txt", "");

    testrig_cmd()
        .arg("config")
        .current_dir(temp.path().join("test/index"))
        .assert()
        .success()
        .stdout(predicates::str::contains("globals: true"));
}

#[test]
fn explicit_config_flag_is_used() {
    let temp = Project::empty();
    temp.file("ci/testrig.ci.toml", "[test]\ntestTimeout = 120000\n");

    testrig_cmd()
        .args(["config", "--config", "ci/testrig.ci.toml"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("testTimeout: 120000ms"));
}

#[test]
fn config_env_var_is_used() {
    let temp = Project::empty();
    temp.file("alt.toml", "[test]\nenvironment = \"jsdom\"\n");

    testrig_cmd()
        .arg("config")
        .env("TESTRIG_CONFIG", temp.path().join("alt.toml"))
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("environment: jsdom"));
}

#[test]
fn config_flag_wins_over_env_var() {
    let temp = Project::with_config(ORIGINAL_CONFIG);
    temp.file("alt.toml", "[test]\nenvironment = \"jsdom\"\n");

    testrig_cmd()
        .args(["config", "-C", "testrig.toml"])
        .env("TESTRIG_CONFIG", temp.path().join("alt.toml"))
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("environment: node"));
}

#[test]
fn env_var_wins_over_discovery() {
    let temp = Project::with_config(ORIGINAL_CONFIG);
    temp.file("ci/alt.toml", "[test]\ntestTimeout = 120000\n");

    testrig_cmd()
        .arg("config")
        .env("TESTRIG_CONFIG", temp.path().join("ci/alt.toml"))
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("testTimeout: 120000ms"));
}

// =============================================================================
// INVALID DECLARATIONS
// =============================================================================

#[test]
fn zero_timeout_fails() {
    let temp = Project::with_config("[test]\ntestTimeout = 0\n");

    testrig_cmd()
        .arg("config")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("testTimeout must be a positive"));
}

#[test]
fn negative_timeout_fails() {
    let temp = Project::with_config("[test]\ntestTimeout = -5\n");

    testrig_cmd()
        .arg("config")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("got -5"));
}

#[test]
fn unknown_environment_fails() {
    let temp = Project::with_config("[test]\nenvironment = \"browser\"\n");

    testrig_cmd()
        .arg("config")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown environment `browser`"));
}

#[test]
fn invalid_glob_fails() {
    let temp = Project::with_config("[test]\ninclude = [\"test/[.ts\"]\n");

    testrig_cmd()
        .arg("config")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid include glob"));
}

#[test]
fn unknown_key_fails() {
    let temp = Project::with_config("[test]\nglobal = true\n");

    testrig_cmd()
        .arg("config")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown field"));
}

#[test]
fn missing_config_fails() {
    let temp = Project::empty();

    testrig_cmd()
        .arg("config")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("no testrig.toml found"));
}
