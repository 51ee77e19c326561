// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `testrig init`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn init_writes_loadable_declaration() {
    let temp = Project::empty();

    testrig_cmd()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Created"));

    assert_eq!(temp.read("testrig.toml"), ORIGINAL_CONFIG);

    testrig_cmd()
        .arg("config")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("testTimeout: 90000ms"));
}

#[test]
fn init_refuses_to_overwrite() {
    let temp = Project::with_config("[test]\nglobals = false\n");

    testrig_cmd()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));

    assert_eq!(temp.read("testrig.toml"), "[test]\nglobals = false\n");
}

#[test]
fn init_force_overwrites() {
    let temp = Project::with_config("[test]\nglobals = false\n");

    testrig_cmd()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(temp.read("testrig.toml"), ORIGINAL_CONFIG);
}

#[test]
fn init_writes_to_env_var_path() {
    let temp = Project::empty();
    temp.file("ci/.keep", "");

    testrig_cmd()
        .arg("init")
        .env("TESTRIG_CONFIG", temp.path().join("ci/testrig.toml"))
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(temp.read("ci/testrig.toml"), ORIGINAL_CONFIG);
    assert!(!temp.path().join("testrig.toml").exists());
}
