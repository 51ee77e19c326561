// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `testrig list`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn lists_matching_suites_in_order() {
    testrig_cmd()
        .arg("list")
        .current_dir(fixture("node-suite"))
        .assert()
        .success()
        .stdout("test/embedding.test.ts\ntest/index/search.test.ts\n");
}

#[test]
fn helpers_and_sources_are_not_listed() {
    testrig_cmd()
        .arg("list")
        .current_dir(fixture("node-suite"))
        .assert()
        .success()
        .stdout(predicates::str::contains("helpers.ts").not())
        .stdout(predicates::str::contains("src/").not());
}

#[test]
fn exclude_removes_matches() {
    let temp = Project::with_config(
        r#"[test]
include = ["test/**/*.test.ts"]
exclude = ["test/slow/**"]
"#,
    );
    temp.file("test/fast.test.ts", "");
    temp.file("test/slow/model.test.ts", "");

    testrig_cmd()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("test/fast.test.ts\n");
}

#[test]
fn explicit_path_is_searched() {
    let temp = Project::with_config(ORIGINAL_CONFIG);
    temp.file("packages/core/test/a.test.ts", "");

    testrig_cmd()
        .args(["list", "packages/core"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("test/a.test.ts\n");
}

#[test]
fn no_matches_fails() {
    let temp = Project::with_config(ORIGINAL_CONFIG);
    temp.file("src/index.ts", "");

    testrig_cmd()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("no test files found"));
}

#[test]
fn invalid_config_fails_before_listing() {
    let temp = Project::with_config("[test]\ntestTimeout = 0\n");
    temp.file("test/a.test.ts", "");

    testrig_cmd()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicates::str::is_empty());
}
