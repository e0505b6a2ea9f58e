// Copyright 2020 - developers of the `grammers` project.
// Copyright 2026 - developers of the `tdjson` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Included by the `tests/deps.rs` of every library crate in the workspace.
// Cargo runs integration tests from the crate root, so the relative paths
// resolve to that crate's own manifest and `DEPS.md`.
use std::collections::BTreeSet;
use std::fs;

fn manifest_deps() -> BTreeSet<String> {
    let manifest = fs::read_to_string("Cargo.toml").expect("Cargo.toml must exist");
    let manifest = toml::from_str::<toml::Table>(&manifest).expect("Cargo.toml should be valid");

    ["dependencies", "build-dependencies", "dev-dependencies"]
        .iter()
        .filter_map(|key| manifest.get(*key).and_then(toml::Value::as_table))
        .flat_map(|table| table.keys().cloned())
        .collect()
}

fn documented_deps() -> BTreeSet<String> {
    fs::read_to_string("DEPS.md")
        .expect("DEPS.md must exist")
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|dep| dep.trim().to_string())
        .collect()
}

#[test]
fn check_deps_documented() {
    let listed = manifest_deps();
    let documented = documented_deps();

    let undocumented = listed.difference(&documented).collect::<Vec<_>>();
    let stale = documented.difference(&listed).collect::<Vec<_>>();

    assert!(
        undocumented.is_empty(),
        "some Cargo.toml dependencies are not in DEPS.md: {undocumented:?}"
    );
    assert!(
        stale.is_empty(),
        "DEPS.md lists dependencies no longer present in Cargo.toml: {stale:?}"
    );
}
