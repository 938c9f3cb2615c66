#![cfg(not(feature = "image-source"))]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn build_without_decoder_reports_missing_capability() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("icon.png");
    std::fs::write(&path, "whatever").unwrap();

    Command::cargo_bin("braillogo")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("--features image-source"));
}
