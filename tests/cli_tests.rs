//! Integration tests for CLI argument handling
//!
//! These run the binary without a journal store: every scenario must fail
//! before any network request happens.

use predicates::prelude::*;

mod common;
use common::entix_cmd;

#[test]
fn test_help_succeeds() {
    entix_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("collections"))
        .stdout(predicate::str::contains("entities"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_version_succeeds() {
    entix_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("entix"));
}

#[test]
fn test_unknown_subcommand_fails() {
    entix_cmd().arg("journals").assert().failure();
}

#[test]
fn test_missing_token_is_config_error() {
    entix_cmd()
        .arg("collections")
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("ENTIX_TOKEN"));
}

#[test]
fn test_invalid_auth_type_is_config_error() {
    entix_cmd()
        .arg("--token")
        .arg("secret")
        .arg("--auth-type")
        .arg("basic")
        .arg("collections")
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid auth type"));
}

#[test]
fn test_missing_journal_url_is_config_error() {
    entix_cmd()
        .arg("--token")
        .arg("secret")
        .arg("collections")
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("ENTIX_JOURNAL_URL"));
}

#[test]
fn test_entities_create_requires_collection_id() {
    entix_cmd()
        .arg("--token")
        .arg("secret")
        .arg("entities")
        .arg("create")
        .arg("--address")
        .arg("0xabc")
        .arg("--blockchain")
        .arg("ethereum")
        .arg("--name")
        .arg("Alice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--collection-id"));
}

#[test]
fn test_search_rejects_malformed_collection_id() {
    entix_cmd()
        .arg("--token")
        .arg("secret")
        .arg("search")
        .arg("--collection-id")
        .arg("not-a-uuid")
        .assert()
        .failure();
}
