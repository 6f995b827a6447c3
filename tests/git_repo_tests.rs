// ABOUTME: End-to-end tests against a real git repository
// ABOUTME: Skipped when no git binary is available on the test machine

#![cfg(feature = "yaml")]

use predicates::prelude::*;
use predicates::str::contains;
use std::path::Path;
use std::process::Command as StdCommand;

mod common;
use common::{git_available, TestEnvironment};

fn git(repo: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(repo)
        .env("GIT_CEILING_DIRECTORIES", repo.parent().unwrap())
        .status()
        .expect("run git");
    assert!(status.success(), "git {:?} failed", args);
}

fn real_git_cmd(env: &TestEnvironment) -> assert_cmd::Command {
    let mut cmd = env.cmd();
    cmd.env_remove("YAML_FMT_GIT")
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .env_remove("GIT_INDEX_FILE")
        .env("GIT_CEILING_DIRECTORIES", env.repo_path().parent().unwrap());
    cmd
}

#[test]
fn test_only_tracked_yaml_is_checked() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let env = TestEnvironment::new();
    git(env.repo_path(), &["init", "-q"]);
    env.write_file("a.yaml", "key: value\n");
    env.write_file("config/b.yml", "key: [unclosed\n");
    env.write_file("notes.txt", "key: [not yaml by extension\n");
    git(env.repo_path(), &["add", "a.yaml", "config/b.yml", "notes.txt"]);
    env.write_file("untracked.yaml", "also: [broken\n");

    real_git_cmd(&env)
        .assert()
        .code(1)
        .stderr(contains("config/b.yml"))
        .stderr(contains("untracked.yaml").not())
        .stderr(contains("notes.txt").not());
}

#[test]
fn test_names_git_would_quote_are_checked() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let env = TestEnvironment::new();
    git(env.repo_path(), &["init", "-q"]);
    env.write_file("we\"ird.yaml", "key: [unclosed\n");
    env.write_file("tab\tx.yml", "other: {unclosed\n");
    env.write_file("caf\u{e9}.yaml", "fine: true\n");
    git(env.repo_path(), &["add", "."]);

    let assert = real_git_cmd(&env).assert().code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();

    assert!(stderr.contains("  - we\"ird.yaml: "));
    assert!(stderr.contains("  - tab\tx.yml: "));
    assert!(!stderr.contains("caf\u{e9}.yaml"));
}

#[test]
fn test_tracked_file_deleted_from_disk() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let env = TestEnvironment::new();
    git(env.repo_path(), &["init", "-q"]);
    let doomed = env.write_file("doomed.yaml", "key: value\n");
    env.write_file("kept.yml", "list:\n  - 1\n  - 2\n");
    git(env.repo_path(), &["add", "."]);
    std::fs::remove_file(doomed).unwrap();

    real_git_cmd(&env)
        .assert()
        .success()
        .stdout("[yaml-fmt] YAML parse check passed\n");
}

#[test]
fn test_outside_a_repository() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let env = TestEnvironment::new();
    env.write_file("a.yaml", "key: [unclosed\n");

    let assert = real_git_cmd(&env).assert().failure();
    let code = assert.get_output().status.code();

    assert_eq!(code, Some(128));
    assert.stderr(contains("[yaml-fmt] git ls-files failed"));
}
