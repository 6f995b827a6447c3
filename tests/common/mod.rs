// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Builds throwaway repositories and a scripted stand-in for git

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    _tmp: TempDir,
    pub repo: PathBuf,
    pub home: PathBuf,
    pub git: PathBuf,
    listing: PathBuf,
}

impl TestEnvironment {
    /// Environment whose fake git lists nothing.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let repo = tmp.path().join("repo");
        let home = tmp.path().join("home");
        fs::create_dir_all(&repo).expect("create repo dir");
        fs::create_dir_all(&home).expect("create home dir");

        let listing = tmp.path().join("listing.txt");
        fs::write(&listing, "").expect("write listing");

        let git = tmp.path().join("fake-git.sh");
        let env = Self {
            _tmp: tmp,
            repo,
            home,
            git,
            listing,
        };
        env.write_git_script(&format!("cat '{}'", env.listing.display()));
        env
    }

    /// Write a file into the repository, creating parent directories.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.repo.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write repo file");
        path
    }

    /// Set what the fake `git ls-files -z` prints, NUL-terminated entries.
    pub fn track(&self, entries: &[&str]) {
        let mut listing = entries.join("\0");
        listing.push('\0');
        fs::write(&self.listing, listing).expect("write listing");
    }

    /// Make the fake git fail with the given exit code.
    pub fn fail_git(&self, code: i32) {
        self.write_git_script(&format!(
            "echo 'fatal: not a git repository' >&2\nexit {}",
            code
        ));
    }

    /// Replace the body of the fake git script.
    pub fn write_git_script(&self, body: &str) {
        fs::write(&self.git, format!("#!/bin/sh\n{}\n", body)).expect("write git script");
        let mut perms = fs::metadata(&self.git).expect("stat git script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&self.git, perms).expect("chmod git script");
    }

    /// The binary, isolated from the caller's environment and pointed at the fake git.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("yaml-fmt");
        cmd.current_dir(&self.repo)
            .env("HOME", &self.home)
            .env("YAML_FMT_GIT", &self.git)
            .env_remove("RUST_LOG")
            .env_remove("YAML_FMT_PATTERNS")
            .env_remove("YAML_FMT_LOG_LEVEL")
            .env_remove("YAML_FMT_LOG_FORMAT");
        cmd
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo
    }
}

/// Whether a real git binary is on PATH.
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
