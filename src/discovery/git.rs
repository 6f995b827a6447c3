// ABOUTME: git ls-files backed implementation of tracked file discovery
// ABOUTME: Runs git as a subprocess in the repository root and parses its listing

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use super::error::{DiscoveryError, Result};
use super::{TrackedFileSource, TrackedFiles};

pub const DEFAULT_PATTERNS: [&str; 2] = ["*.yml", "*.yaml"];

/// Lists files from the git index matching a set of glob patterns.
#[derive(Debug, Clone)]
pub struct GitLsFiles {
    program: String,
    root: PathBuf,
    patterns: Vec<String>,
}

impl GitLsFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            program: "git".to_string(),
            root: root.into(),
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "ls-files".to_string(),
            "-z".to_string(),
            "--".to_string(),
        ];
        args.extend(self.patterns.iter().cloned());
        args
    }
}

#[async_trait]
impl TrackedFileSource for GitLsFiles {
    async fn discover(&self) -> Result<TrackedFiles> {
        let args = self.args();
        debug!("Running {} {} in {}", self.program, args.join(" "), self.root.display());

        // git's own stderr goes straight to ours so its diagnostics reach the user
        let spawn_error = |source| DiscoveryError::Spawn {
            program: self.program.clone(),
            source,
        };
        let child = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(spawn_error)?;
        let output = child.wait_with_output().await.map_err(spawn_error)?;

        if !output.status.success() {
            return Err(match output.status.code() {
                Some(code) => DiscoveryError::GitFailed { code },
                None => DiscoveryError::Terminated,
            });
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let files = TrackedFiles::from_listing(&self.root, &listing);
        info!("Discovered {} tracked YAML files", files.len());

        Ok(files)
    }

    fn name(&self) -> &'static str {
        "git"
    }
}
