// ABOUTME: Error types for tracked file discovery
// ABOUTME: Distinguishes a git process that could not start from one that exited nonzero

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("could not run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("exited with status {code}")]
    GitFailed { code: i32 },

    #[error("terminated by a signal")]
    Terminated,
}

impl DiscoveryError {
    /// Process exit code to propagate when discovery fails.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiscoveryError::GitFailed { code } => *code,
            DiscoveryError::Spawn { .. } | DiscoveryError::Terminated => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
