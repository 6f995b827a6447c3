// ABOUTME: Error types for per-file YAML checks
// ABOUTME: Each variant becomes one problem entry in the final report

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{0}")]
    Read(#[from] std::io::Error),

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected a single document in the stream, but found another document")]
    MultipleDocuments,
}

pub type Result<T> = std::result::Result<T, CheckError>;
