// ABOUTME: YAML parse checker for discovered files
// ABOUTME: Safe-loads each file in order and collects every failure into a problem report

pub mod error;
mod safe_load;

use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

pub use error::{CheckError, Result};

use crate::discovery::TrackedFiles;
use crate::report::{Problem, ProblemReport};

/// Walks a YAML stream the way a single-document safe load would.
///
/// Repeated mapping keys are accepted. Local tags have no constructor and are
/// an error, as is a stream holding more than one document. Nesting deeper
/// than serde_yaml's recursion limit (128) is reported as an error too.
pub fn parse_str(content: &str) -> Result<()> {
    let mut documents = 0usize;

    for document in serde_yaml::Deserializer::from_str(content) {
        safe_load::Node::deserialize(document)?;
        documents += 1;
        if documents > 1 {
            return Err(CheckError::MultipleDocuments);
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct YamlChecker;

impl YamlChecker {
    pub fn new() -> Self {
        Self
    }

    /// Read `path` as UTF-8 and check that it parses.
    pub async fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        // the handle is dropped before parsing starts
        let content = fs::read_to_string(path.as_ref()).await?;
        parse_str(&content)
    }

    /// Check every file in discovery order without stopping at the first failure.
    pub async fn check_all(&self, files: &TrackedFiles) -> ProblemReport {
        let mut report = ProblemReport::new();

        for path in files.paths() {
            debug!("Checking {}", path.display());
            if let Err(err) = self.check_file(files.resolve(path)).await {
                debug!("{} failed to parse: {}", path.display(), err);
                report.push(Problem::new(path.clone(), err.to_string()));
            }
        }

        info!(
            "Checked {} files, {} with problems",
            files.len(),
            report.len()
        );
        report
    }
}
