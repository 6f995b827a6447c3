// ABOUTME: Discovery of YAML files tracked by git
// ABOUTME: Exports the file source trait, the git implementation and the resulting file list

pub mod error;
pub mod git;

use async_trait::async_trait;
use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use error::{DiscoveryError, Result};
pub use git::GitLsFiles;

/// Ordered, de-duplicated list of tracked files that exist on disk.
///
/// Paths are kept exactly as the listing reported them (relative to the
/// repository root) so reports show the same names git does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedFiles {
    root: PathBuf,
    paths: Vec<PathBuf>,
}

impl TrackedFiles {
    /// Build the list from NUL-separated listing output (`git ls-files -z`).
    ///
    /// Names are taken verbatim. Empty entries are skipped, repeats dropped
    /// (first one wins) and entries missing from disk are excluded.
    pub fn from_listing(root: &Path, listing: &str) -> Self {
        let mut seen = IndexSet::new();

        for entry in listing.split('\0') {
            if entry.is_empty() {
                continue;
            }
            seen.insert(PathBuf::from(entry));
        }

        let paths = seen
            .into_iter()
            .filter(|path| {
                let exists = root.join(path).exists();
                if !exists {
                    debug!("Skipping {}: listed but not on disk", path.display());
                }
                exists
            })
            .collect();

        Self {
            root: root.to_path_buf(),
            paths,
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Location on disk of a listed path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Something that can tell us which files are tracked.
#[async_trait]
pub trait TrackedFileSource: Send + Sync {
    async fn discover(&self) -> Result<TrackedFiles>;

    fn name(&self) -> &'static str;
}

/// In-memory source, mostly useful for exercising the checker without git.
#[derive(Debug, Clone)]
pub struct StaticFileSource {
    root: PathBuf,
    entries: Vec<String>,
}

impl StaticFileSource {
    pub fn new(root: impl Into<PathBuf>, entries: Vec<String>) -> Self {
        Self {
            root: root.into(),
            entries,
        }
    }
}

#[async_trait]
impl TrackedFileSource for StaticFileSource {
    async fn discover(&self) -> Result<TrackedFiles> {
        Ok(TrackedFiles::from_listing(&self.root, &self.entries.join("\0")))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
