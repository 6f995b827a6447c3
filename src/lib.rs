// ABOUTME: Library root for the yaml-fmt pre-commit checker
// ABOUTME: Exports discovery, checking and reporting so the binary and tests share them

#[cfg(feature = "yaml")]
pub mod checker;
pub mod cli;
pub mod discovery;
pub mod report;

// Re-export commonly used types
#[cfg(feature = "yaml")]
pub use checker::YamlChecker;
pub use cli::{App, Args, Config};
pub use discovery::{GitLsFiles, StaticFileSource, TrackedFileSource, TrackedFiles};
pub use report::{CheckOutcome, Problem, ProblemReport, ReportFormat, Reporter};
