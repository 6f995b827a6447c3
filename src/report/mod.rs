// ABOUTME: Aggregated check results and their rendering
// ABOUTME: Maps outcomes to exit codes and writes text or JSON to stdout/stderr

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

pub const PREFIX: &str = "[yaml-fmt]";

pub const SKIP_NOTICE: &str = "[yaml-fmt] YAML support not compiled in; skipping YAML check (rebuild with `--features yaml` to enable).";

/// One file that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub path: PathBuf,
    pub message: String,
}

impl Problem {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Failures in the order the files were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProblemReport {
    problems: Vec<Problem>,
}

impl ProblemReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, problem: Problem) {
        self.problems.push(problem);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed { checked: usize },
    Failed { checked: usize, problems: ProblemReport },
    Skipped,
}

impl CheckOutcome {
    pub fn from_report(checked: usize, problems: ProblemReport) -> Self {
        if problems.is_empty() {
            CheckOutcome::Passed { checked }
        } else {
            CheckOutcome::Failed { checked, problems }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CheckOutcome::Passed { .. } | CheckOutcome::Skipped => 0,
            CheckOutcome::Failed { .. } => 1,
        }
    }

    fn status(&self) -> &'static str {
        match self {
            CheckOutcome::Passed { .. } => "passed",
            CheckOutcome::Failed { .. } => "failed",
            CheckOutcome::Skipped => "skipped",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    status: &'static str,
    checked: usize,
    problems: Vec<&'a Problem>,
    checked_at: DateTime<Utc>,
}

/// Writes an outcome to the given output and error streams.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn emit<O: Write, E: Write>(
        &self,
        outcome: &CheckOutcome,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()> {
        if matches!(outcome, CheckOutcome::Skipped) {
            writeln!(err, "{}", SKIP_NOTICE)?;
        }

        match self.format {
            ReportFormat::Text => write_text(outcome, out, err),
            ReportFormat::Json => write_json(outcome, out),
        }
    }
}

fn write_text<O: Write, E: Write>(
    outcome: &CheckOutcome,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match outcome {
        CheckOutcome::Passed { .. } => {
            writeln!(out, "{} YAML parse check passed", PREFIX)?;
        }
        CheckOutcome::Failed { problems, .. } => {
            writeln!(err, "{} YAML parsing failed for the following files:", PREFIX)?;
            for problem in problems.iter() {
                writeln!(err, "  - {}", problem)?;
            }
            writeln!(
                err,
                "{} Please fix the YAML (indentation / syntax) before committing.",
                PREFIX
            )?;
        }
        CheckOutcome::Skipped => {}
    }
    Ok(())
}

fn write_json<O: Write>(outcome: &CheckOutcome, out: &mut O) -> io::Result<()> {
    let (checked, problems) = match outcome {
        CheckOutcome::Passed { checked } => (*checked, Vec::new()),
        CheckOutcome::Failed { checked, problems } => (*checked, problems.iter().collect()),
        CheckOutcome::Skipped => (0, Vec::new()),
    };

    let summary = JsonSummary {
        status: outcome.status(),
        checked,
        problems,
        checked_at: Utc::now(),
    };

    serde_json::to_writer_pretty(&mut *out, &summary)?;
    writeln!(out)
}
