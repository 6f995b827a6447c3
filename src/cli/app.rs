// ABOUTME: Main application orchestration for the yaml-fmt CLI
// ABOUTME: Wires configuration, logging, discovery and reporting, and picks the exit code

use anyhow::{anyhow, Result};
use std::io;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Config};
use crate::discovery::GitLsFiles;
use crate::report::{CheckOutcome, Reporter, PREFIX};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initialize logging based on configuration. Logs never go to stdout.
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            self.config.logging.level.as_str()
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        let result = match self.config.logging.format.as_str() {
            "compact" => tracing_subscriber::fmt()
                .compact()
                .with_env_filter(env_filter)
                .with_ansi(!no_color)
                .with_target(false)
                .with_writer(io::stderr)
                .try_init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(!no_color)
                .with_target(false)
                .with_writer(io::stderr)
                .try_init(),
        };
        result.map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the check and return the process exit code
    pub async fn run(&self, args: &Args) -> Result<ExitCode> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting yaml-fmt v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration: {:?}", self.config);

        let source = GitLsFiles::new(&args.repo)
            .with_program(self.config.git_program.clone())
            .with_patterns(self.config.patterns.clone());

        let outcome = match commands::check_tracked_yaml(&source).await {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("{} git ls-files failed: {}", PREFIX, err);
                return Ok(exit_code(err.exit_code()));
            }
        };

        let stdout = io::stdout();
        let stderr = io::stderr();
        Reporter::new(args.format).emit(&outcome, &mut stdout.lock(), &mut stderr.lock())?;

        Ok(exit_code(outcome.exit_code()))
    }

    /// Without YAML support the check is skipped before any configuration is
    /// read or git is run. Returns the exit code in that case.
    pub fn skip_if_unsupported(args: &Args) -> Option<ExitCode> {
        if commands::YAML_SUPPORT {
            return None;
        }

        let outcome = CheckOutcome::Skipped;
        let stdout = io::stdout();
        let stderr = io::stderr();
        let code = match Reporter::new(args.format).emit(
            &outcome,
            &mut stdout.lock(),
            &mut stderr.lock(),
        ) {
            Ok(()) => exit_code(outcome.exit_code()),
            Err(_) => ExitCode::FAILURE,
        };
        Some(code)
    }

    /// Create application from command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone(), &args.repo)?;
        Ok(Self::new(config))
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_status(code))
}

/// Codes outside what a process can report collapse to 1.
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
