// ABOUTME: Configuration management for the yaml-fmt checker
// ABOUTME: Loads an optional YAML config file and layers environment overrides on top

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::discovery::git::DEFAULT_PATTERNS;

const CONFIG_FILE_NAMES: [&str; 2] = [".yaml-fmt.yaml", ".yaml-fmt.yml"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    #[serde(default = "default_git_program")]
    pub git_program: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_git_program() -> String {
    "git".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            git_program: default_git_program(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the default locations
    pub fn load(path: Option<PathBuf>, repo: &Path) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => bail!("configuration file not found: {}", p.display()),
            Some(p) => Some(p),
            None => Self::find_config_file(repo),
        };

        let mut config = match config_path {
            Some(p) => {
                let contents = std::fs::read_to_string(&p)
                    .with_context(|| format!("failed to read {}", p.display()))?;
                Self::from_yaml(&contents)
                    .with_context(|| format!("invalid configuration in {}", p.display()))?
            }
            None => Config::default(),
        };

        config.merge_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file(repo: &Path) -> Option<PathBuf> {
        for name in CONFIG_FILE_NAMES {
            let candidate = repo.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        let home_config = dirs::home_dir()?
            .join(".config")
            .join("yaml-fmt")
            .join("config.yaml");
        home_config.exists().then_some(home_config)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml(contents: &str) -> Result<Self> {
        // an empty file deserializes to null
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    #[cfg(not(feature = "yaml"))]
    pub fn from_yaml(_contents: &str) -> Result<Self> {
        Ok(Config::default())
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        self.merge_from(|key| std::env::var(key).ok())
    }

    fn merge_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(program) = lookup("YAML_FMT_GIT") {
            self.git_program = program;
        }
        if let Some(patterns) = lookup("YAML_FMT_PATTERNS") {
            self.patterns = patterns
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(level) = lookup("YAML_FMT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("YAML_FMT_LOG_FORMAT") {
            self.logging.format = format;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(anyhow!("at least one file pattern must be configured"));
        }
        if self.git_program.trim().is_empty() {
            return Err(anyhow!("git_program cannot be empty"));
        }
        match self.logging.format.as_str() {
            "pretty" | "compact" => Ok(()),
            other => Err(anyhow!(
                "unknown log format '{}', expected 'pretty' or 'compact'",
                other
            )),
        }
    }
}
