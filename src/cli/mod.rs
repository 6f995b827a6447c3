// ABOUTME: CLI module for the yaml-fmt checker
// ABOUTME: Exports argument parsing, configuration and the application entry point

pub mod app;
pub mod args;
pub mod commands;
pub mod config;

pub use app::App;
pub use args::Args;
pub use config::Config;
