//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use sg_core::Config;
use sg_sql::SqlParser;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Intentionally empty: ExitCode is a control-flow mechanism, not a
        // user-facing error.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load configuration from `--config`, or discover it in the working directory.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let config = match &global.config {
        Some(path) => Config::load(Path::new(path))
            .with_context(|| format!("Failed to load configuration file {}", path))?,
        None => Config::discover(Path::new(".")).context("Failed to load configuration")?,
    };

    if global.verbose {
        eprintln!(
            "[verbose] Config: dialect={}, on_missing={}",
            config.dialect, config.on_missing
        );
    }
    Ok(config)
}

/// Build a parser for the `--dialect` override, falling back to the config.
pub(crate) fn build_parser(global: &GlobalArgs, config: &Config) -> Result<SqlParser> {
    let name = global
        .dialect
        .clone()
        .unwrap_or_else(|| config.dialect.to_string());
    let parser = SqlParser::from_dialect_name(&name)?;

    if global.verbose {
        eprintln!("[verbose] Using {} dialect", parser.dialect_name());
    }
    Ok(parser)
}

/// Read a SQL (or JSON) input file.
pub(crate) fn read_input(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

/// Reports how long a command took when verbose output is enabled.
pub(crate) struct CommandTimer<'a> {
    name: &'a str,
    start: Instant,
    verbose: bool,
}

impl<'a> CommandTimer<'a> {
    pub(crate) fn start(name: &'a str, global: &GlobalArgs) -> Self {
        Self {
            name,
            start: Instant::now(),
            verbose: global.verbose,
        }
    }

    pub(crate) fn finish(self) {
        if self.verbose {
            eprintln!(
                "[verbose] Finished '{}' in {:.4} seconds",
                self.name,
                self.start.elapsed().as_secs_f64()
            );
        }
    }
}
