//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use sg_core::MissingPolicy;

/// Scriptguard - verify deployed SQL views against their source and list the
/// tables a query reads
#[derive(Parser, Debug)]
#[command(name = "sg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to scriptguard.yml (default: discovered in the working directory)
    #[arg(short, long, global = true, env = "SCRIPTGUARD_CONFIG")]
    pub config: Option<String>,

    /// Override SQL dialect (snowflake, postgres, duckdb)
    #[arg(short, long, global = true)]
    pub dialect: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare canonical scripts against candidate scripts by view name
    Compare(CompareArgs),

    /// List the tables a SQL query reads
    Tables(TablesArgs),

    /// Print a script with comments, DDL front-matter, and semicolons removed
    Clean(CleanArgs),

    /// Print a script the way `compare` sees it
    Normalize(NormalizeArgs),
}

/// Arguments for the compare command
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Canonical script file or directory (default: config canonical_paths)
    pub canonical: Option<String>,

    /// Candidate script file or directory (default: config candidate_paths)
    pub candidate: Option<String>,

    /// What to do when a canonical script has no candidate
    #[arg(long, value_enum)]
    pub on_missing: Option<OnMissing>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the tables command
#[derive(Args, Debug)]
pub struct TablesArgs {
    /// SQL file (or JSON parse tree with --tree-json)
    pub file: String,

    /// Drop repeated names, keeping first-seen order
    #[arg(short, long)]
    pub unique: bool,

    /// Read the input as a JSON parse tree instead of SQL
    #[arg(long)]
    pub tree_json: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// SQL file to clean
    pub file: String,
}

/// Arguments for the normalize command
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// SQL file to normalize
    pub file: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Missing-script handling for compare
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMissing {
    /// Abort on the first canonical script with no candidate
    Fail,
    /// List scripts with no candidate alongside mismatches
    Report,
}

impl From<OnMissing> for MissingPolicy {
    fn from(value: OnMissing) -> Self {
        match value {
            OnMissing::Fail => MissingPolicy::Fail,
            OnMissing::Report => MissingPolicy::Report,
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
