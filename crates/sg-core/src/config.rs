//! Configuration types and parsing for scriptguard.yml

use crate::compare::MissingPolicy;
use crate::error::{CoreError, CoreResult};
use crate::normalize::{SqlCleaner, DEFAULT_COMMENT_BODY_CHARS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names searched by [`Config::discover`], in order
pub const CONFIG_FILE_NAMES: &[&str] = &["scriptguard.yml", "scriptguard.yaml"];

/// Project configuration from scriptguard.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SQL dialect used when parsing scripts
    #[serde(default)]
    pub dialect: Dialect,

    /// What `compare` does when a canonical script has no candidate
    #[serde(default)]
    pub on_missing: MissingPolicy,

    /// Regex character class allowed inside `/* */` comments when cleaning
    #[serde(default = "default_comment_body_chars")]
    pub comment_body_chars: String,

    /// Default canonical script locations (files or directories)
    #[serde(default)]
    pub canonical_paths: Vec<String>,

    /// Default candidate script locations (files or directories)
    #[serde(default)]
    pub candidate_paths: Vec<String>,
}

/// SQL dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Snowflake SQL dialect
    #[default]
    Snowflake,
    /// PostgreSQL dialect
    Postgres,
    /// DuckDB SQL dialect
    DuckDb,
}

fn default_comment_body_chars() -> String {
    DEFAULT_COMMENT_BODY_CHARS.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            on_missing: MissingPolicy::default(),
            comment_body_chars: default_comment_body_chars(),
            canonical_paths: Vec::new(),
            candidate_paths: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_yaml(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        let config: Config =
            serde_yaml::from_str(content).map_err(|e| CoreError::ConfigParseError {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, falling back to defaults when no
    /// config file is present
    pub fn discover(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Path of the first config file present in `dir`
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.exists())
    }

    /// Build the SQL cleaner described by this configuration
    pub fn cleaner(&self) -> CoreResult<SqlCleaner> {
        SqlCleaner::with_comment_chars(&self.comment_body_chars)
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.comment_body_chars.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "comment_body_chars cannot be empty".to_string(),
            });
        }
        // Surface a bad character class at load time rather than on first use.
        self.cleaner()?;
        Ok(())
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Snowflake => write!(f, "snowflake"),
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::DuckDb => write!(f, "duckdb"),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
