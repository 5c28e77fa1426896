//! Error types for sg-core

use thiserror::Error;

/// Core error type for Scriptguard
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: A canonical script has no counterpart in the candidate collection
    #[error("[E004] Script '{name}' not found in candidate scripts")]
    ScriptNotFound { name: String },

    /// E005: Script file does not declare a `view <name>`
    #[error("[E005] No `view <name>` declaration found in {path}")]
    ScriptNameNotFound { path: String },

    /// E006: Safe comment character class does not compile
    #[error("[E006] Invalid comment character class '{class}': {message}")]
    InvalidCommentClass { class: String, message: String },

    /// E007: IO error with file path context
    #[error("[E007] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
