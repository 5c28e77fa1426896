//! Error types for sg-sql

use thiserror::Error;

/// SQL parsing and parse-tree errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// SQL parse error (S001)
    #[error("[S001] SQL parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Empty SQL (S002)
    #[error("[S002] SQL is empty")]
    EmptySql,

    /// Unsupported SQL statement (S003)
    #[error("[S003] Unsupported SQL statement type: {0}")]
    UnsupportedStatement(String),

    /// Unknown dialect name (S004)
    #[error("[S004] Unknown SQL dialect: {0}")]
    UnknownDialect(String),

    /// Parse tree JSON could not be read (S005)
    #[error("[S005] Invalid parse tree JSON: {0}")]
    InvalidTreeJson(#[from] serde_json::Error),
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
