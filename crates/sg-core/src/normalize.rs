//! SQL text normalization
//!
//! Two independent transforms live here:
//!
//! - **Structural cleaning** ([`SqlCleaner::clean`], [`clean_sql`]) prepares a
//!   raw DDL script for the SQL parser: it standardizes `character varying`,
//!   strips comments, drops the `CREATE [OR REPLACE] ... AS` front-matter and
//!   removes semicolons. The passes run in a fixed order; front-matter
//!   detection must see comment-free text.
//! - **Comparison normalization** ([`normalize_for_comparison`]) flattens the
//!   differences two deployments of the same script tend to pick up
//!   (trailing spaces, semicolons, letter case) so they can be compared with
//!   plain string equality.
//!
//! Both are total over any input string and never fail.

use crate::error::{CoreError, CoreResult};
use regex::Regex;
use std::sync::OnceLock;

/// Characters allowed inside a `/* ... */` comment body by default.
///
/// Block comments containing anything else (quotes, parentheses, `*`, ...)
/// are left in place. This keeps a stray `/*` from swallowing real code up to
/// an unrelated `*/` further down the file.
pub const DEFAULT_COMMENT_BODY_CHARS: &str = r"\w\s,.\-";

const VARCHAR_PATTERN: &str = r"(?i)character\s+varying";

const FRONT_MATTER_PATTERN: &str =
    r#"(?is)\bcreate(?:\s+or\s+replace)?\s+[\w.$"\s]+?.*?\bas\s+(with|select)\b"#;

/// Compiled structural-cleaning passes.
#[derive(Debug, Clone)]
pub struct SqlCleaner {
    varchar: Regex,
    comments: Regex,
    front_matter: Regex,
}

impl SqlCleaner {
    /// Build a cleaner whose block-comment matcher accepts `comment_body_chars`
    /// inside `/* ... */`.
    ///
    /// `comment_body_chars` is the inside of a regex character class, e.g.
    /// `\w\s,.\-`.
    pub fn with_comment_chars(comment_body_chars: &str) -> CoreResult<Self> {
        let comments_pattern = format!(r"(?im)/\*[{}]*\*/|--.*$|//.*$", comment_body_chars);
        let comments =
            Regex::new(&comments_pattern).map_err(|e| CoreError::InvalidCommentClass {
                class: comment_body_chars.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            varchar: Regex::new(VARCHAR_PATTERN).expect("valid regex literal"),
            comments,
            front_matter: Regex::new(FRONT_MATTER_PATTERN).expect("valid regex literal"),
        })
    }

    /// Run every structural pass in order, repeating the sequence until the
    /// text stops changing.
    ///
    /// One pass can expose new work for an earlier one: removing `/**/` from
    /// `character /**/ varying` leaves `character  varying`, and dropping a
    /// `;` can join `a;s` into `as`. Each pass either keeps the text or makes
    /// it strictly shorter, so the loop ends.
    pub fn clean(&self, sql: &str) -> String {
        let mut text = self.clean_once(sql);
        loop {
            let next = self.clean_once(&text);
            if next == text {
                return text;
            }
            text = next;
        }
    }

    fn clean_once(&self, sql: &str) -> String {
        let text = self.standardize_varchar(sql);
        let text = self.strip_comments(&text);
        let text = self.strip_front_matter(&text);
        remove_semicolons(&text).trim().to_string()
    }

    /// Replace `character varying` (any case, any whitespace between the
    /// words) with `varchar`.
    pub fn standardize_varchar(&self, sql: &str) -> String {
        self.varchar.replace_all(sql, "varchar").into_owned()
    }

    /// Remove `/* */`, `--` and `//` comments.
    pub fn strip_comments(&self, sql: &str) -> String {
        self.comments.replace_all(sql, "").into_owned()
    }

    /// Replace the first `CREATE [OR REPLACE] <name> ... AS WITH|SELECT`
    /// prefix with the `WITH`/`SELECT` keyword it ends in.
    ///
    /// The match is lazy, so only the text up to the first `AS WITH` or
    /// `AS SELECT` after `CREATE` is removed. Later statements in the same
    /// script are left alone.
    pub fn strip_front_matter(&self, sql: &str) -> String {
        self.front_matter.replace(sql, "${1}").into_owned()
    }
}

impl Default for SqlCleaner {
    fn default() -> Self {
        Self::with_comment_chars(DEFAULT_COMMENT_BODY_CHARS).expect("valid regex literal")
    }
}

/// Shared cleaner built with the default comment character class.
pub fn default_cleaner() -> &'static SqlCleaner {
    static CLEANER: OnceLock<SqlCleaner> = OnceLock::new();
    CLEANER.get_or_init(SqlCleaner::default)
}

/// Structurally clean `sql` with the default cleaner.
pub fn clean_sql(sql: &str) -> String {
    default_cleaner().clean(sql)
}

fn trailing_whitespace_regex() -> &'static Regex {
    static TRAILING_WS: OnceLock<Regex> = OnceLock::new();
    // Greedy `\s+` backtracks to stop before the last newline of a run, so a
    // run of blank lines collapses to one line break.
    TRAILING_WS.get_or_init(|| Regex::new(r"(?m)\s+$").expect("valid regex literal"))
}

/// Remove whitespace at the end of every line, blank lines included.
///
/// Some warehouses append a space after comment lines when they store a view
/// definition. This also turns `\r\n` line endings into `\n` and drops
/// empty lines, so `a\n\nb` and `a\nb` normalize alike.
pub fn trim_line_endings(text: &str) -> String {
    trailing_whitespace_regex().replace_all(text, "").into_owned()
}

/// Drop every `;`.
pub fn remove_semicolons(text: &str) -> String {
    text.replace(';', "")
}

/// Normalize a script for equality comparison.
pub fn normalize_for_comparison(text: &str) -> String {
    let text = trim_line_endings(text);
    // `select 1 ;` leaves a trailing space once the semicolon is gone.
    let text = trim_line_endings(&remove_semicolons(&text));
    text.to_lowercase().trim().to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
