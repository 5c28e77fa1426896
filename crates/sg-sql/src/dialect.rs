//! Warehouse dialects a cleaned view body can be parsed under
//!
//! Each dialect is a thin named handle over a `sqlparser` grammar. Parse
//! failures are mapped to [`SqlError::ParseError`] with the position the
//! grammar reported, so the CLI can point at the offending line of the
//! cleaned body.

use sqlparser::ast::Statement;
use sqlparser::dialect::Dialect;
use sqlparser::parser::Parser;

use crate::error::{SqlError, SqlResult};

/// A named SQL grammar used to parse view bodies
pub trait SqlDialect: Send + Sync {
    /// Grammar handed to `sqlparser`
    fn grammar(&self) -> &dyn Dialect;

    /// Name as written in `scriptguard.yml` and `--dialect`
    fn name(&self) -> &'static str;

    /// Parse a cleaned body into statements
    fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        Parser::parse_sql(self.grammar(), sql).map_err(|e| {
            let message = e.to_string();
            let (line, column) = error_position(&message).unwrap_or((0, 0));
            SqlError::ParseError {
                message,
                line,
                column,
            }
        })
    }
}

/// Position `sqlparser` embeds in its error text, as `(line, column)`.
///
/// `ParserError` carries no structured location, only a trailing
/// "Line: N, Column: M" in the message.
fn error_position(message: &str) -> Option<(usize, usize)> {
    Some((
        number_after(message, "Line: ")?,
        number_after(message, "Column: ")?,
    ))
}

/// Leading decimal digits after the first occurrence of `label`.
fn number_after(message: &str, label: &str) -> Option<usize> {
    let rest = &message[message.find(label)? + label.len()..];
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    digits.parse().ok()
}

/// Declare a unit dialect handle over a `sqlparser` grammar.
macro_rules! warehouse_dialect {
    (
        $(#[$meta:meta])*
        $Name:ident => $grammar:path, $label:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $Name {
            grammar: $grammar,
        }

        impl $Name {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl SqlDialect for $Name {
            fn grammar(&self) -> &dyn Dialect {
                &self.grammar
            }

            fn name(&self) -> &'static str {
                $label
            }
        }
    };
}

warehouse_dialect! {
    /// Snowflake, the default for view repositories
    SnowflakeDialect => sqlparser::dialect::SnowflakeDialect, "snowflake"
}

warehouse_dialect! {
    /// PostgreSQL
    PostgresDialect => sqlparser::dialect::PostgreSqlDialect, "postgres"
}

warehouse_dialect! {
    /// DuckDB
    DuckDbDialect => sqlparser::dialect::DuckDbDialect, "duckdb"
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
