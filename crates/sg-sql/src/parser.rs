//! SQL parser wrapper

use crate::dialect::{DuckDbDialect, PostgresDialect, SnowflakeDialect, SqlDialect};
use crate::error::{SqlError, SqlResult};
use crate::lowering::lower_statement;
use crate::tree::ParseTree;
use sqlparser::ast::Statement;

/// SQL parser that wraps sqlparser-rs with dialect support
pub struct SqlParser {
    dialect: Box<dyn SqlDialect>,
}

impl SqlParser {
    /// Create a new parser with Snowflake dialect
    pub fn snowflake() -> Self {
        Self {
            dialect: Box::new(SnowflakeDialect::new()),
        }
    }

    /// Create a new parser with PostgreSQL dialect
    pub fn postgres() -> Self {
        Self {
            dialect: Box::new(PostgresDialect::new()),
        }
    }

    /// Create a new parser with DuckDB dialect
    pub fn duckdb() -> Self {
        Self {
            dialect: Box::new(DuckDbDialect::new()),
        }
    }

    /// Create a parser from dialect name
    pub fn from_dialect_name(name: &str) -> SqlResult<Self> {
        match name.to_lowercase().as_str() {
            "snowflake" => Ok(Self::snowflake()),
            "postgres" | "postgresql" => Ok(Self::postgres()),
            "duckdb" => Ok(Self::duckdb()),
            _ => Err(SqlError::UnknownDialect(name.to_string())),
        }
    }

    /// Parse SQL into AST statements
    pub fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        let sql = sql.trim();
        if sql.is_empty() {
            return Err(SqlError::EmptySql);
        }

        self.dialect.parse(sql)
    }

    /// Parse SQL and return the first statement
    pub fn parse_single(&self, sql: &str) -> SqlResult<Statement> {
        let stmts = self.parse(sql)?;
        stmts.into_iter().next().ok_or(SqlError::EmptySql)
    }

    /// Parse cleaned SQL into a [`ParseTree`].
    ///
    /// A single statement yields its query tree; several statements yield a
    /// sequence of trees. Every statement must be a query.
    pub fn parse_tree(&self, sql: &str) -> SqlResult<ParseTree> {
        let mut trees = self
            .parse(sql)?
            .iter()
            .map(lower_statement)
            .collect::<SqlResult<Vec<_>>>()?;

        match trees.len() {
            0 => Err(SqlError::EmptySql),
            1 => Ok(trees.remove(0)),
            _ => Ok(ParseTree::Sequence(trees)),
        }
    }

    /// Get the dialect name
    pub fn dialect_name(&self) -> &'static str {
        self.dialect.name()
    }
}

impl Default for SqlParser {
    fn default() -> Self {
        Self::snowflake()
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
