//! sg-sql - SQL parsing layer for Scriptguard
//!
//! This crate provides SQL parsing using sqlparser-rs with dialect support,
//! lowering of query ASTs into a generic clause-keyed parse tree, and table
//! reference extraction over that tree.

pub mod dialect;
pub mod error;
pub mod extractor;
pub mod lowering;
pub mod parser;
pub mod tree;

pub use dialect::{DuckDbDialect, PostgresDialect, SnowflakeDialect, SqlDialect};
pub use error::{SqlError, SqlResult};
pub use extractor::{extract_tables, table_names, unique_table_names, SOURCE_REFERENCE_KEYS};
pub use lowering::lower_statement;
pub use parser::SqlParser;
pub use tree::{ParseTree, Scalar};
