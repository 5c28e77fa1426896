use super::*;

#[test]
fn test_snowflake_parse() {
    let dialect = SnowflakeDialect::new();
    let stmts = dialect.parse("SELECT * FROM analytics.orders").unwrap();
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_postgres_parse_cast() {
    let dialect = PostgresDialect::new();
    let stmts = dialect.parse("SELECT note::varchar FROM orders").unwrap();
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_duckdb_parse() {
    let dialect = DuckDbDialect::new();
    let stmts = dialect.parse("SELECT * FROM users").unwrap();
    assert_eq!(stmts.len(), 1);
}

#[test]
fn test_dialect_names() {
    assert_eq!(SnowflakeDialect::new().name(), "snowflake");
    assert_eq!(PostgresDialect::new().name(), "postgres");
    assert_eq!(DuckDbDialect::new().name(), "duckdb");
}

#[test]
fn test_parse_error_location() {
    let dialect = DuckDbDialect::new();
    let result = dialect.parse("SELECT\nFROM users");
    match result {
        Err(SqlError::ParseError { line, message, .. }) => {
            assert_eq!(line, 2, "Expected line 2 (message: {})", message);
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_error_position_from_message() {
    assert_eq!(
        error_position("Expected: an expression, found: EOF at Line: 5, Column: 10"),
        Some((5, 10))
    );
    assert_eq!(error_position("Some error without location"), None);
    assert_eq!(error_position("at Line: 3"), None);
}

#[test]
fn test_number_after_stops_at_non_digit() {
    assert_eq!(number_after("Line: 12, Column: 4", "Line: "), Some(12));
    assert_eq!(number_after("Column: 7)", "Column: "), Some(7));
    assert_eq!(number_after("Line: x", "Line: "), None);
}

#[test]
fn test_tokenizer_error_is_parse_error() {
    let dialect = SnowflakeDialect::default();
    match dialect.parse("SELECT 'unterminated") {
        Err(SqlError::ParseError { message, .. }) => assert!(!message.is_empty()),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}
