use super::*;
use crate::parser::SqlParser;

fn tree(json: &str) -> ParseTree {
    ParseTree::from_json_str(json).unwrap()
}

fn parse_and_extract(sql: &str) -> Vec<String> {
    let tree = SqlParser::snowflake().parse_tree(sql).unwrap();
    table_names(&tree)
}

#[test]
fn test_extract_from_scalar() {
    assert_eq!(table_names(&tree(r#"{"from": "orders"}"#)), vec!["orders"]);
}

#[test]
fn test_extract_from_join_list() {
    assert_eq!(
        table_names(&tree(r#"{"from": ["orders", {"inner join": "customers"}]}"#)),
        vec!["orders", "customers"]
    );
}

#[test]
fn test_extract_ignores_non_source_keys() {
    assert_eq!(
        table_names(&tree(r#"{"select": "*", "from": "t"}"#)),
        vec!["t"]
    );
}

#[test]
fn test_extract_ignores_join_condition() {
    let t = tree(
        r#"{"from": [{"value": "orders", "name": "o"},
                     {"left join": {"value": "customers", "name": "c"},
                      "on": {"eq": ["o.cid", "c.id"]}}]}"#,
    );
    assert_eq!(table_names(&t), vec!["orders", "customers"]);
}

#[test]
fn test_extract_all_source_keys() {
    let t = tree(
        r#"{"from": [
            "a",
            {"inner join": "b"}, {"left join": "c"}, {"right join": "d"},
            {"full outer join": "e"}, {"left outer join": "f"}, {"right outer join": "g"}
        ]}"#,
    );
    assert_eq!(table_names(&t), vec!["a", "b", "c", "d", "e", "f", "g"]);
}

#[test]
fn test_extract_keys_outside_set_are_skipped() {
    let t = tree(r#"{"from": ["a", {"join": "b"}, {"cross join": "c"}], "intersect": [{"from": "d"}]}"#);
    assert_eq!(table_names(&t), vec!["a"]);
}

#[test]
fn test_extract_with_and_union() {
    let t = tree(
        r#"{"with": {"name": "x", "value": {"union_all": [{"from": "t1"}, {"from": "t2"}]}},
            "union": [{"from": "x"}, {"from": "t3"}]}"#,
    );
    assert_eq!(table_names(&t), vec!["t1", "t2", "x", "t3"]);
}

#[test]
fn test_extract_value_followed_everywhere() {
    // `value` is followed even outside a source clause.
    let t = tree(r#"{"value": {"value": ["a", 1]}, "name": "n"}"#);
    let found = extract_tables(&t);
    assert_eq!(
        found,
        vec![&Scalar::Text("a".to_string()), &Scalar::Int(1)]
    );
}

#[test]
fn test_extract_value_under_source_collects_non_tables() {
    // Scalars nested under `value` inside a source clause are harvested too,
    // even when they are not table names.
    let t = tree(r#"{"from": {"value": {"value": "orders", "on": "x"}, "name": "o"}, "where": "y"}"#);
    assert_eq!(table_names(&t), vec!["orders"]);

    let t = tree(r#"{"from": {"value": [{"value": "col_a"}, "orders"]}}"#);
    assert_eq!(table_names(&t), vec!["col_a", "orders"]);
}

#[test]
fn test_extract_scalar_root() {
    assert_eq!(table_names(&ParseTree::text("orders")), vec!["orders"]);
}

#[test]
fn test_extract_keeps_duplicates() {
    let t = tree(r#"{"from": ["orders", {"left join": "orders"}]}"#);
    assert_eq!(table_names(&t), vec!["orders", "orders"]);
    assert_eq!(unique_table_names(&t), vec!["orders"]);
}

#[test]
fn test_extract_empty_mapping() {
    assert!(extract_tables(&ParseTree::Mapping(vec![])).is_empty());
}

#[test]
fn test_is_followed_key() {
    assert!(is_followed_key("from"));
    assert!(is_followed_key("union_all"));
    assert!(is_followed_key("value"));
    assert!(!is_followed_key("select"));
    assert!(!is_followed_key("FROM"));
}

#[test]
fn test_sql_simple_select() {
    assert_eq!(parse_and_extract("SELECT * FROM users"), vec!["users"]);
}

#[test]
fn test_sql_join() {
    assert_eq!(
        parse_and_extract("SELECT * FROM orders o JOIN customers c ON o.customer_id = c.id"),
        vec!["orders", "customers"]
    );
}

#[test]
fn test_sql_schema_qualified() {
    assert_eq!(parse_and_extract("SELECT * FROM raw.orders"), vec!["raw.orders"]);
}

#[test]
fn test_sql_subquery() {
    assert_eq!(
        parse_and_extract(
            "SELECT * FROM (SELECT * FROM raw_data) AS sub JOIN other_table ON sub.id = other_table.id"
        ),
        vec!["raw_data", "other_table"]
    );
}

#[test]
fn test_sql_cte_names_are_kept() {
    // No name resolution: the CTE name shows up where it is selected from.
    assert_eq!(
        parse_and_extract(
            r#"
            WITH staged AS (
                SELECT * FROM raw_orders
            )
            SELECT * FROM staged
            LEFT JOIN customers ON staged.customer_id = customers.id
            "#
        ),
        vec!["raw_orders", "staged", "customers"]
    );
}

#[test]
fn test_sql_union() {
    assert_eq!(
        parse_and_extract("SELECT * FROM table1 UNION ALL SELECT * FROM table2 UNION SELECT * FROM table3"),
        vec!["table1", "table2", "table3"]
    );
}

#[test]
fn test_sql_multiple_joins() {
    assert_eq!(
        parse_and_extract(
            r#"
            SELECT o.*, c.name, p.product_name
            FROM orders o
            LEFT JOIN customers c ON o.customer_id = c.id
            LEFT JOIN products p ON o.product_id = p.id
            "#
        ),
        vec!["orders", "customers", "products"]
    );
}

#[test]
fn test_sql_where_subquery_not_followed() {
    assert_eq!(
        parse_and_extract("SELECT * FROM orders WHERE id IN (SELECT order_id FROM refunds)"),
        vec!["orders"]
    );
}
