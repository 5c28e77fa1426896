use super::*;
use crate::parser::SqlParser;

fn lower(sql: &str) -> ParseTree {
    SqlParser::snowflake().parse_tree(sql).unwrap()
}

fn json(sql: &str) -> String {
    lower(sql).to_json().to_string()
}

#[test]
fn test_lower_simple_select() {
    assert_eq!(
        json("SELECT id FROM orders"),
        r#"{"select":{"value":"id"},"from":"orders"}"#
    );
}

#[test]
fn test_lower_wildcard_and_alias() {
    assert_eq!(
        json("SELECT *, amount AS total FROM raw.orders o"),
        r#"{"select":["*",{"value":"amount","name":"total"}],"from":{"value":"raw.orders","name":"o"}}"#
    );
}

#[test]
fn test_lower_join_with_condition() {
    assert_eq!(
        json("SELECT o.id FROM orders o LEFT JOIN customers c ON o.cid = c.id"),
        r#"{"select":{"value":"o.id"},"from":[{"value":"orders","name":"o"},{"left join":{"value":"customers","name":"c"},"on":"o.cid = c.id"}]}"#
    );
}

#[test]
fn test_lower_bare_join_as_inner_join() {
    let tree = lower("SELECT 1 FROM a JOIN b ON a.id = b.id");
    let from = tree.get("from").unwrap();
    match from {
        ParseTree::Sequence(items) => {
            assert_eq!(items[1].get("inner join"), Some(&ParseTree::text("b")));
        }
        other => panic!("Expected sequence, got {:?}", other),
    }
}

#[test]
fn test_lower_join_variants() {
    let cases = [
        ("INNER JOIN", "inner join"),
        ("LEFT OUTER JOIN", "left outer join"),
        ("RIGHT JOIN", "right join"),
        ("RIGHT OUTER JOIN", "right outer join"),
        ("FULL OUTER JOIN", "full outer join"),
    ];
    for (sql_join, key) in cases {
        let tree = lower(&format!("SELECT 1 FROM a {} b ON a.id = b.id", sql_join));
        let Some(ParseTree::Sequence(items)) = tree.get("from") else {
            panic!("Expected from sequence for {}", sql_join);
        };
        assert_eq!(
            items[1].get(key),
            Some(&ParseTree::text("b")),
            "join {}",
            sql_join
        );
    }
}

#[test]
fn test_lower_cross_join_has_no_condition() {
    let tree = lower("SELECT 1 FROM a CROSS JOIN b");
    let Some(ParseTree::Sequence(items)) = tree.get("from") else {
        panic!("Expected from sequence");
    };
    assert_eq!(
        items[1],
        ParseTree::mapping([("cross join", ParseTree::text("b"))])
    );
}

#[test]
fn test_lower_comma_separated_sources() {
    assert_eq!(
        json("SELECT 1 FROM a, b"),
        r#"{"select":{"value":"1"},"from":["a","b"]}"#
    );
}

#[test]
fn test_lower_where_and_order_by() {
    assert_eq!(
        json("SELECT id FROM t WHERE id > 1 ORDER BY id DESC"),
        r#"{"select":{"value":"id"},"from":"t","where":"id > 1","orderby":{"value":"id","sort":"desc"}}"#
    );
}

#[test]
fn test_lower_cte() {
    assert_eq!(
        json("WITH staged AS (SELECT * FROM raw_orders) SELECT * FROM staged"),
        r#"{"with":{"name":"staged","value":{"select":"*","from":"raw_orders"}},"select":"*","from":"staged"}"#
    );
}

#[test]
fn test_lower_multiple_ctes() {
    let tree = lower("WITH a AS (SELECT 1), b AS (SELECT 2) SELECT * FROM a, b");
    match tree.get("with") {
        Some(ParseTree::Sequence(ctes)) => {
            assert_eq!(ctes.len(), 2);
            assert_eq!(ctes[1].get("name"), Some(&ParseTree::text("b")));
        }
        other => panic!("Expected CTE sequence, got {:?}", other),
    }
}

#[test]
fn test_lower_union_all_flattens_chain() {
    assert_eq!(
        json("SELECT a FROM t1 UNION ALL SELECT a FROM t2 UNION ALL SELECT a FROM t3"),
        r#"{"union_all":[{"select":{"value":"a"},"from":"t1"},{"select":{"value":"a"},"from":"t2"},{"select":{"value":"a"},"from":"t3"}]}"#
    );
}

#[test]
fn test_lower_mixed_set_operations_nest() {
    let tree = lower("SELECT a FROM t1 UNION SELECT a FROM t2 UNION ALL SELECT a FROM t3");
    let Some(ParseTree::Sequence(branches)) = tree.get("union_all") else {
        panic!("Expected union_all at the top, got {:?}", tree);
    };
    assert_eq!(branches.len(), 2);
    assert!(branches[0].get("union").is_some());
}

#[test]
fn test_lower_derived_table() {
    assert_eq!(
        json("SELECT * FROM (SELECT id FROM raw_data) AS sub"),
        r#"{"select":"*","from":{"value":{"select":{"value":"id"},"from":"raw_data"},"name":"sub"}}"#
    );
}

#[test]
fn test_lower_non_query_statement() {
    let statement = SqlParser::snowflake()
        .parse_single("INSERT INTO t VALUES (1)")
        .unwrap();
    assert!(matches!(
        lower_statement(&statement),
        Err(SqlError::UnsupportedStatement(_))
    ));
}
