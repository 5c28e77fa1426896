//! Lowering of sqlparser ASTs into [`ParseTree`]s
//!
//! The tree uses the clause-keyed vocabulary of JSON SQL parsers:
//!
//! ```text
//! SELECT o.id FROM orders o LEFT JOIN customers c ON o.cid = c.id
//!
//! {"select": [{"value": "o.id"}],
//!  "from": [{"value": "orders", "name": "o"},
//!           {"left join": {"value": "customers", "name": "c"}, "on": "o.cid = c.id"}]}
//! ```
//!
//! Only the source-producing structure (CTEs, FROM, joins, set operations)
//! is lowered node by node. Expressions are kept as their SQL text.

use crate::error::{SqlError, SqlResult};
use crate::tree::ParseTree;
use sqlparser::ast::{
    Join, JoinConstraint, JoinOperator, OrderByKind, Query, Select, SelectItem, SetExpr,
    SetOperator, SetQuantifier, Statement, TableAlias, TableFactor, TableWithJoins,
};

type Entries = Vec<(String, ParseTree)>;

/// Lower one parsed statement. Only queries are supported.
pub fn lower_statement(statement: &Statement) -> SqlResult<ParseTree> {
    match statement {
        Statement::Query(query) => Ok(lower_query(query)),
        other => Err(SqlError::UnsupportedStatement(statement_kind(other))),
    }
}

/// Leading keywords of a statement, e.g. `CREATE VIEW`
fn statement_kind(statement: &Statement) -> String {
    statement
        .to_string()
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Lower a query, including its CTEs and ORDER BY
pub fn lower_query(query: &Query) -> ParseTree {
    ParseTree::Mapping(query_entries(query))
}

fn query_entries(query: &Query) -> Entries {
    let mut entries = Entries::new();

    if let Some(with) = &query.with {
        let ctes: Vec<ParseTree> = with
            .cte_tables
            .iter()
            .map(|cte| {
                ParseTree::mapping([
                    ("name", ParseTree::text(cte.alias.name.value.clone())),
                    ("value", lower_query(&cte.query)),
                ])
            })
            .collect();
        entries.push(("with".to_string(), one_or_many(ctes)));
    }

    entries.extend(set_expr_entries(&query.body));

    if let Some(order_by) = &query.order_by {
        if let OrderByKind::Expressions(exprs) = &order_by.kind {
            if !exprs.is_empty() {
                let keys = exprs
                    .iter()
                    .map(|obe| {
                        let mut key = vec![("value", ParseTree::text(obe.expr.to_string()))];
                        if obe.options.asc == Some(false) {
                            key.push(("sort", ParseTree::text("desc")));
                        }
                        ParseTree::mapping(key)
                    })
                    .collect();
                entries.push(("orderby".to_string(), one_or_many(keys)));
            }
        }
    }

    entries
}

fn set_expr_entries(set_expr: &SetExpr) -> Entries {
    match set_expr {
        SetExpr::Select(select) => select_entries(select),
        SetExpr::Query(query) => query_entries(query),
        SetExpr::SetOperation {
            op, set_quantifier, ..
        } => {
            let key = set_operation_key(op, set_quantifier);
            let mut operands = Vec::new();
            flatten_set_operation(set_expr, key, &mut operands);
            let branches = operands
                .into_iter()
                .map(|operand| ParseTree::Mapping(set_expr_entries(operand)))
                .collect();
            vec![(key.to_string(), ParseTree::Sequence(branches))]
        }
        SetExpr::Values(values) => vec![("values".to_string(), ParseTree::text(values.to_string()))],
        other => {
            log::warn!("Unrecognized query body, keeping it as text: {}", other);
            vec![("query".to_string(), ParseTree::text(other.to_string()))]
        }
    }
}

/// Key for a set operation; `UNION ALL` is spelled `union_all`
fn set_operation_key(op: &SetOperator, quantifier: &SetQuantifier) -> &'static str {
    match (op, quantifier) {
        (SetOperator::Union, SetQuantifier::All) => "union_all",
        (SetOperator::Union, _) => "union",
        (SetOperator::Intersect, _) => "intersect",
        _ => "except",
    }
}

/// Collect the operands of a chain of identical set operations, so that
/// `a UNION b UNION c` becomes one three-element list.
fn flatten_set_operation<'a>(set_expr: &'a SetExpr, key: &str, out: &mut Vec<&'a SetExpr>) {
    if let SetExpr::SetOperation {
        op,
        set_quantifier,
        left,
        right,
        ..
    } = set_expr
    {
        if set_operation_key(op, set_quantifier) == key {
            flatten_set_operation(left, key, out);
            flatten_set_operation(right, key, out);
            return;
        }
    }
    out.push(set_expr);
}

fn select_entries(select: &Select) -> Entries {
    let mut entries = Entries::new();

    let items = select.projection.iter().map(lower_select_item).collect();
    entries.push(("select".to_string(), one_or_many(items)));

    if !select.from.is_empty() {
        entries.push(("from".to_string(), lower_from(&select.from)));
    }
    if let Some(selection) = &select.selection {
        entries.push(("where".to_string(), ParseTree::text(selection.to_string())));
    }
    if let Some(having) = &select.having {
        entries.push(("having".to_string(), ParseTree::text(having.to_string())));
    }

    entries
}

fn lower_select_item(item: &SelectItem) -> ParseTree {
    match item {
        SelectItem::UnnamedExpr(expr) => {
            ParseTree::mapping([("value", ParseTree::text(expr.to_string()))])
        }
        SelectItem::ExprWithAlias { expr, alias } => ParseTree::mapping([
            ("value", ParseTree::text(expr.to_string())),
            ("name", ParseTree::text(alias.value.clone())),
        ]),
        wildcard => ParseTree::text(wildcard.to_string()),
    }
}

fn lower_from(from: &[TableWithJoins]) -> ParseTree {
    let items = from.iter().flat_map(lower_table_with_joins).collect();
    one_or_many(items)
}

/// The relation followed by one mapping per join
fn lower_table_with_joins(table_with_joins: &TableWithJoins) -> Vec<ParseTree> {
    let mut items = vec![lower_table_factor(&table_with_joins.relation)];
    items.extend(table_with_joins.joins.iter().map(lower_join));
    items
}

fn lower_table_factor(factor: &TableFactor) -> ParseTree {
    match factor {
        TableFactor::Table { name, alias, .. } => {
            aliased(ParseTree::text(name.to_string()), alias.as_ref())
        }
        TableFactor::Derived {
            subquery, alias, ..
        } => aliased(lower_query(subquery), alias.as_ref()),
        TableFactor::NestedJoin {
            table_with_joins,
            alias,
            ..
        } => aliased(
            ParseTree::Sequence(lower_table_with_joins(table_with_joins)),
            alias.as_ref(),
        ),
        other => {
            log::warn!("Unrecognized table factor, keeping it as text: {}", other);
            ParseTree::text(other.to_string())
        }
    }
}

/// Wrap an aliased source as `{"value": .., "name": alias}`
fn aliased(value: ParseTree, alias: Option<&TableAlias>) -> ParseTree {
    match alias {
        Some(alias) => ParseTree::mapping([
            ("value", value),
            ("name", ParseTree::text(alias.name.value.clone())),
        ]),
        None => value,
    }
}

fn lower_join(join: &Join) -> ParseTree {
    let (key, constraint) = match &join.join_operator {
        // A bare JOIN is an inner join.
        JoinOperator::Join(c) | JoinOperator::Inner(c) => ("inner join", Some(c)),
        JoinOperator::Left(c) => ("left join", Some(c)),
        JoinOperator::LeftOuter(c) => ("left outer join", Some(c)),
        JoinOperator::Right(c) => ("right join", Some(c)),
        JoinOperator::RightOuter(c) => ("right outer join", Some(c)),
        JoinOperator::FullOuter(c) => ("full outer join", Some(c)),
        JoinOperator::CrossJoin(_) => ("cross join", None),
        other => {
            log::warn!("Unrecognized join operator {:?}, keeping it as `join`", other);
            ("join", None)
        }
    };

    let mut entries = vec![(key.to_string(), lower_table_factor(&join.relation))];
    match constraint {
        Some(JoinConstraint::On(expr)) => {
            entries.push(("on".to_string(), ParseTree::text(expr.to_string())));
        }
        Some(JoinConstraint::Using(columns)) => {
            let columns = columns.iter().map(|c| ParseTree::text(c.to_string()));
            entries.push(("using".to_string(), ParseTree::sequence(columns)));
        }
        _ => {}
    }
    ParseTree::Mapping(entries)
}

/// A single item stays bare; several become a sequence
fn one_or_many(mut items: Vec<ParseTree>) -> ParseTree {
    if items.len() == 1 {
        items.remove(0)
    } else {
        ParseTree::Sequence(items)
    }
}

#[cfg(test)]
#[path = "lowering_test.rs"]
mod tests;
