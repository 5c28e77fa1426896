//! Table reference extraction from a parse tree
//!
//! Walks the tree depth-first and harvests every scalar reachable through a
//! clause that introduces a row source. This is a structural harvest, not a
//! name resolver: anything a parser nests under `value` inside a source
//! clause is collected too, so the output can contain column references or
//! literals alongside table names.

use crate::tree::{ParseTree, Scalar};
use std::collections::HashSet;

/// Mapping keys whose subtree produces rows.
///
/// `union_all` is how the tree spells `UNION ALL`.
pub const SOURCE_REFERENCE_KEYS: &[&str] = &[
    "from",
    "inner join",
    "left join",
    "right join",
    "full outer join",
    "left outer join",
    "right outer join",
    "with",
    "union_all",
    "union",
];

/// Key a parser uses to wrap aliased or qualified references.
pub const VALUE_KEY: &str = "value";

/// Whether the walker descends into a mapping entry with this key
pub fn is_followed_key(key: &str) -> bool {
    key == VALUE_KEY || SOURCE_REFERENCE_KEYS.contains(&key)
}

/// Collect every scalar under a source-reference clause, in traversal order.
///
/// Duplicates are kept. The root itself is walked with the same rules, so a
/// bare scalar root yields itself.
pub fn extract_tables(tree: &ParseTree) -> Vec<&Scalar> {
    let mut found = Vec::new();
    collect(tree, &mut found);
    found
}

fn collect<'a>(node: &'a ParseTree, found: &mut Vec<&'a Scalar>) {
    match node {
        ParseTree::Mapping(entries) => {
            for (key, child) in entries {
                if is_followed_key(key) {
                    collect(child, found);
                }
            }
        }
        ParseTree::Sequence(items) => {
            for item in items {
                collect(item, found);
            }
        }
        ParseTree::Scalar(scalar) => found.push(scalar),
    }
}

/// [`extract_tables`] rendered as strings
pub fn table_names(tree: &ParseTree) -> Vec<String> {
    extract_tables(tree)
        .into_iter()
        .map(|s| s.to_string())
        .collect()
}

/// [`table_names`] with repeats removed, keeping first-seen order
pub fn unique_table_names(tree: &ParseTree) -> Vec<String> {
    let mut seen = HashSet::new();
    table_names(tree)
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod tests;
