//! Generic SQL parse tree
//!
//! A parse tree is the JSON-like shape many SQL parsers emit: nested objects
//! keyed by clause name (`select`, `from`, `inner join`, ...), lists, and
//! scalar leaves. The table extractor only ever reads it.

use crate::error::SqlResult;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// A parse tree node
#[derive(Debug, Clone, PartialEq)]
pub enum ParseTree {
    /// String-keyed children, in the order the parser emitted them
    Mapping(Vec<(String, ParseTree)>),
    /// Ordered children
    Sequence(Vec<ParseTree>),
    /// Leaf value
    Scalar(Scalar),
}

/// A parse tree leaf
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    /// Integer above `i64::MAX`
    UInt(u64),
    Float(f64),
    /// Identifier, keyword, or string literal
    Text(String),
}

impl ParseTree {
    /// Text leaf
    pub fn text(value: impl Into<String>) -> Self {
        ParseTree::Scalar(Scalar::Text(value.into()))
    }

    /// Mapping from `(key, child)` pairs, preserving order
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, ParseTree)>) -> Self {
        ParseTree::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Sequence of children
    pub fn sequence(items: impl IntoIterator<Item = ParseTree>) -> Self {
        ParseTree::Sequence(items.into_iter().collect())
    }

    /// First child stored under `key`, if this is a mapping
    pub fn get(&self, key: &str) -> Option<&ParseTree> {
        match self {
            ParseTree::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// The leaf value, if this is a scalar
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            ParseTree::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Read a tree from JSON text.
    ///
    /// Object key order is kept as written.
    pub fn from_json_str(json: &str) -> SqlResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(Self::from(value))
    }

    /// Render the tree as a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ParseTree::Mapping(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            ParseTree::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(ParseTree::to_json).collect())
            }
            ParseTree::Scalar(s) => s.to_json(),
        }
    }
}

impl Scalar {
    fn to_json(&self) -> serde_json::Value {
        match self {
            Scalar::Null => serde_json::Value::Null,
            Scalar::Bool(b) => serde_json::Value::Bool(*b),
            Scalar::Int(i) => serde_json::Value::from(*i),
            Scalar::UInt(u) => serde_json::Value::from(*u),
            // Non-finite floats have no JSON form.
            Scalar::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Scalar::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<serde_json::Value> for ParseTree {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => {
                ParseTree::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            serde_json::Value::Array(items) => {
                ParseTree::Sequence(items.into_iter().map(ParseTree::from).collect())
            }
            serde_json::Value::Null => ParseTree::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => ParseTree::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => ParseTree::Scalar(match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Scalar::Int(i),
                (None, Some(u)) => Scalar::UInt(u),
                (None, None) => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            serde_json::Value::String(s) => ParseTree::Scalar(Scalar::Text(s)),
        }
    }
}

impl From<Scalar> for ParseTree {
    fn from(value: Scalar) -> Self {
        ParseTree::Scalar(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::UInt(u) => write!(f, "{}", u),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for ParseTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParseTree::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            ParseTree::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ParseTree::Scalar(s) => s.serialize(serializer),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::UInt(u) => serializer.serialize_u64(*u),
            Scalar::Float(x) => serializer.serialize_f64(*x),
            Scalar::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;
