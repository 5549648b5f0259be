//! Container helpers that work on one level only (no dotted paths)

use itertools::Itertools;
use serde_json::{Map, Value};

use super::access::index_of;
use super::path::wrap;

/// Entries of a mapping or sequence, sequences keyed by index.
/// Scalars and null have no entries.
pub fn entries(tree: &Value) -> Vec<(String, &Value)> {
    match tree {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

fn into_entries(tree: Value) -> Vec<(String, Value)> {
    match tree {
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn first(tree: &Value) -> Option<&Value> {
    match tree {
        Value::Object(map) => map.values().next(),
        Value::Array(items) => items.first(),
        _ => None,
    }
}

pub fn last(tree: &Value) -> Option<&Value> {
    match tree {
        Value::Object(map) => map.values().next_back(),
        Value::Array(items) => items.last(),
        _ => None,
    }
}

pub fn first_key(tree: &Value) -> Option<String> {
    match tree {
        Value::Object(map) => map.keys().next().cloned(),
        Value::Array(items) if !items.is_empty() => Some("0".to_owned()),
        _ => None,
    }
}

pub fn last_key(tree: &Value) -> Option<String> {
    match tree {
        Value::Object(map) => map.keys().next_back().cloned(),
        Value::Array(items) => items.len().checked_sub(1).map(|i| i.to_string()),
        _ => None,
    }
}

/// Split a container into its keys and its values.
pub fn divide(tree: &Value) -> (Vec<String>, Vec<Value>) {
    entries(tree)
        .into_iter()
        .map(|(k, v)| (k, v.clone()))
        .unzip()
}

/// Put `value` in front of `tree`.
///
/// Without a key, a sequence gets the value at index 0 and a mapping gets it
/// under `"0"` with its other integer keys renumbered. With a key, the result is
/// a mapping starting with `key`; an existing entry under `key` is dropped.
/// A scalar tree is wrapped first.
pub fn prepend(tree: Value, value: Value, key: Option<&str>) -> Value {
    match (tree, key) {
        (Value::Object(map), None) => {
            let mut out = Map::with_capacity(map.len() + 1);
            out.insert("0".to_owned(), value);
            let mut next = 1usize;
            for (k, v) in map {
                if index_of(&k).is_some() {
                    out.insert(next.to_string(), v);
                    next += 1;
                } else {
                    out.insert(k, v);
                }
            }
            Value::Object(out)
        }
        (other, None) => {
            let mut items = wrap(other);
            items.insert(0, value);
            Value::Array(items)
        }
        (tree, Some(key)) => {
            let mut out = Map::new();
            out.insert(key.to_owned(), value);
            for (k, v) in into_entries(tree) {
                if k != key {
                    out.insert(k, v);
                }
            }
            Value::Object(out)
        }
    }
}

/// Keep the entries for which `predicate(key, value)` holds.
///
/// Mappings keep their keys; sequences are compacted. Non-containers are
/// returned unchanged.
pub fn filter(tree: &Value, mut predicate: impl FnMut(&str, &Value) -> bool) -> Value {
    match tree {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(k, v)| predicate(k, v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .filter(|(i, v)| predicate(&i.to_string(), v))
                .map(|(_, v)| v.clone())
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Encode a container as an RFC 3986 query string.
///
/// Nested keys render as `a[b][0]` (brackets percent-encoded), booleans as
/// `1`/`0`. Nulls and empty containers produce no pair.
pub fn query(tree: &Value) -> String {
    entries(tree)
        .into_iter()
        .flat_map(|(key, value)| {
            let mut pairs = Vec::new();
            encode_pairs(&key, value, &mut pairs);
            pairs
        })
        .join("&")
}

fn encode_pairs(name: &str, value: &Value, pairs: &mut Vec<String>) {
    let scalar = match value {
        Value::Null => return,
        Value::Bool(b) => String::from(if *b { "1" } else { "0" }),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            for (key, child) in entries(value) {
                encode_pairs(&format!("{name}[{key}]"), child, pairs);
            }
            return;
        }
    };
    pairs.push(format!(
        "{}={}",
        urlencoding::encode(name),
        urlencoding::encode(&scalar)
    ));
}
