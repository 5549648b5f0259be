//! Key paths and key sets
//!
//! A dotted key like `server.ports.0` names one level of descent per segment.
//! The whole tree is addressed by the explicit [`KeyPath::Root`] sentinel, never
//! by an empty or missing key.

use std::fmt;

use serde_json::Value;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Target of a `get`/`set`: the whole tree or a dotted key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPath {
    /// The whole tree.
    Root,
    /// A dotted key. Also tried as a literal top-level key first.
    Key(String),
}

impl KeyPath {
    /// The dotted key, or `None` for the root.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            KeyPath::Root => None,
            KeyPath::Key(key) => Some(key),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, KeyPath::Root)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPath::Root => f.write_str("<root>"),
            KeyPath::Key(key) => f.write_str(key),
        }
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        KeyPath::Key(key.to_owned())
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        KeyPath::Key(key)
    }
}

impl From<&String> for KeyPath {
    fn from(key: &String) -> Self {
        KeyPath::Key(key.clone())
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

/// Integer keys are addressed by their decimal form.
impl From<usize> for KeyPath {
    fn from(index: usize) -> Self {
        KeyPath::Key(index.to_string())
    }
}

/// `None` is the whole tree.
impl From<Option<&str>> for KeyPath {
    fn from(key: Option<&str>) -> Self {
        key.map_or(KeyPath::Root, KeyPath::from)
    }
}

/// Split a dotted key into its segments. `"a..b"` yields an empty middle segment.
pub fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split(SEPARATOR)
}

/// One key or several, as accepted by `has` and `forget`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keys {
    One(String),
    Many(Vec<String>),
}

impl Keys {
    /// Normalize into a list: a single key becomes a one-element list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Keys::One(key) => vec![key],
            Keys::Many(keys) => keys,
        }
    }
}

impl From<&str> for Keys {
    fn from(key: &str) -> Self {
        Keys::One(key.to_owned())
    }
}

impl From<String> for Keys {
    fn from(key: String) -> Self {
        Keys::One(key)
    }
}

impl From<&String> for Keys {
    fn from(key: &String) -> Self {
        Keys::One(key.clone())
    }
}

impl From<Vec<String>> for Keys {
    fn from(keys: Vec<String>) -> Self {
        Keys::Many(keys)
    }
}

impl From<Vec<&str>> for Keys {
    fn from(keys: Vec<&str>) -> Self {
        Keys::Many(keys.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Keys {
    fn from(keys: &[&str]) -> Self {
        Keys::Many(keys.iter().map(|k| (*k).to_owned()).collect())
    }
}

impl From<&[String]> for Keys {
    fn from(keys: &[String]) -> Self {
        Keys::Many(keys.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Keys {
    fn from(keys: [&str; N]) -> Self {
        Keys::Many(keys.iter().map(|k| (*k).to_owned()).collect())
    }
}

/// `None` is the empty key set.
impl From<Option<&str>> for Keys {
    fn from(key: Option<&str>) -> Self {
        key.map_or_else(|| Keys::Many(Vec::new()), Keys::from)
    }
}

/// Wrap a value in a sequence: null is empty, a sequence is unchanged,
/// anything else becomes a one-element sequence.
pub fn wrap(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}
