//! Keyed container capability
//!
//! Mappings and sequences both answer keyed reads, writes, existence checks and
//! removals. Sequences are keyed by canonical decimal indices (`"0"`, `"12"`).

use serde_json::{Map, Value};

/// A container that can be indexed by a single key segment.
pub trait Accessible {
    /// Check whether `key` is present (a present null counts).
    fn has_key(&self, key: &str) -> bool;

    /// Borrow the value stored under `key`.
    fn get_key(&self, key: &str) -> Option<&Value>;

    /// Mutably borrow the value stored under `key`.
    fn get_key_mut(&mut self, key: &str) -> Option<&mut Value>;

    /// Whether `put_key` can store under `key` without changing container kind.
    fn accepts_key(&self, key: &str) -> bool;

    /// Store `value` under `key`. Keys the container does not accept are ignored.
    fn put_key(&mut self, key: &str, value: Value);

    /// Remove the entry under `key`, returning it.
    fn remove_key(&mut self, key: &str) -> Option<Value>;

    /// Number of entries.
    fn size(&self) -> usize;
}

impl Accessible for Map<String, Value> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get_key(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.get_mut(key)
    }

    fn accepts_key(&self, _key: &str) -> bool {
        true
    }

    fn put_key(&mut self, key: &str, value: Value) {
        self.insert(key.to_owned(), value);
    }

    fn remove_key(&mut self, key: &str) -> Option<Value> {
        // keep sibling order intact
        self.shift_remove(key)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Accessible for Vec<Value> {
    fn has_key(&self, key: &str) -> bool {
        index_of(key).is_some_and(|i| i < self.len())
    }

    fn get_key(&self, key: &str) -> Option<&Value> {
        index_of(key).and_then(|i| self.get(i))
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        index_of(key).and_then(|i| self.get_mut(i))
    }

    /// In-bounds indices and the next free index.
    fn accepts_key(&self, key: &str) -> bool {
        index_of(key).is_some_and(|i| i <= self.len())
    }

    fn put_key(&mut self, key: &str, value: Value) {
        match index_of(key) {
            Some(i) if i < self.len() => self[i] = value,
            Some(i) if i == self.len() => self.push(value),
            _ => {}
        }
    }

    fn remove_key(&mut self, key: &str) -> Option<Value> {
        let i = index_of(key).filter(|i| *i < self.len())?;
        Some(self.remove(i))
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Parse a canonical sequence index. `"07"`, `"+1"` and `"-1"` are plain keys.
pub fn index_of(key: &str) -> Option<usize> {
    let canonical = key == "0" || (!key.starts_with('0') && key.bytes().all(|b| b.is_ascii_digit()));
    if !canonical || key.is_empty() {
        return None;
    }
    key.parse().ok()
}

/// View a value as a keyed container, if it is one.
pub fn as_accessible(value: &Value) -> Option<&dyn Accessible> {
    match value {
        Value::Object(map) => Some(map),
        Value::Array(items) => Some(items),
        _ => None,
    }
}

/// Mutable counterpart of [`as_accessible`].
pub fn as_accessible_mut(value: &mut Value) -> Option<&mut dyn Accessible> {
    match value {
        Value::Object(map) => Some(map),
        Value::Array(items) => Some(items),
        _ => None,
    }
}

/// True for mappings and sequences. Scalars and null are not accessible.
pub fn accessible(value: &Value) -> bool {
    as_accessible(value).is_some()
}

/// Literal key presence on `container`, without any dot splitting.
pub fn exists(container: &Value, key: &str) -> bool {
    as_accessible(container).is_some_and(|c| c.has_key(key))
}

/// Convert `value` into a mapping.
///
/// Sequences become mappings keyed by their stringified indices; scalars and
/// null become an empty mapping.
pub fn into_mapping(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn index_of_accepts_canonical_indices_only() {
        assert_eq!(index_of("0"), Some(0));
        assert_eq!(index_of("12"), Some(12));
        assert_eq!(index_of("07"), None);
        assert_eq!(index_of("-1"), None);
        assert_eq!(index_of("+1"), None);
        assert_eq!(index_of(""), None);
        assert_eq!(index_of("a"), None);
    }

    #[test]
    fn scalars_and_null_are_not_accessible() {
        assert!(!accessible(&json!(null)));
        assert!(!accessible(&json!(1)));
        assert!(!accessible(&json!("x")));
        assert!(accessible(&json!({})));
        assert!(accessible(&json!([])));
    }

    #[test]
    fn exists_distinguishes_null_from_absent() {
        let tree = json!({"a": null});
        assert!(exists(&tree, "a"));
        assert!(!exists(&tree, "b"));
        assert!(!exists(&json!(5), "a"));
    }

    #[test]
    fn sequence_put_key_replaces_or_appends() {
        let mut items = vec![json!(1), json!(2)];
        assert!(items.accepts_key("2"));
        assert!(!items.accepts_key("3"));
        items.put_key("0", json!(10));
        items.put_key("2", json!(3));
        items.put_key("9", json!(99));
        assert_eq!(items, vec![json!(10), json!(2), json!(3)]);
    }

    #[test]
    fn map_remove_key_keeps_sibling_order() {
        let mut tree = json!({"a": 1, "b": 2, "c": 3});
        let map = tree.as_object_mut().unwrap();
        map.remove_key("a");
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn into_mapping_keeps_sequence_elements() {
        let mut map = into_mapping(json!(["x", "y"]));
        map.insert("k".into(), json!(1));
        assert_eq!(Value::Object(map), json!({"0": "x", "1": "y", "k": 1}));

        assert!(into_mapping(json!(1)).is_empty());
        assert!(into_mapping(Value::Null).is_empty());
    }
}
