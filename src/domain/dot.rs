//! Dot-notation reads and writes on nested trees
//!
//! Every operation first tries the whole key as a literal top-level key, so a
//! key stored as `"a.b"` wins over the nested path `a` → `b`. Misses are
//! reported through `None`, `false` or the caller's default; nothing here fails.

use std::cmp::Reverse;

use serde_json::Value;

use super::access::{
    accessible, as_accessible, as_accessible_mut, index_of, into_mapping, Accessible,
};
use super::fallback::Fallback;
use super::path::{segments, KeyPath, Keys, SEPARATOR};

/// Resolve `path` in `tree` without cloning.
///
/// Returns `None` if `tree` is not a container or the path does not resolve.
/// A key that is present with a null value resolves to `Some(&Value::Null)`.
pub fn lookup<'a>(tree: &'a Value, path: impl Into<KeyPath>) -> Option<&'a Value> {
    resolve(tree, &path.into())
}

/// Get the value at `path`, or the resolved `default` if it is missing.
///
/// A lazy default is only run on a miss.
///
/// # Examples
/// ```
/// use dotpath::domain::{get, Fallback};
/// use serde_json::json;
///
/// let tree = json!({"db": {"port": 5432}, "a.b": 1});
/// assert_eq!(get(&tree, "db.port", json!(null)), json!(5432));
/// assert_eq!(get(&tree, "a.b", json!(null)), json!(1));
/// assert_eq!(get(&tree, "db.host", Fallback::lazy(|| json!("localhost"))), json!("localhost"));
/// ```
pub fn get<'f>(tree: &Value, path: impl Into<KeyPath>, default: impl Into<Fallback<'f>>) -> Value {
    match lookup(tree, path) {
        Some(value) => value.clone(),
        None => default.into().resolve(),
    }
}

/// Check that every key in `keys` resolves.
///
/// False for an empty or non-container tree and for an empty key set.
pub fn has(tree: &Value, keys: impl Into<Keys>) -> bool {
    let keys = keys.into().into_vec();
    let Some(container) = as_accessible(tree) else {
        return false;
    };
    if container.size() == 0 || keys.is_empty() {
        return false;
    }
    keys.iter().all(|key| container.has_key(key) || walk(tree, key).is_some())
}

/// Set `value` at `path`, creating intermediate mappings.
///
/// An intermediate that is missing or not a container is overwritten with an
/// empty mapping, discarding what was there. A sequence keeps its elements: it
/// is indexed when the segment is an index, and turned into a mapping keyed by
/// index otherwise. `KeyPath::Root` replaces the whole tree.
pub fn set(tree: &mut Value, path: impl Into<KeyPath>, value: Value) -> &mut Value {
    let key = match path.into() {
        KeyPath::Root => {
            *tree = value;
            return tree;
        }
        KeyPath::Key(key) => key,
    };

    let parts: Vec<&str> = segments(&key).collect();
    if let Some((last, parents)) = parts.split_last() {
        let mut node = &mut *tree;
        for segment in parents {
            node = descend(node, segment);
        }
        *slot(node, last) = value;
    }
    tree
}

/// Set `value` at `path` only if it currently resolves to nothing or to null.
pub fn add(tree: &mut Value, path: impl Into<KeyPath>, value: Value) -> &mut Value {
    let path = path.into();
    if resolve(tree, &path).map_or(true, Value::is_null) {
        set(tree, path, value)
    } else {
        tree
    }
}

/// Remove one or many keys.
///
/// Each key starts again from the root. A literal top-level key is removed as
/// is; otherwise the walk follows existing containers only, and a key whose
/// parent cannot be reached is skipped. All keys are resolved against the tree
/// as it was before the call, so removing `l.0` does not change what `l.1`
/// names.
pub fn forget(tree: &mut Value, keys: impl Into<Keys>) {
    let mut targets: Vec<Vec<String>> = keys
        .into()
        .into_vec()
        .iter()
        .filter_map(|key| locate(tree, key))
        .collect();

    // higher indices first: a removal only shifts the elements after it
    targets.sort_by_cached_key(|target| Reverse(removal_order(target)));
    targets.dedup();

    for target in &targets {
        remove_at(tree, target);
    }
}

/// Get the value at `key` and remove it. The returned value is the one read
/// before removal.
pub fn pull<'f>(tree: &mut Value, key: &str, default: impl Into<Fallback<'f>>) -> Value {
    let value = get(tree, key, default);
    forget(tree, key);
    value
}

fn resolve<'a>(tree: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    let container = as_accessible(tree)?;
    let key = match path {
        KeyPath::Root => return Some(tree),
        KeyPath::Key(key) => key,
    };
    if let Some(value) = container.get_key(key) {
        return Some(value);
    }
    if !key.contains(SEPARATOR) {
        return None;
    }
    walk(tree, key)
}

/// Descend segment by segment, stopping at the first miss.
fn walk<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    segments(key).try_fold(tree, |node, segment| as_accessible(node)?.get_key(segment))
}

/// Segments leading to an existing entry for `key`, or `None` if it does not resolve.
fn locate(tree: &Value, key: &str) -> Option<Vec<String>> {
    let root = as_accessible(tree)?;
    if root.has_key(key) {
        return Some(vec![key.to_owned()]);
    }
    let parts: Vec<&str> = segments(key).collect();
    let (last, parents) = parts.split_last()?;
    let parent = parents
        .iter()
        .try_fold(tree, |node, segment| as_accessible(node)?.get_key(segment))?;
    as_accessible(parent)?
        .has_key(last)
        .then(|| parts.iter().map(|part| (*part).to_owned()).collect())
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Step {
    Index(usize),
    Name(String),
}

fn removal_order(target: &[String]) -> Vec<Step> {
    target
        .iter()
        .map(|segment| match index_of(segment) {
            Some(i) => Step::Index(i),
            None => Step::Name(segment.clone()),
        })
        .collect()
}

fn remove_at(tree: &mut Value, target: &[String]) {
    let Some((last, parents)) = target.split_last() else {
        return;
    };
    let parent = parents
        .iter()
        .try_fold(tree, |node, segment| as_accessible_mut(node)?.get_key_mut(segment));
    if let Some(container) = parent.and_then(as_accessible_mut) {
        container.remove_key(last);
    }
}

/// Child under `segment`, made into a container if it is not one.
fn descend<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    let child = slot(node, segment);
    if !accessible(child) {
        *child = Value::Object(Default::default());
    }
    child
}

/// Mutable slot for `segment` in `node`, inserting null if it is absent.
///
/// A sequence only takes in-bounds indices and the next free index; for any
/// other key it is turned into a mapping first, as is a non-container.
fn slot<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    let in_sequence = matches!(&*node, Value::Array(items) if items.accepts_key(segment));
    if !in_sequence && !node.is_object() {
        *node = Value::Object(into_mapping(node.take()));
    }
    match node {
        Value::Array(items) => {
            let i = index_of(segment).unwrap_or(items.len());
            if i == items.len() {
                items.push(Value::Null);
            }
            &mut items[i]
        }
        Value::Object(map) => map.entry(segment).or_insert(Value::Null),
        _ => unreachable!("non-container was converted to a mapping above"),
    }
}
