//! Integration tests for one-level container helpers.

use rstest::rstest;
use serde_json::{json, Value};

use dotpath::domain::{divide, entries, filter, first, first_key, last, last_key, prepend, query};
use dotpath::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// first / last
// ============================================================

#[test]
fn given_sequence_when_first_and_last_then_returns_ends() {
    let tree = json!(["a", "b", "c"]);
    assert_eq!(first(&tree), Some(&json!("a")));
    assert_eq!(last(&tree), Some(&json!("c")));
    assert_eq!(first_key(&tree).as_deref(), Some("0"));
    assert_eq!(last_key(&tree).as_deref(), Some("2"));
}

#[rstest]
#[case(json!({}))]
#[case(json!(null))]
#[case(json!("text"))]
fn given_empty_or_scalar_when_first_and_last_then_none(#[case] tree: Value) {
    assert_eq!(first(&tree), None);
    assert_eq!(last(&tree), None);
    assert_eq!(first_key(&tree), None);
    assert_eq!(last_key(&tree), None);
}

// ============================================================
// entries / divide
// ============================================================

#[test]
fn given_mapping_when_divide_then_keys_and_values_in_order() {
    let tree = json!({"host": "localhost", "port": 5432, "tags": ["a"]});
    let (keys, values) = divide(&tree);
    assert_eq!(keys, vec!["host", "port", "tags"]);
    assert_eq!(values, vec![json!("localhost"), json!(5432), json!(["a"])]);
}

#[test]
fn given_sequence_when_entries_then_keyed_by_index() {
    let tree = json!([true, null]);
    let keys: Vec<String> = entries(&tree).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["0", "1"]);
}

#[test]
fn given_scalar_when_divide_then_empty() {
    assert_eq!(divide(&json!(1)), (vec![], vec![]));
}

// ============================================================
// prepend
// ============================================================

#[test]
fn given_sequence_when_prepend_without_key_then_value_first() {
    let out = prepend(json!([1, 2]), json!(0), None);
    assert_eq!(out, json!([0, 1, 2]));
}

#[test]
fn given_mapping_when_prepend_with_key_then_pair_first_and_replaces_existing() {
    let out = prepend(json!({"a": 1, "b": 2}), json!(9), Some("b"));
    let (keys, values) = divide(&out);
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(values, vec![json!(9), json!(1)]);
}

#[test]
fn given_sequence_when_prepend_with_key_then_becomes_mapping() {
    let out = prepend(json!(["x"]), json!("y"), Some("name"));
    assert_eq!(first_key(&out).as_deref(), Some("name"));
    assert_eq!(out, json!({"name": "y", "0": "x"}));
}

#[rstest]
#[case(json!(null), json!(["v"]))]
#[case(json!("s"), json!(["v", "s"]))]
fn given_scalar_when_prepend_then_wrapped(#[case] tree: Value, #[case] expected: Value) {
    assert_eq!(prepend(tree, json!("v"), None), expected);
}

// ============================================================
// filter
// ============================================================

#[test]
fn given_mapping_when_filter_then_keys_kept() {
    let tree = json!({"a": 1, "b": null, "c": 3});
    let out = filter(&tree, |_, v| !v.is_null());
    assert_eq!(out, json!({"a": 1, "c": 3}));
}

#[test]
fn given_sequence_when_filter_then_compacted() {
    let tree = json!([1, 2, 3, 4]);
    let out = filter(&tree, |k, _| k != "1");
    assert_eq!(out, json!([1, 3, 4]));
}

#[test]
fn given_scalar_when_filter_then_unchanged() {
    assert_eq!(filter(&json!(5), |_, _| false), json!(5));
}

// ============================================================
// query
// ============================================================

#[rstest]
#[case(json!({"a": 1, "b": "x"}), "a=1&b=x")]
#[case(json!({"on": true, "off": false}), "on=1&off=0")]
#[case(json!({"skip": null, "none": [], "k": "v"}), "k=v")]
#[case(json!({"q": "a&b=c"}), "q=a%26b%3Dc")]
#[case(json!(["x", "y"]), "0=x&1=y")]
#[case(json!({}), "")]
#[case(json!(3), "")]
fn given_tree_when_query_then_encodes_pairs(#[case] tree: Value, #[case] expected: &str) {
    assert_eq!(query(&tree), expected);
}

#[test]
fn given_nested_tree_when_query_then_brackets_encoded() {
    let tree = json!({"user": {"name": "ann", "roles": ["a", "b"]}});
    assert_eq!(
        query(&tree),
        "user%5Bname%5D=ann&user%5Broles%5D%5B0%5D=a&user%5Broles%5D%5B1%5D=b"
    );
}
