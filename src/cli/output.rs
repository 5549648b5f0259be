//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Data goes to stdout uncolored so it can be piped.

use colored::Colorize;
use serde_json::Value;
use termtree::Tree;

use crate::domain::entries;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Render a value for stdout: strings bare, everything else as pretty JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Build a display tree: containers become branches, scalars `key: value` leaves.
pub fn value_tree(label: String, value: &Value) -> Tree<String> {
    match value {
        Value::Object(_) | Value::Array(_) => {
            let leaves = entries(value)
                .into_iter()
                .map(|(key, child)| value_tree(key, child));
            Tree::new(label).with_leaves(leaves)
        }
        scalar => Tree::new(format!("{}: {}", label, scalar)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_string_when_rendering_then_unquoted() {
        assert_eq!(render_value(&json!("abc")), "abc");
        assert_eq!(render_value(&json!(1)), "1");
        assert_eq!(render_value(&json!(null)), "null");
    }

    #[test]
    fn given_nested_value_when_building_tree_then_lists_leaves() {
        let tree = value_tree("doc".into(), &json!({"a": {"b": 1}, "c": [true]}));
        let text = tree.to_string();
        assert!(text.starts_with("doc"));
        assert!(text.contains("b: 1"));
        assert!(text.contains("0: true"));
    }
}
