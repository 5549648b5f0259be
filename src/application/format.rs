//! Document formats and their codecs

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// On-disk document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Toml,
}

impl Format {
    /// Format implied by the file extension, if known.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    /// Parse document text. Blank text is an empty mapping.
    pub fn decode(self, content: &str) -> Result<Value, String> {
        if content.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        match self {
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str::<toml::Table>(content)
                .map(|table| toml_to_json(toml::Value::Table(table)))
                .map_err(|e| e.to_string()),
        }
    }

    /// Render a tree. TOML needs a mapping at the root and cannot hold nulls.
    pub fn encode(self, tree: &Value, pretty: bool) -> Result<String, String> {
        let mut out = match (self, pretty) {
            (Format::Json, true) => serde_json::to_string_pretty(tree).map_err(|e| e.to_string())?,
            (Format::Json, false) => serde_json::to_string(tree).map_err(|e| e.to_string())?,
            (Format::Toml, pretty) => {
                let toml::Value::Table(table) = json_to_toml(tree)? else {
                    return Err("TOML document root must be a table".to_string());
                };
                if pretty {
                    toml::to_string_pretty(&table).map_err(|e| e.to_string())?
                } else {
                    toml::to_string(&table).map_err(|e| e.to_string())?
                }
            }
        };
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            other => Err(format!("unknown format '{}'", other)),
        }
    }
}

/// TOML to tree. Datetimes become their RFC 3339 text, non-finite floats their
/// TOML spelling.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

/// Tree to TOML. Strings in datetime form are written back as datetimes.
fn json_to_toml(value: &Value) -> Result<toml::Value, String> {
    Ok(match value {
        Value::Null => return Err("TOML cannot represent null".to_string()),
        Value::Bool(b) => toml::Value::Boolean(*b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => toml::Value::Integer(i),
            (None, Some(f)) if n.is_f64() => toml::Value::Float(f),
            _ => return Err(format!("integer {} out of TOML range", n)),
        },
        Value::String(s) => s
            .parse::<toml::value::Datetime>()
            .map_or_else(|_| toml::Value::String(s.clone()), toml::Value::Datetime),
        Value::Array(items) => toml::Value::Array(
            items
                .iter()
                .map(json_to_toml)
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(map) => toml::Value::Table(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), json_to_toml(v)?)))
                .collect::<Result<_, String>>()?,
        ),
    })
}

/// Turn a command-line argument into a value.
///
/// A valid JSON literal (`42`, `true`, `{"a":1}`, `"quoted"`) is used as such;
/// anything else is taken as a plain string. `raw_string` skips JSON parsing.
pub fn parse_value(raw: &str, raw_string: bool) -> Value {
    if raw_string {
        return Value::String(raw.to_owned());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn given_extension_when_detecting_then_maps_known_formats() {
        assert_eq!(Format::from_path(&PathBuf::from("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(&PathBuf::from("a.TOML")), Some(Format::Toml));
        assert_eq!(Format::from_path(&PathBuf::from("a.yaml")), None);
        assert_eq!(Format::from_path(&PathBuf::from("noext")), None);
    }

    #[test]
    fn given_blank_content_when_decoding_then_empty_mapping() {
        assert_eq!(Format::Toml.decode("  \n").unwrap(), json!({}));
        assert_eq!(Format::Json.decode("").unwrap(), json!({}));
    }

    #[test]
    fn given_toml_when_decoding_then_nested_tables_become_mappings() {
        let tree = Format::Toml
            .decode("[server]\nport = 8080\nhosts = [\"a\", \"b\"]\n")
            .unwrap();
        assert_eq!(tree, json!({"server": {"port": 8080, "hosts": ["a", "b"]}}));
    }

    #[test]
    fn given_toml_datetimes_when_editing_then_written_back_as_datetimes() {
        let source = "name = \"app\"\nreleased = 1979-05-27\n\n[build]\nat = 1979-05-27T07:32:00Z\n";
        let mut tree = Format::Toml.decode(source).unwrap();
        assert_eq!(tree["released"], json!("1979-05-27"));
        assert_eq!(tree["build"]["at"], json!("1979-05-27T07:32:00Z"));

        tree["name"] = json!("renamed");
        let out = Format::Toml.encode(&tree, true).unwrap();

        assert!(out.contains("released = 1979-05-27\n"), "{out}");
        assert!(out.contains("at = 1979-05-27T07:32:00Z\n"), "{out}");
        assert!(!out.contains("$__toml"), "{out}");
        assert_eq!(Format::Toml.decode(&out).unwrap(), tree);
    }

    #[test]
    fn given_scalar_root_when_encoding_toml_then_fails() {
        assert!(Format::Toml.encode(&json!([1, 2]), true).is_err());
        assert!(Format::Toml.encode(&json!(1), false).is_err());
    }

    #[test]
    fn given_null_when_encoding_toml_then_fails() {
        assert!(Format::Toml.encode(&json!({"a": null}), true).is_err());
    }

    #[test]
    fn given_args_when_parsing_values_then_json_literals_win() {
        assert_eq!(parse_value("42", false), json!(42));
        assert_eq!(parse_value("true", false), json!(true));
        assert_eq!(parse_value("hello", false), json!("hello"));
        assert_eq!(parse_value("42", true), json!("42"));
        assert_eq!(parse_value("[1,2]", false), json!([1, 2]));
    }
}
