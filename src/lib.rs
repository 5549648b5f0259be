//! Dot-notation access to nested JSON and TOML documents.
//!
//! The core lives in [`domain`]: `get`, `has`, `set`, `add`, `forget` and `pull`
//! operate on a caller-owned `serde_json::Value` using keys like `"db.replicas.0"`.
//! A literal top-level key is always tried before the key is split on dots.
//!
//! ```
//! use dotpath::{forget, get, has, set};
//! use serde_json::json;
//!
//! let mut tree = json!({"db": {"host": "localhost"}});
//! set(&mut tree, "db.port", json!(5432));
//! assert!(has(&tree, ["db.host", "db.port"]));
//!
//! forget(&mut tree, "db.host");
//! assert_eq!(tree, json!({"db": {"port": 5432}}));
//! assert_eq!(get(&tree, "db.host", json!("none")), json!("none"));
//! ```
//!
//! The remaining layers load documents from disk ([`application`]), wire
//! services ([`infrastructure`]) and drive the `dotpath` binary ([`cli`]).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{
    accessible, add, exists, forget, get, has, lookup, pull, set, wrap, Fallback, KeyPath, Keys,
};
