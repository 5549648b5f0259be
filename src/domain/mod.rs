//! Domain layer: dot-notation operations on nested trees
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).
//! Trees are `serde_json::Value`s owned by the caller.

pub mod access;
pub mod arr;
pub mod dot;
pub mod fallback;
pub mod path;

pub use access::{accessible, exists, Accessible};
pub use arr::{divide, entries, filter, first, first_key, last, last_key, prepend, query};
pub use dot::{add, forget, get, has, lookup, pull, set};
pub use fallback::Fallback;
pub use path::{wrap, KeyPath, Keys, SEPARATOR};
