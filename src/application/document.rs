//! A tree loaded from a file

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::application::Format;

/// A document on disk together with its decoded tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Where the document is read from and written back to
    pub path: PathBuf,
    /// Codec used for both directions
    pub format: Format,
    /// Decoded content
    pub tree: Value,
}

impl Document {
    /// A new, empty document (an empty mapping).
    pub fn empty(path: &Path, format: Format) -> Self {
        Self {
            path: path.to_path_buf(),
            format,
            tree: Value::Object(Default::default()),
        }
    }

    /// Backup location used before overwriting: `<path>.bak`.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }
}
