//! Document service
//!
//! Loads a JSON or TOML document, applies one dot-notation operation to its
//! tree, and writes the document back when the tree changed.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, Document, Format, IoResultExt};
use crate::config::Settings;
use crate::domain::{self, Fallback, KeyPath};
use crate::infrastructure::traits::FileSystem;

/// Service for reading and editing documents by key path.
pub struct DocumentService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
    forced_format: Option<Format>,
}

impl DocumentService {
    /// Create a new document service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self {
            fs,
            settings,
            forced_format: None,
        }
    }

    /// Use `format` for every document regardless of its extension.
    pub fn with_format(mut self, format: Option<Format>) -> Self {
        self.forced_format = format;
        self
    }

    /// Format for `path`: forced format, then extension, then configured default.
    pub fn format_for(&self, path: &Path) -> Format {
        self.forced_format
            .or_else(|| Format::from_path(path))
            .unwrap_or(self.settings.default_format)
    }

    /// Load an existing document.
    #[instrument(skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Document> {
        let format = self.format_for(path);
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read document", path)?;
        let tree = format
            .decode(&content)
            .map_err(|message| ApplicationError::Decode {
                path: path.to_path_buf(),
                format,
                message,
            })?;
        debug!("load: {} as {}", path.display(), format);
        Ok(Document {
            path: path.to_path_buf(),
            format,
            tree,
        })
    }

    /// Load a document, or start an empty one if the file does not exist yet.
    pub fn load_or_new(&self, path: &Path) -> ApplicationResult<Document> {
        if self.fs.exists(path) {
            self.load(path)
        } else {
            debug!("load_or_new: {} does not exist, starting empty", path.display());
            Ok(Document::empty(path, self.format_for(path)))
        }
    }

    /// Write a document back, atomically. Keeps a `.bak` copy if configured.
    #[instrument(skip(self, doc), fields(path = %doc.path.display()))]
    pub fn save(&self, doc: &Document) -> ApplicationResult<()> {
        let content = doc
            .format
            .encode(&doc.tree, self.settings.pretty)
            .map_err(|message| ApplicationError::Encode {
                path: doc.path.clone(),
                format: doc.format,
                message,
            })?;

        if self.settings.backup && self.fs.exists(&doc.path) {
            let backup = doc.backup_path();
            self.fs
                .copy(&doc.path, &backup)
                .with_path_context("backup document", &backup)?;
            debug!("save: backup at {}", backup.display());
        }

        self.fs
            .write_atomic(&doc.path, &content)
            .with_path_context("write document", &doc.path)
    }

    /// Apply `edit` to the document tree and save if anything changed.
    ///
    /// Returns the edit's output and whether the document was written.
    fn edit<T>(
        &self,
        mut doc: Document,
        edit: impl FnOnce(&mut Value) -> T,
    ) -> ApplicationResult<(T, bool)> {
        let before = doc.tree.clone();
        let out = edit(&mut doc.tree);
        let changed = doc.tree != before;
        if changed {
            self.save(&doc)?;
        } else {
            debug!("edit: {} unchanged, not writing", doc.path.display());
        }
        Ok((out, changed))
    }

    /// Value at `key`, or `default` (null if none) when it does not resolve.
    pub fn get(&self, path: &Path, key: &KeyPath, default: Option<Value>) -> ApplicationResult<Value> {
        let doc = self.load(path)?;
        Ok(domain::get(&doc.tree, key, Fallback::from(default)))
    }

    /// Whether every key resolves.
    pub fn has(&self, path: &Path, keys: &[String]) -> ApplicationResult<bool> {
        let doc = self.load(path)?;
        Ok(domain::has(&doc.tree, keys))
    }

    /// Set `value` at `key`, creating the document if needed.
    pub fn set(&self, path: &Path, key: &KeyPath, value: Value) -> ApplicationResult<()> {
        let doc = self.load_or_new(path)?;
        self.edit(doc, |tree| {
            domain::set(tree, key, value);
        })
        .map(|_| ())
    }

    /// Set `value` at `key` unless it already holds a non-null value.
    ///
    /// Returns true if the document changed.
    pub fn add(&self, path: &Path, key: &KeyPath, value: Value) -> ApplicationResult<bool> {
        let doc = self.load_or_new(path)?;
        let (_, changed) = self.edit(doc, |tree| {
            domain::add(tree, key, value);
        })?;
        Ok(changed)
    }

    /// Remove the given keys. Returns true if the document changed.
    pub fn forget(&self, path: &Path, keys: &[String]) -> ApplicationResult<bool> {
        let doc = self.load(path)?;
        let (_, changed) = self.edit(doc, |tree| domain::forget(tree, keys))?;
        Ok(changed)
    }

    /// Remove `key` and return what it held (or `default`).
    pub fn pull(&self, path: &Path, key: &str, default: Option<Value>) -> ApplicationResult<Value> {
        let doc = self.load(path)?;
        let (value, _) = self.edit(doc, |tree| domain::pull(tree, key, Fallback::from(default)))?;
        Ok(value)
    }

    /// Keys and values of the node at `key`.
    pub fn divide(&self, path: &Path, key: &KeyPath) -> ApplicationResult<(Vec<String>, Vec<Value>)> {
        let doc = self.load(path)?;
        Ok(domain::lookup(&doc.tree, key)
            .map(domain::divide)
            .unwrap_or_default())
    }

    /// Keys of the node at `key`.
    pub fn keys(&self, path: &Path, key: &KeyPath) -> ApplicationResult<Vec<String>> {
        let (keys, _) = self.divide(path, key)?;
        Ok(keys)
    }

    /// Query-string encoding of the node at `key`.
    pub fn query(&self, path: &Path, key: &KeyPath) -> ApplicationResult<String> {
        let doc = self.load(path)?;
        Ok(domain::lookup(&doc.tree, key)
            .map(domain::query)
            .unwrap_or_default())
    }
}
