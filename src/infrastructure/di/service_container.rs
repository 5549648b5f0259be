//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DocumentService;
use crate::application::Format;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Document reads and edits
    pub documents: DocumentService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    ///
    /// `format` forces a document format, overriding extension detection.
    pub fn new(settings: Settings, format: Option<Format>) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), format)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>, format: Option<Format>) -> Self {
        let settings = Arc::new(settings);
        let documents = DocumentService::new(Arc::clone(&fs), Arc::clone(&settings)).with_format(format);

        Self {
            settings,
            fs,
            documents,
        }
    }
}
