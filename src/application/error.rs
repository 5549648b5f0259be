//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

use crate::application::Format;

/// Application errors: document codecs, configuration and failed I/O with context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("cannot decode {format} document {path}: {message}")]
    Decode {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("cannot encode {format} document {path}: {message}")]
    Encode {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("document not found: {0}")]
    DocumentNotFound(PathBuf),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
