//! Application layer: documents and services
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod document;
pub mod error;
pub mod error_ext;
pub mod format;
pub mod services;

pub use document::Document;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use format::{parse_value, Format};
