//! Template error types
//!
//! A template that cannot be found is not an error: lookups return `None`
//! and views render nothing. These variants cover templates that exist but
//! cannot be read or rendered.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering templates
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file exists but could not be read, or output could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The template source is not valid handlebars
    #[error("Failed to parse template {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Rendering failed, usually a helper error in strict templates
    #[error("Failed to render template {path}: {message}")]
    Render { path: PathBuf, message: String },
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
