//! Error types for the container

use thiserror::Error;

/// Errors raised while building objects or booting an application.
///
/// An abstract that was never bound is *not* an error: [`Container::resolve`]
/// reports it as `Ok(None)`. Everything here is a hard failure.
///
/// [`Container::resolve`]: crate::Container::resolve
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("Abstract not bound: {0}")]
    NotBound(String),

    #[error("Unresolvable dependency `{parameter}` while building {abstract_name}")]
    Unresolvable {
        abstract_name: String,
        parameter: String,
    },

    #[error("Circular dependency detected: {}", chain.join(" -> "))]
    Circular { chain: Vec<String> },

    #[error("Resolved {abstract_name} is not a {expected}")]
    TypeMismatch {
        abstract_name: String,
        expected: &'static str,
    },

    #[error("Failed to build {abstract_name}: {message}")]
    Build {
        abstract_name: String,
        message: String,
    },

    #[error("Service provider '{provider}' failed: {message}")]
    Provider { provider: String, message: String },
}

impl ContainerError {
    /// Shorthand used by factories that need to bail out with a message.
    pub fn build(abstract_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Build {
            abstract_name: abstract_name.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContainerError>;
