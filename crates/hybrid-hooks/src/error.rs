//! Error types for the hooks system
//!
//! Firing a hook never fails: a callback whose payload type does not match
//! is skipped and logged. Errors only come from registering callbacks with
//! malformed names.

use thiserror::Error;

/// Errors that can occur while registering hooks
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HooksError {
    /// Hook names must be non-empty and free of whitespace.
    #[error("Invalid hook name: {0:?}")]
    InvalidHookName(String),

    /// Every callback needs an id so it can be removed later.
    #[error("Callback id must not be empty (hook: {0})")]
    EmptyCallbackId(String),
}

/// Result type for hooks operations
pub type Result<T> = std::result::Result<T, HooksError>;
