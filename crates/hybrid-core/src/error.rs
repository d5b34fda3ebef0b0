//! Error types for the framework facade

use thiserror::Error;

use hybrid_config::ConfigError;
use hybrid_container::ContainerError;
use hybrid_hooks::HooksError;
use hybrid_template::TemplateError;

/// Errors surfaced by the bootstrap and helper functions
#[derive(Debug, Error)]
pub enum HybridError {
    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Hooks(#[from] HooksError),

    /// A helper was called before [`bootstrap`](crate::bootstrap).
    #[error("Application has not been bootstrapped")]
    NotBooted,

    #[error("Application is already bootstrapped")]
    AlreadyBooted,
}

/// Result type for framework operations
pub type Result<T> = std::result::Result<T, HybridError>;
