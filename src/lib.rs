//! Workspace-level facade used by the end-to-end suites under `tests/`.

pub use hybrid_config;
pub use hybrid_container;
pub use hybrid_core;
pub use hybrid_hooks;
pub use hybrid_template;
