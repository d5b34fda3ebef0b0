//! Hybrid Core configuration
//!
//! Settings are merged from three layers, later ones winning:
//!
//! 1. Built-in defaults ([`HybridConfig::default`])
//! 2. An optional `hybrid.toml` file
//! 3. `HYBRID_*` environment variables, nested keys separated by `__`
//!    (e.g. `HYBRID_THEME__STYLESHEET_DIR`)

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::{ConfigManager, CONFIG_FILE_NAME};
pub use types::{AppConfig, HybridConfig, TemplateConfig, ThemeConfig, DEFAULT_VIEW_PATH};
