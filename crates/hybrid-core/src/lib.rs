//! Hybrid Core
//!
//! Wires the container, hooks, configuration and templates into a ready
//! application and exposes the helper functions theme code calls.
//!
//! ```no_run
//! use hybrid_config::ConfigManager;
//! use hybrid_core::{bootstrap, fetch, logging, ViewData};
//!
//! # fn main() -> hybrid_core::Result<()> {
//! let config = ConfigManager::new().load()?;
//! logging::init_logging(&logging::LogOptions::with_level(config.log_level.clone()));
//! bootstrap(config)?;
//!
//! let sidebar = fetch("sidebar", ["primary"], ViewData::new())?;
//! print!("{sidebar}");
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod providers;

pub use app::{app, bootstrap, build_application};
pub use error::{HybridError, Result};
pub use helpers::{
    display, fetch, fetch_in, hierarchy, hierarchy_in, hooks, locate_template, locate_template_in, resolve,
    resolve_in, resolve_template, resolve_template_in, template_path, template_path_in, templates, view, view_in,
};
pub use hybrid_template::ViewData;
pub use providers::{abstracts, default_providers};
