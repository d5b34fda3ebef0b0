//! Service providers wiring each subsystem into the application

mod config;
mod hooks;
mod templates;
mod template_hierarchy;
mod view;

use std::sync::Arc;

use hybrid_config::HybridConfig;
use hybrid_container::{ContainerError, ServiceProvider};

pub use config::ConfigServiceProvider;
pub use hooks::HooksServiceProvider;
pub use template_hierarchy::TemplateHierarchyServiceProvider;
pub use templates::TemplatesServiceProvider;
pub use view::ViewServiceProvider;

/// Abstract names the default providers bind.
pub mod abstracts {
    pub const CONFIG: &str = "config";
    pub const HOOKS: &str = "hooks";
    pub const TEMPLATES: &str = "templates";
    pub const TEMPLATE_LOCATOR: &str = "template_locator";
    pub const TEMPLATE_HIERARCHY: &str = "template_hierarchy";
    pub const RENDER_ENGINE: &str = "render_engine";
    pub const VIEW: &str = "view";
}

/// Providers booted by [`bootstrap`](crate::bootstrap), in order.
pub fn default_providers(config: HybridConfig) -> Vec<Arc<dyn ServiceProvider>> {
    vec![
        Arc::new(ConfigServiceProvider::new(config)),
        Arc::new(HooksServiceProvider),
        Arc::new(TemplatesServiceProvider),
        Arc::new(TemplateHierarchyServiceProvider),
        Arc::new(ViewServiceProvider),
    ]
}

fn provider_error(provider: &dyn ServiceProvider, err: impl std::fmt::Display) -> ContainerError {
    ContainerError::Provider {
        provider: provider.name().to_string(),
        message: err.to_string(),
    }
}
