use hybrid_config::HybridConfig;
use hybrid_container::{Container, Result, ServiceProvider};

use super::abstracts::CONFIG;

/// Binds the loaded [`HybridConfig`] as `config`.
pub struct ConfigServiceProvider {
    config: HybridConfig,
}

impl ConfigServiceProvider {
    pub fn new(config: HybridConfig) -> Self {
        Self { config }
    }
}

impl ServiceProvider for ConfigServiceProvider {
    fn name(&self) -> &'static str {
        "config"
    }

    fn register(&self, container: &Container) -> Result<()> {
        container.instance(CONFIG, self.config.clone());
        Ok(())
    }
}
