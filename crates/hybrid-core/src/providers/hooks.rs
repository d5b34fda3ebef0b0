use hybrid_container::{Concrete, Container, Result, ServiceProvider};
use hybrid_hooks::HookRegistry;

use super::abstracts::HOOKS;

/// Binds the shared [`HookRegistry`] as `hooks`.
pub struct HooksServiceProvider;

impl ServiceProvider for HooksServiceProvider {
    fn name(&self) -> &'static str {
        "hooks"
    }

    fn register(&self, container: &Container) -> Result<()> {
        container.singleton(HOOKS, Some(Concrete::from_fn(HookRegistry::new)));
        Ok(())
    }
}
