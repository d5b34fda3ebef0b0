use hybrid_container::{Concrete, Container, Result, ServiceProvider};
use hybrid_hooks::HookRegistry;
use hybrid_template::{Hierarchy, RenderEngine, ViewFactory};

use super::abstracts::{HOOKS, RENDER_ENGINE, TEMPLATE_HIERARCHY, VIEW};

/// Binds the renderer and the [`ViewFactory`] as `view`.
pub struct ViewServiceProvider;

impl ServiceProvider for ViewServiceProvider {
    fn name(&self) -> &'static str {
        "view"
    }

    fn register(&self, container: &Container) -> Result<()> {
        container.singleton(RENDER_ENGINE, Some(Concrete::from_fn(RenderEngine::new)));

        container.singleton(
            VIEW,
            Some(Concrete::factory(|container: &Container, _| {
                Ok(ViewFactory::new(
                    container.make::<HookRegistry>(HOOKS)?,
                    container.make::<Hierarchy>(TEMPLATE_HIERARCHY)?,
                    container.make::<RenderEngine>(RENDER_ENGINE)?,
                ))
            })),
        );
        Ok(())
    }
}
