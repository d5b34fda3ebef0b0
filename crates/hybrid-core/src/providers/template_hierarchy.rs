use std::sync::Arc;

use hybrid_config::HybridConfig;
use hybrid_container::{Concrete, Container, Result, ServiceProvider};
use hybrid_hooks::HookRegistry;
use hybrid_template::{Hierarchy, ThemeLocator};

use super::abstracts::{CONFIG, HOOKS, TEMPLATE_HIERARCHY, TEMPLATE_LOCATOR};

/// Binds the theme file locator and the template [`Hierarchy`].
///
/// `template/hierarchy` is kept as an alias of `template_hierarchy`.
pub struct TemplateHierarchyServiceProvider;

impl ServiceProvider for TemplateHierarchyServiceProvider {
    fn name(&self) -> &'static str {
        "template-hierarchy"
    }

    fn register(&self, container: &Container) -> Result<()> {
        container.singleton(
            TEMPLATE_LOCATOR,
            Some(Concrete::factory(|container: &Container, _| {
                let config = container.make::<HybridConfig>(CONFIG)?;
                let hooks = container.make::<HookRegistry>(HOOKS)?;
                Ok(ThemeLocator::new(
                    config.theme.search_dirs(),
                    config.view_path.clone(),
                    hooks,
                ))
            })),
        );

        container.singleton(
            TEMPLATE_HIERARCHY,
            Some(Concrete::factory(|container: &Container, _| {
                let hooks = container.make::<HookRegistry>(HOOKS)?;
                let locator: Arc<ThemeLocator> = container.make(TEMPLATE_LOCATOR)?;
                Ok(Hierarchy::new(hooks, locator))
            })),
        );
        container.alias(TEMPLATE_HIERARCHY, "template/hierarchy");
        Ok(())
    }
}
