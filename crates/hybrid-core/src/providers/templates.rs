use hybrid_config::HybridConfig;
use hybrid_container::{Concrete, Container, Result, ServiceProvider};
use hybrid_hooks::{HookRegistry, DEFAULT_PRIORITY};
use hybrid_template::{ObjectTemplateArgs, Templates, ThemeTemplates, REGISTER_HOOK, THEME_TEMPLATES_HOOK};
use tracing::info;

use super::abstracts::{CONFIG, HOOKS, TEMPLATES};
use super::provider_error;

/// Binds the object template collection as `templates`.
///
/// At boot it registers templates declared in configuration, lets
/// extensions add theirs through `hybrid/templates/register`, and merges
/// post templates into the host's `theme_templates` dropdown.
pub struct TemplatesServiceProvider;

impl ServiceProvider for TemplatesServiceProvider {
    fn name(&self) -> &'static str {
        "templates"
    }

    fn register(&self, container: &Container) -> Result<()> {
        container.singleton(TEMPLATES, Some(Concrete::from_fn(Templates::new)));
        Ok(())
    }

    fn boot(&self, container: &Container) -> Result<()> {
        let config = container.make::<HybridConfig>(CONFIG)?;
        let hooks = container.make::<HookRegistry>(HOOKS)?;
        let templates = container.make::<Templates>(TEMPLATES)?;

        for declared in &config.templates {
            templates.add(
                &declared.name,
                ObjectTemplateArgs {
                    label: declared.label.clone(),
                    filename: declared.filename.clone(),
                    post_types: declared.post_types.clone(),
                    taxonomies: declared.taxonomies.clone(),
                    is_user_template: declared.is_user_template,
                },
            );
        }

        hooks.do_action(REGISTER_HOOK, &*templates);

        let merged = templates.clone();
        hooks
            .add_filter(
                THEME_TEMPLATES_HOOK,
                "hybrid/templates",
                DEFAULT_PRIORITY,
                move |payload: ThemeTemplates| merged.theme_templates(payload),
            )
            .map_err(|err| provider_error(self, err))?;

        info!(count = templates.len(), "Object templates registered");
        Ok(())
    }
}
