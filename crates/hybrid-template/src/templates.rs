//! Registry of object templates

use std::collections::BTreeMap;
use std::fmt;

use parking_lot::RwLock;
use tracing::debug;

use crate::object_template::{sanitize_key, ObjectTemplate, ObjectTemplateArgs};

/// Action fired once at boot with the [`Templates`] collection.
pub const REGISTER_HOOK: &str = "hybrid/templates/register";

/// Filter the host applies to build a post type's template dropdown.
pub const THEME_TEMPLATES_HOOK: &str = "theme_templates";

/// Payload of the `theme_templates` filter: `filename -> label` for a post type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTemplates {
    pub post_type: String,
    pub templates: BTreeMap<String, String>,
}

/// Object templates in registration order.
#[derive(Default)]
pub struct Templates {
    items: RwLock<Vec<ObjectTemplate>>,
}

impl Templates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template. An existing one with the same name is
    /// replaced and keeps its position.
    pub fn add(&self, name: &str, args: ObjectTemplateArgs) -> ObjectTemplate {
        let template = ObjectTemplate::new(name, args);
        self.insert(template.clone());
        template
    }

    pub fn insert(&self, template: ObjectTemplate) {
        let mut items = self.items.write();
        match items.iter_mut().find(|existing| existing.name() == template.name()) {
            Some(existing) => *existing = template,
            None => {
                debug!(name = template.name(), "Registered object template");
                items.push(template);
            }
        }
    }

    pub fn remove(&self, name: &str) -> Option<ObjectTemplate> {
        let name = sanitize_key(name);
        let mut items = self.items.write();
        let position = items.iter().position(|template| template.name() == name)?;
        Some(items.remove(position))
    }

    pub fn get(&self, name: &str) -> Option<ObjectTemplate> {
        let name = sanitize_key(name);
        self.items
            .read()
            .iter()
            .find(|template| template.name() == name)
            .cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn all(&self) -> Vec<ObjectTemplate> {
        self.items.read().clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn post_templates(&self, post_type: &str) -> Vec<ObjectTemplate> {
        self.filtered(|template| template.supports_post_type(post_type))
    }

    pub fn term_templates(&self, taxonomy: &str) -> Vec<ObjectTemplate> {
        self.filtered(|template| template.supports_taxonomy(taxonomy))
    }

    pub fn user_templates(&self) -> Vec<ObjectTemplate> {
        self.filtered(ObjectTemplate::is_user_template)
    }

    /// Add this post type's templates to the host's `filename -> label` map.
    pub fn theme_templates(&self, mut payload: ThemeTemplates) -> ThemeTemplates {
        for template in self.post_templates(&payload.post_type) {
            payload
                .templates
                .insert(template.filename().to_string(), template.label().to_string());
        }
        payload
    }

    fn filtered(&self, keep: impl Fn(&ObjectTemplate) -> bool) -> Vec<ObjectTemplate> {
        self.items
            .read()
            .iter()
            .filter(|template| keep(template))
            .cloned()
            .collect()
    }
}

impl fmt::Debug for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.items.read().iter().map(ObjectTemplate::name))
            .finish()
    }
}
