//! Views: named template slots resolved through a slug hierarchy
//!
//! A view named `entry` with slugs `["single", "archive"]` tries, in order:
//!
//! ```text
//! entry/single.php
//! entry/archive.php
//! entry/default.php
//! entry.php
//! ```
//!
//! and renders the first file that exists in the active or parent theme.
//! When none exists the view renders nothing.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use hybrid_hooks::HookRegistry;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::engine::RenderEngine;
use crate::error::Result;
use crate::hierarchy::Hierarchy;
use crate::locator::TemplateLocator;

/// Data made available to a view's template.
pub type ViewData = Map<String, Value>;

/// Filter on the content that prepends attachment markup.
const PREPEND_ATTACHMENT: (&str, &str) = ("the_content", "prepend_attachment");

/// Payload of the `get_template_part_{name}` and `get_{name}` actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplatePart {
    pub name: String,
    pub slugs: Vec<String>,
    pub templates: Vec<String>,
}

/// A view ready to render.
pub struct View {
    name: String,
    slugs: Vec<String>,
    data: ViewData,
    template: OnceLock<PathBuf>,
    hooks: Arc<HookRegistry>,
    locator: Arc<dyn TemplateLocator>,
    engine: Arc<RenderEngine>,
    queried_post_type: Option<String>,
}

impl View {
    /// Build a view. Slugs and data pass through
    /// `hybrid/view/{name}/slugs` and `hybrid/view/{name}/data`.
    pub fn new(
        name: impl Into<String>,
        slugs: Vec<String>,
        data: ViewData,
        hooks: Arc<HookRegistry>,
        locator: Arc<dyn TemplateLocator>,
        engine: Arc<RenderEngine>,
    ) -> Self {
        let name = name.into();
        let slugs = hooks.apply_filters(&format!("hybrid/view/{name}/slugs"), slugs);
        let data = hooks.apply_filters(&format!("hybrid/view/{name}/data"), data);

        Self {
            name,
            slugs,
            data,
            template: OnceLock::new(),
            hooks,
            locator,
            engine,
            queried_post_type: None,
        }
    }

    /// Post type of the request's queried object.
    pub fn with_queried_post_type(mut self, post_type: Option<String>) -> Self {
        self.queried_post_type = post_type;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    pub fn data(&self) -> &ViewData {
        &self.data
    }

    /// Candidate files, most specific first, after
    /// `hybrid/view/{name}/hierarchy`.
    pub fn hierarchy(&self) -> Vec<String> {
        let name = &self.name;
        let mut candidates: Vec<String> = self
            .slugs
            .iter()
            .map(|slug| format!("{name}/{slug}.php"))
            .collect();

        if !self.slugs.iter().any(|slug| slug == "default") {
            candidates.push(format!("{name}/default.php"));
        }
        candidates.push(format!("{name}.php"));

        self.hooks
            .apply_filters(&format!("hybrid/view/{name}/hierarchy"), candidates)
    }

    /// Look the hierarchy up on disk, without caching.
    pub fn locate(&self) -> Option<PathBuf> {
        self.locator.locate(&self.hierarchy())
    }

    /// The located template. Cached once found.
    pub fn template(&self) -> Option<PathBuf> {
        if let Some(template) = self.template.get() {
            return Some(template.clone());
        }
        let located = self.locate()?;
        Some(self.template.get_or_init(|| located).clone())
    }

    /// Render into `out`. Writes nothing when no template exists.
    pub fn render(&self, out: &mut dyn Write) -> Result<()> {
        self.fire_compat_actions();

        if matches!(self.name.as_str(), "entry" | "post" | "embed")
            && self.queried_post_type.as_deref() == Some("attachment")
        {
            let (hook, id) = PREPEND_ATTACHMENT;
            self.hooks.remove_filter(hook, id);
        }

        let Some(template) = self.template() else {
            trace!(view = %self.name, "No template found");
            return Ok(());
        };

        debug!(view = %self.name, template = %template.display(), "Rendering view");
        let output = self.engine.render_file(&template, &self.data)?;
        out.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Render to standard output.
    pub fn display(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.render(&mut lock)?;
        lock.flush()?;
        Ok(())
    }

    /// Render to a string. Empty when no template exists.
    pub fn fetch(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn fire_compat_actions(&self) {
        let part = TemplatePart {
            name: self.name.clone(),
            slugs: self.slugs.clone(),
            templates: self.hierarchy(),
        };

        if matches!(self.name.as_str(), "header" | "footer" | "sidebar") {
            self.hooks.do_action(&format!("get_{}", self.name), &part);
        }
        self.hooks
            .do_action(&format!("get_template_part_{}", self.name), &part);
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("name", &self.name)
            .field("slugs", &self.slugs)
            .field("template", &self.template.get())
            .finish()
    }
}

/// Creates views wired to the shared hooks, locator and renderer.
pub struct ViewFactory {
    hooks: Arc<HookRegistry>,
    hierarchy: Arc<Hierarchy>,
    engine: Arc<RenderEngine>,
}

impl ViewFactory {
    pub fn new(hooks: Arc<HookRegistry>, hierarchy: Arc<Hierarchy>, engine: Arc<RenderEngine>) -> Self {
        Self {
            hooks,
            hierarchy,
            engine,
        }
    }

    pub fn make<I, S>(&self, name: &str, slugs: I, data: ViewData) -> View
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queried_post_type = self
            .hierarchy
            .context()
            .and_then(|context| context.post_type().map(str::to_string));

        View::new(
            name,
            slugs.into_iter().map(Into::into).collect(),
            data,
            self.hooks.clone(),
            self.hierarchy.locator().clone(),
            self.engine.clone(),
        )
        .with_queried_post_type(queried_post_type)
    }
}

impl fmt::Debug for ViewFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewFactory").finish_non_exhaustive()
    }
}
