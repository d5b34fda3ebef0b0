//! Handlebars rendering for view templates

use std::fmt;
use std::path::Path;

use handlebars::Handlebars;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::trace;

use crate::error::{Result, TemplateError};

/// Renders template files with a data context.
///
/// Files are re-read on every render so edits show up immediately.
pub struct RenderEngine {
    registry: RwLock<Handlebars<'static>>,
}

impl RenderEngine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Render the file at `path` with `data` as the template context.
    pub fn render_file<T: Serialize>(&self, path: &Path, data: &T) -> Result<String> {
        let source = std::fs::read_to_string(path)?;
        let name = path.to_string_lossy().into_owned();
        trace!(template = %name, "Rendering template");

        self.registry
            .write()
            .register_template_string(&name, source)
            .map_err(|err| TemplateError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;

        self.registry
            .read()
            .render(&name, data)
            .map_err(|err| TemplateError::Render {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
    }
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RenderEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderEngine").finish_non_exhaustive()
    }
}
