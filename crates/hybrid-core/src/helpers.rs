//! Free functions for theme code
//!
//! Each helper works on the global application installed by
//! [`bootstrap`](crate::bootstrap). The `*_in` variants take an explicit
//! container instead, which is what tests and embedders use.

use std::path::PathBuf;
use std::sync::Arc;

use hybrid_container::Container;
use hybrid_hooks::HookRegistry;
use hybrid_template::{Hierarchy, PageContext, Templates, ThemeLocator, View, ViewData, ViewFactory};

use crate::app::app;
use crate::error::Result;
use crate::providers::abstracts::{HOOKS, TEMPLATES, TEMPLATE_HIERARCHY, TEMPLATE_LOCATOR, VIEW};

/// Resolve a service from the global application.
pub fn resolve<T: Send + Sync + 'static>(abstract_name: &str) -> Result<Arc<T>> {
    resolve_in(app()?, abstract_name)
}

pub fn resolve_in<T: Send + Sync + 'static>(container: &Container, abstract_name: &str) -> Result<Arc<T>> {
    Ok(container.make(abstract_name)?)
}

pub fn hooks() -> Result<Arc<HookRegistry>> {
    resolve(HOOKS)
}

pub fn templates() -> Result<Arc<Templates>> {
    resolve(TEMPLATES)
}

/// Build a view.
pub fn view<I, S>(name: &str, slugs: I, data: ViewData) -> Result<View>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    view_in(app()?, name, slugs, data)
}

pub fn view_in<I, S>(container: &Container, name: &str, slugs: I, data: ViewData) -> Result<View>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let factory = container.make::<ViewFactory>(VIEW)?;
    Ok(factory.make(name, slugs, data))
}

/// Render a view to standard output.
pub fn display<I, S>(name: &str, slugs: I, data: ViewData) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Ok(view(name, slugs, data)?.display()?)
}

/// Render a view to a string. Empty when the view has no template.
pub fn fetch<I, S>(name: &str, slugs: I, data: ViewData) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fetch_in(app()?, name, slugs, data)
}

pub fn fetch_in<I, S>(container: &Container, name: &str, slugs: I, data: ViewData) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Ok(view_in(container, name, slugs, data)?.fetch()?)
}

/// Resolve the template for a request.
pub fn resolve_template(context: &PageContext) -> Result<Option<PathBuf>> {
    resolve_template_in(app()?, context)
}

pub fn resolve_template_in(container: &Container, context: &PageContext) -> Result<Option<PathBuf>> {
    let hierarchy = container.make::<Hierarchy>(TEMPLATE_HIERARCHY)?;
    Ok(hierarchy.resolve(context))
}

/// Template names recorded by the last resolution, for introspection.
pub fn hierarchy() -> Result<Vec<String>> {
    hierarchy_in(app()?)
}

pub fn hierarchy_in(container: &Container) -> Result<Vec<String>> {
    let hierarchy = container.make::<Hierarchy>(TEMPLATE_HIERARCHY)?;
    Ok(hierarchy.hierarchy())
}

/// First existing file among `candidates`, active theme before parent.
pub fn locate_template(candidates: &[String]) -> Result<Option<PathBuf>> {
    locate_template_in(app()?, candidates)
}

pub fn locate_template_in(container: &Container, candidates: &[String]) -> Result<Option<PathBuf>> {
    let hierarchy = container.make::<Hierarchy>(TEMPLATE_HIERARCHY)?;
    Ok(hierarchy.locate(candidates))
}

/// `file` prefixed with the filtered views directory.
pub fn template_path(file: &str) -> Result<String> {
    template_path_in(app()?, file)
}

pub fn template_path_in(container: &Container, file: &str) -> Result<String> {
    let locator = container.make::<ThemeLocator>(TEMPLATE_LOCATOR)?;
    Ok(locator.template_path(file))
}
