//! Template hierarchy resolution
//!
//! [`Hierarchy::resolve`] walks every page type whose condition holds for
//! the request, in a fixed order, and for each one:
//!
//! 1. builds the candidate list (see [`rules`](crate::rules)) and passes it
//!    through `{type}_template_hierarchy` then `hybrid/template/hierarchy`
//! 2. records the candidates, minus extension, in the running hierarchy
//! 3. looks the candidates up on disk and passes the result through
//!    `{type}_template`
//!
//! Every matching type runs even after a file was found, so the recorded
//! hierarchy is complete. The first file found is kept as `located`; later
//! matches never replace it. The index type always runs last. The chosen
//! path finally passes through `template_include`.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use hybrid_hooks::HookRegistry;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::context::PageContext;
use crate::locator::TemplateLocator;
use crate::page_type::{PageType, PIPELINE};
use crate::rules;

/// Filter applied to every candidate list before it is recorded.
pub const HIERARCHY_HOOK: &str = "hybrid/template/hierarchy";

/// Filter applied to the template chosen for the request.
pub const TEMPLATE_INCLUDE_HOOK: &str = "template_include";

/// What one resolution recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyRecord {
    /// Candidate names without extension, in the order they were tried.
    /// Types matching the same page contribute duplicates.
    pub hierarchy: Vec<String>,
    /// First template file found.
    pub located: Option<PathBuf>,
}

/// Resolves the template for a request and records how it got there.
pub struct Hierarchy {
    hooks: Arc<HookRegistry>,
    locator: Arc<dyn TemplateLocator>,
    record: RwLock<HierarchyRecord>,
    context: RwLock<Option<PageContext>>,
}

impl Hierarchy {
    pub fn new(hooks: Arc<HookRegistry>, locator: Arc<dyn TemplateLocator>) -> Self {
        Self {
            hooks,
            locator,
            record: RwLock::new(HierarchyRecord::default()),
            context: RwLock::new(None),
        }
    }

    /// Resolve the template for `context`, replacing any previous record.
    pub fn resolve(&self, context: &PageContext) -> Option<PathBuf> {
        *self.record.write() = HierarchyRecord::default();
        *self.context.write() = Some(context.clone());

        let stages = PIPELINE
            .iter()
            .filter(|(condition, _)| context.is(*condition))
            .map(|(_, page_type)| *page_type)
            .chain(std::iter::once(PageType::Index));

        for page_type in stages {
            self.run_stage(page_type, context);
        }

        let located = self.located();
        let chosen = self
            .hooks
            .apply_filters(TEMPLATE_INCLUDE_HOOK, located.clone());

        info!(
            located = ?located,
            chosen = ?chosen,
            candidates = self.record.read().hierarchy.len(),
            "Resolved template hierarchy"
        );
        chosen
    }

    /// Filtered candidate list for a single page type.
    pub fn candidates(&self, page_type: PageType, context: &PageContext) -> Vec<String> {
        let candidates = rules::candidates(page_type, context);
        let candidates = self
            .hooks
            .apply_filters(&page_type.hierarchy_hook(), candidates);
        self.hooks.apply_filters(HIERARCHY_HOOK, candidates)
    }

    fn run_stage(&self, page_type: PageType, context: &PageContext) {
        let candidates = self.candidates(page_type, context);
        debug!(page_type = %page_type, candidates = ?candidates, "Template stage");

        self.record
            .write()
            .hierarchy
            .extend(candidates.iter().map(|candidate| strip_extension(candidate)));

        let found = self.locator.locate(&candidates);
        let found = self
            .hooks
            .apply_filters(&page_type.template_hook(), found)
            .filter(|path| !path.as_os_str().is_empty());

        if let Some(path) = found {
            let mut record = self.record.write();
            if record.located.is_none() {
                debug!(page_type = %page_type, path = %path.display(), "Located template");
                record.located = Some(path);
            }
        }
    }

    /// Candidate names recorded by the last resolution.
    pub fn hierarchy(&self) -> Vec<String> {
        self.record.read().hierarchy.clone()
    }

    /// First template found by the last resolution.
    pub fn located(&self) -> Option<PathBuf> {
        self.record.read().located.clone()
    }

    pub fn record(&self) -> HierarchyRecord {
        self.record.read().clone()
    }

    /// Context of the last resolution.
    pub fn context(&self) -> Option<PageContext> {
        self.context.read().clone()
    }

    pub fn locator(&self) -> &Arc<dyn TemplateLocator> {
        &self.locator
    }

    /// First existing file among `candidates`.
    pub fn locate(&self, candidates: &[String]) -> Option<PathBuf> {
        self.locator.locate(candidates)
    }
}

impl fmt::Debug for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hierarchy")
            .field("record", &*self.record.read())
            .finish()
    }
}

fn strip_extension(candidate: &str) -> String {
    match candidate.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => candidate.to_string(),
    }
}
