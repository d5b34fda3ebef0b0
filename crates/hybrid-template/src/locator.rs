//! Template file lookup across theme directories

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hybrid_hooks::HookRegistry;
use tracing::trace;

/// Filter applied to the views directory before every lookup.
pub const VIEW_PATH_HOOK: &str = "hybrid/template/path";

/// Finds the first existing file among an ordered list of candidates.
pub trait TemplateLocator: Send + Sync {
    /// Absolute path of the first candidate that exists, if any.
    fn locate(&self, candidates: &[String]) -> Option<PathBuf>;
}

/// Searches the views directory of the active theme, then its parent.
///
/// Candidates are tried in order; for each candidate the active theme is
/// checked before the parent, so a parent's more specific file never wins
/// over a child's earlier candidate.
pub struct ThemeLocator {
    dirs: Vec<PathBuf>,
    view_path: String,
    hooks: Arc<HookRegistry>,
}

impl ThemeLocator {
    /// `dirs` are theme roots, active theme first.
    pub fn new(dirs: Vec<PathBuf>, view_path: impl Into<String>, hooks: Arc<HookRegistry>) -> Self {
        let mut unique: Vec<PathBuf> = Vec::with_capacity(dirs.len());
        for dir in dirs {
            if !unique.contains(&dir) {
                unique.push(dir);
            }
        }

        Self {
            dirs: unique,
            view_path: view_path.into(),
            hooks,
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Views directory relative to a theme root, after filters.
    pub fn view_path(&self) -> String {
        let path = self
            .hooks
            .apply_filters(VIEW_PATH_HOOK, self.view_path.clone());
        path.trim_matches('/').to_string()
    }

    /// `file` relative to a theme root, prefixed with the views directory.
    ///
    /// A file already carrying the prefix is returned unchanged.
    pub fn template_path(&self, file: &str) -> String {
        prefix_view_path(&self.view_path(), file)
    }
}

impl TemplateLocator for ThemeLocator {
    fn locate(&self, candidates: &[String]) -> Option<PathBuf> {
        let view_path = self.view_path();

        for candidate in candidates {
            let relative = prefix_view_path(&view_path, candidate);
            for dir in &self.dirs {
                let path = dir.join(&relative);
                trace!(candidate = %path.display(), "Looking for template");
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }
}

fn prefix_view_path(view_path: &str, file: &str) -> String {
    let file = file.trim_start_matches('/');
    if view_path.is_empty() {
        return file.to_string();
    }

    if file
        .strip_prefix(view_path)
        .is_some_and(|rest| rest.starts_with('/'))
    {
        return file.to_string();
    }
    Path::new(view_path).join(file).to_string_lossy().into_owned()
}
