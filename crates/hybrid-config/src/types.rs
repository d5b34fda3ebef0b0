//! Core configuration types and data structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default directory, relative to a theme root, that holds view templates.
pub const DEFAULT_VIEW_PATH: &str = "resources/views";

/// Main framework configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HybridConfig {
    /// Views directory relative to each theme root
    pub view_path: String,
    /// Theme directories to search
    pub theme: ThemeConfig,
    /// Framework location
    pub app: AppConfig,
    /// Default tracing filter directive
    pub log_level: String,
    /// Object templates registered at boot
    pub templates: Vec<TemplateConfig>,
}

/// Theme directories
///
/// `stylesheet_dir` is the active theme. When a child theme is active,
/// `template_dir` points at its parent; otherwise it is left unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub stylesheet_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

/// Where the framework itself lives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub path: PathBuf,
    pub uri: String,
}

/// An object template declared in configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TemplateConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub post_types: Vec<String>,
    pub taxonomies: Vec<String>,
    pub is_user_template: bool,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            view_path: DEFAULT_VIEW_PATH.to_string(),
            theme: ThemeConfig::default(),
            app: AppConfig::default(),
            log_level: "info".to_string(),
            templates: Vec::new(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            stylesheet_dir: PathBuf::from("."),
            template_dir: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("vendor/justintadlock/hybrid-core"),
            uri: String::new(),
        }
    }
}

impl ThemeConfig {
    /// Parent theme directory, or the active theme when there is no child theme.
    pub fn template_dir(&self) -> &Path {
        self.template_dir.as_deref().unwrap_or(&self.stylesheet_dir)
    }

    pub fn is_child_theme(&self) -> bool {
        self.template_dir
            .as_deref()
            .is_some_and(|dir| dir != self.stylesheet_dir)
    }

    /// Directories to search, active theme first, without duplicates.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.stylesheet_dir.clone()];
        if self.is_child_theme() {
            dirs.push(self.template_dir().to_path_buf());
        }
        dirs
    }
}
