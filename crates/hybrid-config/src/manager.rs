//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::{debug, info};

use crate::{
    error::{ConfigError, Result},
    types::HybridConfig,
};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "hybrid.toml";

/// Loads, validates and saves [`HybridConfig`]
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "HYBRID".to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: "HYBRID".to_string(),
        }
    }

    /// Use a different environment prefix than `HYBRID`
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return local;
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hybrid-core")
            .join(CONFIG_FILE_NAME)
    }

    /// Merge defaults, the config file (if any) and the environment.
    pub fn load(&self) -> Result<HybridConfig> {
        debug!(path = %self.config_path.display(), prefix = %self.env_prefix, "Loading configuration");

        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config: HybridConfig = builder.build()?.try_deserialize()?;
        self.validate(&config)?;

        info!(
            view_path = %config.view_path,
            stylesheet_dir = %config.theme.stylesheet_dir.display(),
            child_theme = config.theme.is_child_theme(),
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn save(&self, config: &HybridConfig) -> Result<()> {
        self.validate(config)?;
        let toml = toml::to_string_pretty(config)?;
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.config_path, toml)?;
        debug!(path = %self.config_path.display(), "Configuration saved");
        Ok(())
    }

    pub fn validate(&self, config: &HybridConfig) -> Result<()> {
        let view_path = Path::new(&config.view_path);
        if config.view_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "view_path must not be empty".to_string(),
            ));
        }
        if view_path.is_absolute() {
            return Err(ConfigError::Validation(format!(
                "view_path must be relative to the theme: {}",
                config.view_path
            )));
        }
        if config.theme.stylesheet_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "theme.stylesheet_dir must not be empty".to_string(),
            ));
        }
        if config
            .theme
            .template_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(ConfigError::Validation(
                "theme.template_dir must not be empty when set".to_string(),
            ));
        }
        if let Some(template) = config.templates.iter().find(|t| t.name.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "template declared without a name (label: {:?})",
                template.label
            )));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
