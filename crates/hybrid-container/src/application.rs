//! Application: a container that bootstraps a fixed list of providers

use std::fmt;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::{Container, ContainerError, Result, ServiceProvider};

/// Root locations of the framework, bound as `path` and `uri`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub path: PathBuf,
    pub uri: String,
}

/// A [`Container`] that owns and boots an ordered list of providers.
///
/// Construction runs two full passes: `register()` on every provider, then
/// `boot()` on every provider. A provider's boot can therefore rely on
/// bindings made by any provider, including ones declared after it.
pub struct Application {
    container: Container,
    providers: Vec<Arc<dyn ServiceProvider>>,
}

impl Application {
    /// Build the application. Any provider failure aborts construction.
    pub fn new(paths: AppPaths, providers: Vec<Arc<dyn ServiceProvider>>) -> Result<Self> {
        let container = Container::new();
        container.instance("path", paths.path);
        container.instance("uri", paths.uri);

        let app = Self { container, providers };
        app.register_providers()?;
        app.boot_providers()?;
        Ok(app)
    }

    fn register_providers(&self) -> Result<()> {
        info!("Registering {} service providers", self.providers.len());

        for provider in &self.providers {
            debug!("Registering provider '{}'", provider.name());
            provider
                .register(&self.container)
                .map_err(|err| provider_error(provider.as_ref(), err))?;
        }
        Ok(())
    }

    fn boot_providers(&self) -> Result<()> {
        for provider in &self.providers {
            debug!("Booting provider '{}'", provider.name());
            provider
                .boot(&self.container)
                .map_err(|err| provider_error(provider.as_ref(), err))?;
        }

        info!("All service providers booted");
        Ok(())
    }

    /// Provider names in declaration order.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}

fn provider_error(provider: &dyn ServiceProvider, err: ContainerError) -> ContainerError {
    match err {
        err @ ContainerError::Provider { .. } => err,
        err => ContainerError::Provider {
            provider: provider.name().to_string(),
            message: err.to_string(),
        },
    }
}

impl Deref for Application {
    type Target = Container;

    fn deref(&self) -> &Container {
        &self.container
    }
}

impl fmt::Debug for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("container", &self.container)
            .field("providers", &self.provider_names())
            .finish()
    }
}
