//! Default application and the process-wide instance

use hybrid_config::HybridConfig;
use hybrid_container::{AppPaths, Application};
use once_cell::sync::OnceCell;
use tracing::info;

use crate::error::{HybridError, Result};
use crate::providers::default_providers;

static APP: OnceCell<Application> = OnceCell::new();

/// Build an application with the default providers, without installing it
/// as the global instance.
pub fn build_application(config: HybridConfig) -> Result<Application> {
    let paths = AppPaths {
        path: config.app.path.clone(),
        uri: config.app.uri.clone(),
    };
    let app = Application::new(paths, default_providers(config))?;
    Ok(app)
}

/// Build the default application and install it as the global instance
/// returned by [`app`].
pub fn bootstrap(config: HybridConfig) -> Result<&'static Application> {
    if APP.get().is_some() {
        return Err(HybridError::AlreadyBooted);
    }

    let app = build_application(config)?;
    APP.set(app).map_err(|_| HybridError::AlreadyBooted)?;
    info!("Hybrid Core bootstrapped");
    self::app()
}

/// The global application.
pub fn app() -> Result<&'static Application> {
    APP.get().ok_or(HybridError::NotBooted)
}
