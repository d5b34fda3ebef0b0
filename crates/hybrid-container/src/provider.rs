//! Service Provider trait for wiring subsystems into the container
//!
//! A provider has a two-phase lifecycle. `register()` only binds things;
//! it must not resolve services owned by other providers, because the
//! providers after it have not registered yet. `boot()` runs once every
//! provider has registered and may resolve anything.
//!
//! ```rust,ignore
//! use hybrid_container::{Concrete, Container, Result, ServiceProvider};
//!
//! pub struct TemplatesServiceProvider;
//!
//! impl ServiceProvider for TemplatesServiceProvider {
//!     fn name(&self) -> &'static str {
//!         "templates"
//!     }
//!
//!     fn register(&self, container: &Container) -> Result<()> {
//!         container.singleton("templates", Some(Concrete::from_fn(Templates::new)));
//!         Ok(())
//!     }
//! }
//! ```

use crate::{Container, Result};

/// Trait for types that wire one subsystem into the container.
pub trait ServiceProvider: Send + Sync {
    /// Returns the name of this service provider.
    ///
    /// Used for logging and error messages.
    fn name(&self) -> &'static str;

    /// Bind services into the container.
    fn register(&self, container: &Container) -> Result<()>;

    /// Called after every provider has registered.
    #[allow(unused_variables)]
    fn boot(&self, container: &Container) -> Result<()> {
        Ok(())
    }
}
