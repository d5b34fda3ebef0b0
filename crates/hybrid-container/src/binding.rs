//! Binding records stored by the container

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{Container, Result};

/// A type-erased object handed out by the container.
pub type Resolved = Arc<dyn Any + Send + Sync>;

/// Named constructor arguments supplied at resolve time.
pub type Parameters = HashMap<String, Resolved>;

/// Closure concrete: receives the container and the resolve-time parameters.
pub type Factory = Arc<dyn Fn(&Container, &Parameters) -> Result<Resolved> + Send + Sync>;

/// Decorator applied to freshly built objects of an abstract.
pub type Extender = Arc<dyn Fn(Resolved, &Container) -> Resolved + Send + Sync>;

/// What an abstract is bound to.
#[derive(Clone)]
pub enum Concrete {
    /// Built by invoking the closure.
    Factory(Factory),
    /// Name of a class registered through [`Buildable`](crate::Buildable);
    /// auto-wired from its declared constructor parameters. A name that is
    /// not a known class is handed back verbatim as a `String`.
    Class(String),
    /// A plain value returned as-is, never built or decorated.
    Value(Resolved),
}

impl Concrete {
    /// Wrap a typed factory closure.
    pub fn factory<T, F>(factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&Container, &Parameters) -> Result<T> + Send + Sync + 'static,
    {
        Concrete::Factory(Arc::new(move |container, parameters| {
            let object = factory(container, parameters)?;
            Ok(Arc::new(object) as Resolved)
        }))
    }

    /// Wrap a factory that ignores the container and parameters.
    pub fn from_fn<T, F>(factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Concrete::Factory(Arc::new(move |_, _| Ok(Arc::new(factory()) as Resolved)))
    }

    pub fn class(name: impl Into<String>) -> Self {
        Concrete::Class(name.into())
    }

    pub fn value<T: Send + Sync + 'static>(value: T) -> Self {
        Concrete::Value(Arc::new(value))
    }

    /// The concrete returned unchanged, for bindings that cannot be built.
    pub(crate) fn into_value(self) -> Resolved {
        match self {
            Concrete::Value(value) => value,
            Concrete::Class(name) => Arc::new(name),
            Concrete::Factory(factory) => Arc::new(factory),
        }
    }
}

impl fmt::Debug for Concrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concrete::Factory(_) => f.write_str("Factory(..)"),
            Concrete::Class(name) => f.debug_tuple("Class").field(name).finish(),
            Concrete::Value(_) => f.write_str("Value(..)"),
        }
    }
}

/// An abstract -> concrete registration.
#[derive(Debug, Clone)]
pub struct Binding {
    pub concrete: Concrete,
    pub shared: bool,
}
