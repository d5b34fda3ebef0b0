//! Dependency Injection Container for Hybrid Core
//!
//! A string-keyed registry of abstracts. Each abstract is bound to a
//! closure, a class name, or a plain value; bindings may be shared
//! (singletons), aliased, and decorated with extensions. Classes that
//! implement [`Buildable`] are constructed by auto-wiring their declared
//! constructor parameters.
//!
//! ## Quick Start
//!
//! ```rust
//! use hybrid_container::{Concrete, Container};
//! use std::sync::Arc;
//!
//! struct Connection;
//!
//! let container = Container::new();
//! container.singleton("db", Some(Concrete::from_fn(|| Connection)));
//!
//! let first = container.get::<Connection>("db").unwrap();
//! let second = container.get::<Connection>("db").unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//! ```
//!
//! [`Application`] layers a two-phase provider lifecycle on top: every
//! [`ServiceProvider`] registers before any of them boots.

pub mod application;
pub mod binding;
pub mod class;
pub mod container;
pub mod error;
pub mod provider;

pub use application::{AppPaths, Application};
pub use binding::{Binding, Concrete, Extender, Factory, Parameters, Resolved};
pub use class::{discovered_classes, Arguments, Buildable, ClassDescriptor, ClassRegistration, Parameter};
pub use container::Container;
pub use error::{ContainerError, Result};
pub use provider::ServiceProvider;
