//! Constructor auto-wiring for registered classes
//!
//! Rust has no runtime reflection, so a type opts into auto-wiring by
//! implementing [`Buildable`]: it names itself, declares its constructor
//! parameters, and builds itself from the arguments the container resolved.
//!
//! Classes reach the container either explicitly through
//! [`Container::register_class`](crate::Container::register_class) or by
//! submitting a [`ClassRegistration`] with `inventory`, which every new
//! container picks up:
//!
//! ```rust,ignore
//! use hybrid_container::{Arguments, Buildable, ClassDescriptor, ClassRegistration, Parameter};
//!
//! struct Mailer { transport: Arc<Transport> }
//!
//! impl Buildable for Mailer {
//!     fn class_name() -> &'static str { "Mailer" }
//!     fn parameters() -> Vec<Parameter> {
//!         vec![Parameter::new("transport").class("Transport")]
//!     }
//!     fn build(args: &Arguments) -> hybrid_container::Result<Self> {
//!         Ok(Self { transport: args.get("transport")? })
//!     }
//! }
//!
//! inventory::submit! { ClassRegistration::new(ClassDescriptor::of::<Mailer>) }
//! ```

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{ContainerError, Resolved, Result};

/// A declared constructor parameter.
#[derive(Clone)]
pub struct Parameter {
    pub name: &'static str,
    /// Class (or abstract) the parameter is typed as, resolved recursively.
    pub class: Option<&'static str>,
    /// Value used when nothing else satisfies the parameter.
    pub default: Option<Resolved>,
}

impl Parameter {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            class: None,
            default: None,
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn default_value<T: Send + Sync + 'static>(mut self, value: T) -> Self {
        self.default = Some(Arc::new(value));
        self
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("class", &self.class)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

/// Resolved constructor arguments, keyed by parameter name.
#[derive(Default)]
pub struct Arguments {
    class: &'static str,
    values: HashMap<&'static str, Resolved>,
}

impl Arguments {
    pub(crate) fn new(class: &'static str) -> Self {
        Self {
            class,
            values: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: &'static str, value: Resolved) {
        self.values.insert(name, value);
    }

    /// Typed access to an argument.
    pub fn get<T: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| ContainerError::Unresolvable {
                abstract_name: self.class.to_string(),
                parameter: name.to_string(),
            })?;

        value
            .clone()
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                abstract_name: format!("{}::{}", self.class, name),
                expected: type_name::<T>(),
            })
    }

    /// Raw access, for parameters typed as `Resolved` themselves.
    pub fn raw(&self, name: &str) -> Option<&Resolved> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A type the container can construct from its declared parameters.
pub trait Buildable: Send + Sync + Sized + 'static {
    /// The class name used as an abstract.
    fn class_name() -> &'static str;

    /// Constructor signature; empty means no-arg construction.
    fn parameters() -> Vec<Parameter> {
        Vec::new()
    }

    fn build(args: &Arguments) -> Result<Self>;
}

/// Type-erased constructor information for one class.
#[derive(Clone)]
pub struct ClassDescriptor {
    pub name: &'static str,
    pub parameters: fn() -> Vec<Parameter>,
    pub build: fn(&Arguments) -> Result<Resolved>,
}

impl ClassDescriptor {
    pub fn of<B: Buildable>() -> Self {
        Self {
            name: B::class_name(),
            parameters: B::parameters,
            build: build_erased::<B>,
        }
    }
}

impl fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("name", &self.name)
            .finish()
    }
}

fn build_erased<B: Buildable>(args: &Arguments) -> Result<Resolved> {
    let object = B::build(args)?;
    Ok(Arc::new(object) as Arc<dyn Any + Send + Sync>)
}

/// Link-time class registration collected with `inventory`.
pub struct ClassRegistration {
    pub describe: fn() -> ClassDescriptor,
}

impl ClassRegistration {
    pub const fn new(describe: fn() -> ClassDescriptor) -> Self {
        Self { describe }
    }
}

inventory::collect!(ClassRegistration);

/// Every class submitted through `inventory::submit!`.
pub fn discovered_classes() -> Vec<ClassDescriptor> {
    inventory::iter::<ClassRegistration>()
        .map(|registration| (registration.describe)())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Clock;

    impl Buildable for Clock {
        fn class_name() -> &'static str {
            "DiscoveredClock"
        }

        fn build(_args: &Arguments) -> Result<Self> {
            Ok(Clock)
        }
    }

    inventory::submit! {
        ClassRegistration::new(ClassDescriptor::of::<Clock>)
    }

    #[test]
    fn test_discovered_classes_include_submission() {
        let names: Vec<_> = discovered_classes().iter().map(|c| c.name).collect();
        assert!(names.contains(&"DiscoveredClock"));
    }

    #[test]
    fn test_arguments_typed_access() {
        let mut args = Arguments::new("Widget");
        args.insert("size", Arc::new(3usize));

        assert_eq!(*args.get::<usize>("size").unwrap(), 3);
        assert!(matches!(
            args.get::<String>("size"),
            Err(ContainerError::TypeMismatch { .. })
        ));
        assert!(matches!(
            args.get::<usize>("missing"),
            Err(ContainerError::Unresolvable { .. })
        ));
    }
}
