//! The container: bindings, singletons, aliases and extensions

use std::any::type_name;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, trace};

use crate::binding::{Binding, Concrete, Extender, Parameters, Resolved};
use crate::class::{discovered_classes, Arguments, Buildable, ClassDescriptor};
use crate::{ContainerError, Result};

#[derive(Default)]
struct Registry {
    bindings: HashMap<String, Binding>,
    instances: HashMap<String, Resolved>,
    aliases: HashMap<String, String>,
    extensions: HashMap<String, Vec<Extender>>,
    classes: HashMap<&'static str, ClassDescriptor>,
}

thread_local! {
    // (container address, abstract) pairs currently being built on this thread
    static RESOLVING: RefCell<Vec<(usize, String)>> = const { RefCell::new(Vec::new()) };
}

struct ResolutionGuard {
    container: usize,
}

impl ResolutionGuard {
    fn enter(container: usize, abstract_name: &str) -> Result<Self> {
        RESOLVING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack
                .iter()
                .any(|(owner, name)| *owner == container && name == abstract_name)
            {
                let mut chain: Vec<String> = stack
                    .iter()
                    .filter(|(owner, _)| *owner == container)
                    .map(|(_, name)| name.clone())
                    .collect();
                chain.push(abstract_name.to_string());
                return Err(ContainerError::Circular { chain });
            }
            stack.push((container, abstract_name.to_string()));
            Ok(Self { container })
        })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLVING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(position) = stack.iter().rposition(|(owner, _)| *owner == self.container) {
                stack.remove(position);
            }
        });
    }
}

/// Registry mapping abstract names to concretes.
///
/// All methods take `&self`; the registry lock is never held while a
/// factory, constructor, or extension runs, so those may call back into the
/// container freely.
pub struct Container {
    registry: RwLock<Registry>,
}

impl Container {
    /// Create an empty container that already knows every class submitted
    /// through `inventory`.
    pub fn new() -> Self {
        let classes = discovered_classes()
            .into_iter()
            .map(|descriptor| (descriptor.name, descriptor))
            .collect();

        Self {
            registry: RwLock::new(Registry {
                classes,
                ..Registry::default()
            }),
        }
    }

    /// Bind an abstract to a concrete. With no concrete the abstract is
    /// bound to itself as a class name.
    ///
    /// Re-binding replaces the previous binding, drops any cached instance
    /// and resets the abstract's extensions.
    pub fn bind(&self, abstract_name: impl Into<String>, concrete: Option<Concrete>, shared: bool) {
        let abstract_name = abstract_name.into();
        let concrete = concrete.unwrap_or_else(|| Concrete::Class(abstract_name.clone()));

        let mut registry = self.registry.write();
        registry.instances.remove(&abstract_name);
        registry.extensions.insert(abstract_name.clone(), Vec::new());
        debug!(abstract_name = %abstract_name, shared, "Bound {:?}", concrete);
        registry
            .bindings
            .insert(abstract_name, Binding { concrete, shared });
    }

    /// Alias of [`bind`](Self::bind).
    pub fn add(&self, abstract_name: impl Into<String>, concrete: Option<Concrete>, shared: bool) {
        self.bind(abstract_name, concrete, shared);
    }

    /// Bind a shared abstract: built once, then cached.
    pub fn singleton(&self, abstract_name: impl Into<String>, concrete: Option<Concrete>) {
        self.bind(abstract_name, concrete, true);
    }

    /// Store a pre-built value, returned verbatim by every resolve.
    pub fn instance<T: Send + Sync + 'static>(&self, abstract_name: impl Into<String>, value: T) -> Arc<T> {
        let value = Arc::new(value);
        self.instance_arc(abstract_name, value.clone());
        value
    }

    /// Store an already type-erased value.
    pub fn instance_arc(&self, abstract_name: impl Into<String>, value: Resolved) {
        let abstract_name = abstract_name.into();
        debug!(abstract_name = %abstract_name, "Stored instance");
        self.registry.write().instances.insert(abstract_name, value);
    }

    /// Make `alias` resolve to `abstract_name`.
    pub fn alias(&self, abstract_name: impl Into<String>, alias: impl Into<String>) {
        let abstract_name = abstract_name.into();
        let alias = alias.into();
        debug!(alias = %alias, abstract_name = %abstract_name, "Registered alias");
        self.registry.write().aliases.insert(alias, abstract_name);
    }

    /// Follow the alias chain to the true abstract name.
    pub fn get_alias(&self, name: &str) -> String {
        let registry = self.registry.read();
        Self::dealias(&registry, name)
    }

    fn dealias(registry: &Registry, name: &str) -> String {
        let mut current = name.to_string();
        let mut seen = HashSet::new();
        while let Some(target) = registry.aliases.get(&current) {
            if !seen.insert(current.clone()) {
                break;
            }
            current = target.clone();
        }
        current
    }

    /// Register a decorator for freshly built objects of `abstract_name`.
    pub fn extend(&self, abstract_name: &str, extender: Extender) {
        let mut registry = self.registry.write();
        let abstract_name = Self::dealias(&registry, abstract_name);
        debug!(abstract_name = %abstract_name, "Registered extension");
        registry
            .extensions
            .entry(abstract_name)
            .or_default()
            .push(extender);
    }

    /// Typed [`extend`](Self::extend). Objects of another type pass through
    /// untouched.
    pub fn extend_with<T, F>(&self, abstract_name: &str, extender: F)
    where
        T: Send + Sync + 'static,
        F: Fn(Arc<T>, &Container) -> T + Send + Sync + 'static,
    {
        let name = abstract_name.to_string();
        self.extend(
            abstract_name,
            Arc::new(move |object: Resolved, container: &Container| match object.downcast::<T>() {
                Ok(typed) => Arc::new(extender(typed, container)) as Resolved,
                Err(object) => {
                    error!(abstract_name = %name, expected = type_name::<T>(), "Extension skipped: type mismatch");
                    object
                }
            }),
        );
    }

    /// Make a [`Buildable`] type available as a class name.
    pub fn register_class<B: Buildable>(&self) {
        let descriptor = ClassDescriptor::of::<B>();
        debug!(class = descriptor.name, "Registered class");
        self.registry.write().classes.insert(descriptor.name, descriptor);
    }

    /// True if the abstract (or what it aliases) is bound or instantiated.
    pub fn has(&self, abstract_name: &str) -> bool {
        let registry = self.registry.read();
        let abstract_name = Self::dealias(&registry, abstract_name);
        registry.bindings.contains_key(&abstract_name) || registry.instances.contains_key(&abstract_name)
    }

    /// True if a binding or alias exists under this name.
    pub fn bound(&self, abstract_name: &str) -> bool {
        let registry = self.registry.read();
        registry.bindings.contains_key(abstract_name) || registry.aliases.contains_key(abstract_name)
    }

    /// True if a cached instance exists.
    pub fn resolved(&self, abstract_name: &str) -> bool {
        let registry = self.registry.read();
        let abstract_name = Self::dealias(&registry, abstract_name);
        registry.instances.contains_key(&abstract_name)
    }

    /// Forget everything stored under this name.
    pub fn remove(&self, abstract_name: &str) {
        let mut registry = self.registry.write();
        registry.bindings.remove(abstract_name);
        registry.instances.remove(abstract_name);
        registry.extensions.remove(abstract_name);
        registry.aliases.remove(abstract_name);
        debug!(abstract_name, "Removed");
    }

    /// Resolve an abstract.
    ///
    /// Returns `Ok(None)` for an abstract that was never bound and cannot be
    /// built as a class. Errors are reserved for failures while building.
    pub fn resolve(&self, abstract_name: &str, parameters: &Parameters) -> Result<Option<Resolved>> {
        let (abstract_name, concrete, shared, bound, buildable) = {
            let registry = self.registry.read();
            let abstract_name = Self::dealias(&registry, abstract_name);

            if let Some(instance) = registry.instances.get(&abstract_name) {
                trace!(abstract_name = %abstract_name, "Served cached instance");
                return Ok(Some(instance.clone()));
            }

            let (concrete, shared, bound) = match registry.bindings.get(&abstract_name) {
                Some(binding) => (binding.concrete.clone(), binding.shared, true),
                None => (Concrete::Class(abstract_name.clone()), false, false),
            };
            let buildable = match &concrete {
                Concrete::Factory(_) => true,
                Concrete::Class(name) => registry.classes.contains_key(name.as_str()),
                Concrete::Value(_) => false,
            };
            (abstract_name, concrete, shared, bound, buildable)
        };

        if !buildable {
            if !bound {
                trace!(abstract_name = %abstract_name, "Nothing bound");
                return Ok(None);
            }
            return Ok(Some(concrete.into_value()));
        }

        // Held until extensions have run: an extender of a non-shared
        // abstract that resolves that abstract again is a cycle.
        let _guard = ResolutionGuard::enter(self as *const Self as usize, &abstract_name)?;
        let object = self.build(&abstract_name, concrete, parameters)?;

        // A shared base object is cached before extension, so an extender
        // resolving its own abstract gets the base back.
        if shared {
            let mut registry = self.registry.write();
            if let Some(cached) = registry.instances.get(&abstract_name) {
                // Another thread finished first.
                return Ok(Some(cached.clone()));
            }
            registry.instances.insert(abstract_name.clone(), object.clone());
            debug!(abstract_name = %abstract_name, "Cached shared instance");
        }

        let extensions = self
            .registry
            .read()
            .extensions
            .get(&abstract_name)
            .cloned()
            .unwrap_or_default();
        if extensions.is_empty() {
            return Ok(Some(object));
        }

        let object = extensions
            .iter()
            .fold(object, |object, extender| extender(object, self));

        if shared {
            self.registry
                .write()
                .instances
                .insert(abstract_name.clone(), object.clone());
            debug!(abstract_name = %abstract_name, "Cached extended shared instance");
        }

        Ok(Some(object))
    }

    /// Typed, soft resolution: `None` when unbound, of another type, or when
    /// building failed (the failure is logged).
    pub fn get<T: Send + Sync + 'static>(&self, abstract_name: &str) -> Option<Arc<T>> {
        match self.make::<T>(abstract_name) {
            Ok(object) => Some(object),
            Err(ContainerError::NotBound(_)) => None,
            Err(err) => {
                error!(abstract_name, "Resolution failed: {}", err);
                None
            }
        }
    }

    /// Typed, strict resolution with no parameters.
    pub fn make<T: Send + Sync + 'static>(&self, abstract_name: &str) -> Result<Arc<T>> {
        self.make_with(abstract_name, &Parameters::new())
    }

    /// Typed, strict resolution.
    pub fn make_with<T: Send + Sync + 'static>(
        &self,
        abstract_name: &str,
        parameters: &Parameters,
    ) -> Result<Arc<T>> {
        let object = self
            .resolve(abstract_name, parameters)?
            .ok_or_else(|| ContainerError::NotBound(abstract_name.to_string()))?;

        object.downcast::<T>().map_err(|_| ContainerError::TypeMismatch {
            abstract_name: abstract_name.to_string(),
            expected: type_name::<T>(),
        })
    }

    /// Number of bindings (aliases and bare instances excluded).
    pub fn binding_count(&self) -> usize {
        self.registry.read().bindings.len()
    }

    fn build(&self, abstract_name: &str, concrete: Concrete, parameters: &Parameters) -> Result<Resolved> {
        match concrete {
            Concrete::Factory(factory) => {
                trace!(abstract_name, "Invoking factory");
                factory(self, parameters)
            }
            Concrete::Class(class) => self.build_class(&class, parameters),
            Concrete::Value(value) => Ok(value),
        }
    }

    fn build_class(&self, class: &str, parameters: &Parameters) -> Result<Resolved> {
        let descriptor = self
            .registry
            .read()
            .classes
            .get(class)
            .cloned()
            .ok_or_else(|| ContainerError::NotBound(class.to_string()))?;

        let mut arguments = Arguments::new(descriptor.name);
        for parameter in (descriptor.parameters)() {
            if let Some(value) = parameters.get(parameter.name) {
                arguments.insert(parameter.name, value.clone());
                continue;
            }

            let dependency = match parameter.class {
                Some(dependency) => self.resolve(dependency, &Parameters::new())?,
                None => None,
            };

            match dependency.or(parameter.default) {
                Some(value) => arguments.insert(parameter.name, value),
                None => {
                    return Err(ContainerError::Unresolvable {
                        abstract_name: descriptor.name.to_string(),
                        parameter: parameter.name.to_string(),
                    })
                }
            }
        }

        trace!(class = descriptor.name, arguments = arguments.len(), "Constructing class");
        (descriptor.build)(&arguments)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.read();
        f.debug_struct("Container")
            .field("bindings", &registry.bindings.len())
            .field("instances", &registry.instances.len())
            .field("aliases", &registry.aliases.len())
            .field("classes", &registry.classes.len())
            .finish()
    }
}
