//! Hook registry for filters and actions
//!
//! Filters transform a value: every callback receives the current value and
//! returns its replacement. Actions notify: every callback receives a
//! shared reference to the payload.
//!
//! Callbacks run by ascending priority, ties in registration order.
//! Registering a callback id that already exists on a hook replaces it.
//!
//! ```
//! use hybrid_hooks::{HookRegistry, DEFAULT_PRIORITY};
//!
//! let hooks = HookRegistry::new();
//! hooks
//!     .add_filter("hybrid/template/path", "child-views", DEFAULT_PRIORITY, |_: String| {
//!         "views".to_string()
//!     })
//!     .unwrap();
//!
//! let path = hooks.apply_filters("hybrid/template/path", "resources/views".to_string());
//! assert_eq!(path, "views");
//! ```

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::error::{HooksError, Result};
use crate::types::{ActionFn, CallbackInfo, FilterFn, Priority, Registered};

/// In-process registry of named filters and actions.
pub struct HookRegistry {
    filters: RwLock<HashMap<String, Vec<Registered<FilterFn>>>>,
    actions: RwLock<HashMap<String, Vec<Registered<ActionFn>>>>,
    fired: RwLock<HashMap<String, usize>>,
    sequence: AtomicU64,
}

impl HookRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self {
            filters: RwLock::new(HashMap::new()),
            actions: RwLock::new(HashMap::new()),
            fired: RwLock::new(HashMap::new()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Register a filter callback for values of type `T`.
    pub fn add_filter<T, F>(&self, hook: &str, id: &str, priority: Priority, callback: F) -> Result<()>
    where
        T: 'static,
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        validate(hook, id)?;
        let hook_name = hook.to_string();
        let erased: FilterFn = Arc::new(move |value: Box<dyn Any>| match value.downcast::<T>() {
            Ok(value) => Box::new(callback(*value)) as Box<dyn Any>,
            Err(value) => {
                warn!(hook = %hook_name, expected = type_name::<T>(), "Filter skipped: payload type mismatch");
                value
            }
        });

        let entry = self.entry(id, priority, erased);
        insert_sorted(self.filters.write().entry(hook.to_string()).or_default(), entry);
        debug!(hook, id, priority, "Added filter");
        Ok(())
    }

    /// Run `value` through every filter registered on `hook`.
    pub fn apply_filters<T: 'static>(&self, hook: &str, value: T) -> T {
        // Snapshot so callbacks may register or fire hooks themselves.
        let callbacks = self.filters.read().get(hook).cloned().unwrap_or_default();
        *self.fired.write().entry(hook.to_string()).or_default() += 1;

        if callbacks.is_empty() {
            return value;
        }

        trace!(hook, callbacks = callbacks.len(), "Applying filters");
        let boxed = callbacks
            .iter()
            .fold(Box::new(value) as Box<dyn Any>, |value, registered| (registered.callback)(value));

        match boxed.downcast::<T>() {
            Ok(value) => *value,
            // Every callback returns either its own `T` or the input untouched.
            Err(_) => unreachable!("filter chain changed the payload type"),
        }
    }

    /// Register an action callback for payloads of type `A`.
    pub fn add_action<A, F>(&self, hook: &str, id: &str, priority: Priority, callback: F) -> Result<()>
    where
        A: 'static,
        F: Fn(&A) + Send + Sync + 'static,
    {
        validate(hook, id)?;
        let hook_name = hook.to_string();
        let erased: ActionFn = Arc::new(move |payload: &dyn Any| match payload.downcast_ref::<A>() {
            Some(payload) => callback(payload),
            None => {
                warn!(hook = %hook_name, expected = type_name::<A>(), "Action skipped: payload type mismatch");
            }
        });

        let entry = self.entry(id, priority, erased);
        insert_sorted(self.actions.write().entry(hook.to_string()).or_default(), entry);
        debug!(hook, id, priority, "Added action");
        Ok(())
    }

    /// Notify every action registered on `hook`.
    pub fn do_action<A: 'static>(&self, hook: &str, payload: &A) {
        let callbacks = self.actions.read().get(hook).cloned().unwrap_or_default();
        *self.fired.write().entry(hook.to_string()).or_default() += 1;

        trace!(hook, callbacks = callbacks.len(), "Doing action");
        for registered in &callbacks {
            (registered.callback)(payload);
        }
    }

    /// Remove a filter callback. Returns whether one was removed.
    pub fn remove_filter(&self, hook: &str, id: &str) -> bool {
        let removed = remove(self.filters.write().get_mut(hook), id);
        if removed {
            debug!(hook, id, "Removed filter");
        }
        removed
    }

    /// Remove an action callback. Returns whether one was removed.
    pub fn remove_action(&self, hook: &str, id: &str) -> bool {
        let removed = remove(self.actions.write().get_mut(hook), id);
        if removed {
            debug!(hook, id, "Removed action");
        }
        removed
    }

    /// Whether `hook` has filters; with an id, whether that specific one.
    pub fn has_filter(&self, hook: &str, id: Option<&str>) -> bool {
        has(self.filters.read().get(hook), id)
    }

    /// Whether `hook` has actions; with an id, whether that specific one.
    pub fn has_action(&self, hook: &str, id: Option<&str>) -> bool {
        has(self.actions.read().get(hook), id)
    }

    /// How many times a filter or action hook has been fired.
    pub fn did_action(&self, hook: &str) -> usize {
        self.fired.read().get(hook).copied().unwrap_or(0)
    }

    /// Filters on `hook` in execution order.
    pub fn filters(&self, hook: &str) -> Vec<CallbackInfo> {
        info(self.filters.read().get(hook))
    }

    /// Actions on `hook` in execution order.
    pub fn actions(&self, hook: &str) -> Vec<CallbackInfo> {
        info(self.actions.read().get(hook))
    }

    fn entry<F>(&self, id: &str, priority: Priority, callback: F) -> Registered<F> {
        Registered {
            id: id.to_string(),
            priority,
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
            callback,
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("filters", &self.filters.read().len())
            .field("actions", &self.actions.read().len())
            .finish()
    }
}

fn validate(hook: &str, id: &str) -> Result<()> {
    if hook.is_empty() || hook.chars().any(char::is_whitespace) {
        return Err(HooksError::InvalidHookName(hook.to_string()));
    }
    if id.is_empty() {
        return Err(HooksError::EmptyCallbackId(hook.to_string()));
    }
    Ok(())
}

fn insert_sorted<F>(callbacks: &mut Vec<Registered<F>>, entry: Registered<F>) {
    callbacks.retain(|existing| existing.id != entry.id);
    let position = callbacks.partition_point(|existing| existing.sort_key() <= entry.sort_key());
    callbacks.insert(position, entry);
}

fn remove<F>(callbacks: Option<&mut Vec<Registered<F>>>, id: &str) -> bool {
    match callbacks {
        Some(callbacks) => {
            let before = callbacks.len();
            callbacks.retain(|existing| existing.id != id);
            callbacks.len() != before
        }
        None => false,
    }
}

fn has<F>(callbacks: Option<&Vec<Registered<F>>>, id: Option<&str>) -> bool {
    match (callbacks, id) {
        (Some(callbacks), Some(id)) => callbacks.iter().any(|c| c.id == id),
        (Some(callbacks), None) => !callbacks.is_empty(),
        (None, _) => false,
    }
}

fn info<F>(callbacks: Option<&Vec<Registered<F>>>) -> Vec<CallbackInfo> {
    callbacks
        .map(|callbacks| {
            callbacks
                .iter()
                .map(|c| CallbackInfo {
                    id: c.id.clone(),
                    priority: c.priority,
                })
                .collect()
        })
        .unwrap_or_default()
}
