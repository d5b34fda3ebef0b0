//! Core data types for the hooks system

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Callback priority. Lower runs first.
pub type Priority = i32;

/// Priority used when a caller has no preference.
pub const DEFAULT_PRIORITY: Priority = 10;

/// Type-erased filter callback: takes the boxed value, returns the boxed
/// replacement.
pub(crate) type FilterFn = Arc<dyn Fn(Box<dyn Any>) -> Box<dyn Any> + Send + Sync>;

/// Type-erased action callback.
pub(crate) type ActionFn = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// A callback registered on a hook.
#[derive(Clone)]
pub(crate) struct Registered<F> {
    pub id: String,
    pub priority: Priority,
    /// Registration counter; breaks priority ties in insertion order.
    pub sequence: u64,
    pub callback: F,
}

impl<F> Registered<F> {
    pub fn sort_key(&self) -> (Priority, u64) {
        (self.priority, self.sequence)
    }
}

impl<F> fmt::Debug for Registered<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registered")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Public view of a registered callback, for introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackInfo {
    pub id: String,
    pub priority: Priority,
}
