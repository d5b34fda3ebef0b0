//! Hybrid Core Hooks
//!
//! Named extension points shared by every Hybrid Core component.
//!
//! # Overview
//!
//! Components never call each other's customization code directly. Instead
//! they fire a named hook and let whoever registered on it take part:
//!
//! 1. **Filters** (`add_filter` / `apply_filters`): pass a value through every
//!    registered callback, each returning the value for the next one
//! 2. **Actions** (`add_action` / `do_action`): notify every registered
//!    callback with a shared payload
//!
//! Callbacks are ordered by ascending priority (`DEFAULT_PRIORITY` is 10);
//! equal priorities run in registration order. Each callback carries an id
//! so it can be replaced or removed later.
//!
//! # Payload Types
//!
//! Hooks are not typed at registration time. A callback declares the payload
//! type it accepts, and when a hook fires with a different type the callback
//! is skipped and a warning is logged. Firing a hook never fails.
//!
//! # Thread Safety
//!
//! `HookRegistry` is `Send + Sync`. The callback list is snapshotted before
//! it runs, so callbacks may register or fire other hooks.

pub mod error;
pub mod registry;
pub mod types;

pub use error::{HooksError, Result};
pub use registry::HookRegistry;
pub use types::{CallbackInfo, Priority, DEFAULT_PRIORITY};
