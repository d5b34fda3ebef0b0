//! Hybrid Core templates
//!
//! # Overview
//!
//! - [`Hierarchy`] resolves the template file for a request described by a
//!   [`PageContext`], trying every matching [`PageType`] in a fixed order and
//!   recording the full candidate hierarchy along the way.
//! - [`View`] resolves a named template slot through a slug hierarchy and
//!   renders it with handlebars.
//! - [`Templates`] holds the [`ObjectTemplate`]s editors can assign to
//!   posts, terms and users.
//!
//! Lookups go through a [`TemplateLocator`]; [`ThemeLocator`] searches the
//! active theme's views directory, then the parent theme's.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! use hybrid_hooks::HookRegistry;
//! use hybrid_template::{Hierarchy, PageContext, PostContext, ThemeLocator};
//!
//! let hooks = Arc::new(HookRegistry::new());
//! let locator = Arc::new(ThemeLocator::new(
//!     vec![PathBuf::from("/themes/child"), PathBuf::from("/themes/parent")],
//!     "resources/views",
//!     hooks.clone(),
//! ));
//! let hierarchy = Hierarchy::new(hooks, locator);
//!
//! let template = hierarchy.resolve(&PageContext::single(PostContext::new(42, "post", "hello-world")));
//! println!("{:?} via {:?}", template, hierarchy.hierarchy());
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod hierarchy;
pub mod locator;
pub mod object_template;
pub mod page_type;
pub mod rules;
pub mod templates;
pub mod view;

pub use context::{Condition, DateQuery, PageContext, PostContext, TermContext, UserContext};
pub use engine::RenderEngine;
pub use error::{Result, TemplateError};
pub use hierarchy::{Hierarchy, HierarchyRecord, HIERARCHY_HOOK, TEMPLATE_INCLUDE_HOOK};
pub use locator::{TemplateLocator, ThemeLocator, VIEW_PATH_HOOK};
pub use object_template::{sanitize_key, ObjectTemplate, ObjectTemplateArgs};
pub use page_type::{PageType, UnknownPageType, PIPELINE};
pub use templates::{Templates, ThemeTemplates, REGISTER_HOOK, THEME_TEMPLATES_HOOK};
pub use view::{TemplatePart, View, ViewData, ViewFactory};
