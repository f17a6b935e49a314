//! Component Layer
//!
//! This module defines what a component is to the rendering kernel: a
//! named module with by-name-discoverable methods, a naming convention
//! tying registry names to DOM tags, and a dispatch rule that always
//! yields a callable target.
//!
//! # Overview
//!
//! - `naming`: pure mappings between registry names and tag names, plus
//!   component/slot node classification. Two names are reserved:
//!   `document` (the root element) and `head`.
//!
//! - `module`: the [`ComponentModule`] trait. Components expose zero or
//!   more methods discoverable by name; there is no fixed lifecycle
//!   interface.
//!
//! - `dispatch`: the precedence rule resolving a lifecycle/event name to a
//!   bound callable, with an explicit no-op fallback, and the
//!   per-registration [`DispatchTable`].
//!
//! - `registry`: name-indexed component storage; tag names and lifecycle
//!   tables are derived once at registration.
//!
//! # Design Decisions
//!
//! 1. Method resolution is computed at registration rather than per call:
//!    rendering dispatches through a precomputed table.
//!
//! 2. The "no method" case is a tagged variant, not an absent value, so
//!    dispatch sites invoke unconditionally.

pub mod naming;

mod dispatch;
mod module;
mod registry;

pub use dispatch::{
    get_camel_case_name, get_method_to_invoke, safe_future, BoundMethod, DispatchTable,
};
pub use module::{ComponentError, ComponentModule, MethodFuture, MethodMap, ModuleMethod};
pub use registry::{ComponentRegistration, ComponentRegistry, LIFECYCLE_HOOKS};
