//! Runtime Services
//!
//! This module holds the process-wide plumbing the render pipeline is wired
//! with, and the request-scoped input it consumes.
//!
//! # Concepts
//!
//! ## Service Locator
//!
//! A string-keyed registry the orchestrator resolves its collaborators
//! from at construction time. Resolution is total: unknown names yield
//! `None`, never a panic.
//!
//! ## Event Bus
//!
//! The only output channel of the pipeline besides the response bytes.
//! `render()` is fire-and-forget; completions and failures are delivered
//! as typed events to subscribed listeners.
//!
//! ## Routing Context
//!
//! The per-request input built by an external router: route arguments
//! (with the optional signal name) plus the response sink.
//!
//! ## State Facade
//!
//! The interface to the store owning component state. One instance per
//! render; its `signal` operation is the asynchronous state-preparation
//! phase that runs strictly before the first byte is serialized.

mod config;
mod events;
pub mod locator;
mod routing;
mod state;

pub use config::Config;
pub use events::{EventBus, ListenerId, RenderEvent};
pub use locator::ServiceLocator;
pub use routing::{Middleware, ResponseSink, RouteArgs, RoutingContext};
pub use state::{SignalError, SignalState, StateFactory};
