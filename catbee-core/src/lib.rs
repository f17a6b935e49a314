//! Catbee Core
//!
//! This crate provides the server-side rendering runtime for the Catbee
//! component framework. It implements:
//!
//! - The render orchestration pipeline (signal resolution, context
//!   construction, streaming render, completion/error reporting)
//! - Component naming and dynamic method dispatch conventions
//! - The hydration contract embedding signal results for client reuse
//!
//! The streaming HTML serializer, the state store behind signals, and the
//! HTTP layer are external collaborators wired in through the service
//! locator; this crate defines their seams.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `component`: naming conventions, module dispatch, component registry
//! - `render`: the per-request pipeline and rendering context
//! - `runtime`: locator, event bus, config, routing input, state facade
//!
//! # Example
//!
//! ```rust,ignore
//! use catbee_core::render::DocumentRenderer;
//! use catbee_core::runtime::{locator, RoutingContext, ServiceLocator};
//!
//! let service_locator = ServiceLocator::new();
//! // register eventBus, config, componentRegistry, stateFactory,
//! // componentStreamFactory ...
//!
//! let renderer = DocumentRenderer::new(&service_locator);
//!
//! // per request, fire-and-forget; outcomes arrive on the event bus
//! renderer.render(Arc::new(routing_context));
//! ```

pub mod component;
pub mod render;
pub mod runtime;
