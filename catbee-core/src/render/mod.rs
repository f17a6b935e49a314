//! Render Pipeline
//!
//! This module implements the orchestration that turns one routing
//! context into one streamed HTML response.
//!
//! # Overview
//!
//! A render runs as an explicit sequence of stages: the optional signal
//! is resolved against a fresh state instance, the per-request rendering
//! context is assembled (closing the hydration script over the signal
//! outcome), and the document stream is piped into the response sink.
//! Completion and every failure are reported through the event bus; the
//! entry point neither returns values nor throws.
//!
//! # Design Decisions
//!
//! 1. The promise chain of the original pipeline is modeled as a small
//!    state machine with explicit transition functions, so the
//!    recover-and-continue semantics of signal failures are a visible
//!    transition rather than a catch-and-fallthrough.
//!
//! 2. The streaming HTML serializer is a seam ([`ComponentStream`] /
//!    [`ComponentStreamFactory`]): this crate defines the conventions it
//!    must honor (run-once flags, rendered markers, hydration), not its
//!    tree walk.

mod context;
mod error;
mod hydration;
mod pipeline;
mod renderer;
mod stream;

pub use context::{InstanceId, RenderedIds, RenderingContext};
pub use error::RenderError;
pub use hydration::{Branches, HydrationPayload, HydrationScript, SIGNAL_CACHE_VARIABLE};
pub use renderer::DocumentRenderer;
pub use stream::{pipe_into_sink, ComponentStream, ComponentStreamFactory, DocumentStream};
