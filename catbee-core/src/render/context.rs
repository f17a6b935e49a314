//! Rendering Context
//!
//! The per-request bundle of dependencies and flags handed to the
//! streaming renderer. Exactly one context exists per render call; it is
//! built after signal resolution completes and consumed by the document
//! stream, so the hydration script can only reflect a signal outcome that
//! was available before the first serialized byte.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::component::ComponentModule;
use crate::runtime::{Config, EventBus, RoutingContext, SignalState};

use super::hydration::HydrationScript;

/// Unique identifier of a component instance within a render.
///
/// Assigned by the streaming renderer when it encounters a component
/// boundary; used to serialize each instance exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Generate a new unique instance ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u64> for InstanceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Rendered markers for component instances.
///
/// Grows monotonically during one render and is discarded with the
/// context when the stream finishes.
#[derive(Debug, Default)]
pub struct RenderedIds {
    ids: HashSet<InstanceId>,
}

impl RenderedIds {
    /// Create an empty marker set.
    pub fn new() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }

    /// Mark an instance as rendered.
    ///
    /// Returns `true` when this call marked it first; a repeated mark
    /// returns `false` and the instance must not be serialized again.
    pub fn mark(&mut self, id: InstanceId) -> bool {
        self.ids.insert(id)
    }

    /// Check whether an instance was already rendered.
    pub fn is_rendered(&self, id: InstanceId) -> bool {
        self.ids.contains(&id)
    }

    /// Get the number of rendered instances.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether nothing was rendered yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Per-render dependency bundle consumed by the streaming renderer.
pub struct RenderingContext {
    state: Box<dyn SignalState>,
    routing_context: Arc<RoutingContext>,
    hydration: HydrationScript,
    is_document_rendered: bool,
    is_head_rendered: bool,
    config: Arc<Config>,
    event_bus: Arc<EventBus>,
    document: Option<Arc<dyn ComponentModule>>,
    rendered_ids: RenderedIds,
}

impl RenderingContext {
    /// Assemble the context for one render.
    pub fn new(
        state: Box<dyn SignalState>,
        routing_context: Arc<RoutingContext>,
        hydration: HydrationScript,
        config: Arc<Config>,
        event_bus: Arc<EventBus>,
        document: Option<Arc<dyn ComponentModule>>,
    ) -> Self {
        Self {
            state,
            routing_context,
            hydration,
            is_document_rendered: false,
            is_head_rendered: false,
            config,
            event_bus,
            document,
            rendered_ids: RenderedIds::new(),
        }
    }

    /// The per-render state instance.
    pub fn state(&self) -> &dyn SignalState {
        self.state.as_ref()
    }

    /// The routing context this render was started with.
    pub fn routing_context(&self) -> &Arc<RoutingContext> {
        &self.routing_context
    }

    /// Produce the hydration markup for this render.
    pub fn hydration_script(&self) -> String {
        self.hydration.render()
    }

    /// Process-wide configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The event bus failures during streaming are reported to.
    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    /// The root document component module, if one was registered.
    pub fn document(&self) -> Option<&Arc<dyn ComponentModule>> {
        self.document.as_ref()
    }

    /// Whether the root document element was emitted.
    pub fn is_document_rendered(&self) -> bool {
        self.is_document_rendered
    }

    /// Whether the head element was emitted.
    pub fn is_head_rendered(&self) -> bool {
        self.is_head_rendered
    }

    /// Record that the root document element was emitted.
    ///
    /// The flag transitions false→true exactly once; returns `true` when
    /// this call made the transition.
    pub fn mark_document_rendered(&mut self) -> bool {
        !std::mem::replace(&mut self.is_document_rendered, true)
    }

    /// Record that the head element was emitted. Same contract as
    /// [`mark_document_rendered`](Self::mark_document_rendered).
    pub fn mark_head_rendered(&mut self) -> bool {
        !std::mem::replace(&mut self.is_head_rendered, true)
    }

    /// Rendered markers for this render.
    pub fn rendered_ids(&self) -> &RenderedIds {
        &self.rendered_ids
    }

    /// Mutable rendered markers for this render.
    pub fn rendered_ids_mut(&mut self) -> &mut RenderedIds {
        &mut self.rendered_ids
    }
}
