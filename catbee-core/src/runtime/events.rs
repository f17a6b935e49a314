//! Event Bus
//!
//! The event bus is the only channel through which the render pipeline
//! reports outcomes. `render()` never returns a value and never throws;
//! operators observe completions and failures by subscribing here.
//!
//! # Events
//!
//! - `Failure`: a stage of the pipeline failed. Depending on the stage this
//!   may or may not have prevented a response (a failed signal still
//!   produces a page, a failed sink does not).
//!
//! - `DocumentRendered`: the response sink reported completion for one
//!   render. Carries the routing context the render was started with.
//!
//! # Thread Safety
//!
//! Listeners are stored behind an RwLock and invoked synchronously on the
//! emitting task. Emission never blocks on listener acknowledgment; the bus
//! is a fire-and-forget notification sink.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::routing::RoutingContext;

/// Unique identifier for a bus listener.
///
/// Returned by [`EventBus::subscribe`] and used to remove the listener
/// later. Uses an atomic counter to ensure uniqueness across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Generate a new unique listener ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification emitted by the render pipeline.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    /// A pipeline stage failed. `reason` is the display form of the
    /// underlying error.
    Failure {
        /// Human-readable failure reason.
        reason: String,
    },

    /// One render completed: the response sink reported that the last byte
    /// was accepted.
    DocumentRendered {
        /// The routing context the completed render was started with.
        routing_context: Arc<RoutingContext>,
    },
}

type Listener = Box<dyn Fn(&RenderEvent) + Send + Sync>;

/// Process-wide sink for render lifecycle notifications.
///
/// # Example
///
/// ```rust,ignore
/// let bus = EventBus::new();
///
/// let id = bus.subscribe(|event| {
///     if let RenderEvent::Failure { reason } = event {
///         eprintln!("render failed: {}", reason);
///     }
/// });
///
/// // ...
///
/// bus.unsubscribe(id);
/// ```
pub struct EventBus {
    /// Registered listeners, invoked in subscription order.
    listeners: RwLock<Vec<(ListenerId, Listener)>>,
}

impl EventBus {
    /// Create a new bus with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Register a listener and return its ID.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&RenderEvent) + Send + Sync + 'static,
    {
        let id = ListenerId::new();
        self.listeners.write().push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Unknown IDs are ignored.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.write().retain(|(listener_id, _)| *listener_id != id);
    }

    /// Deliver an event to every registered listener.
    pub fn emit(&self, event: &RenderEvent) {
        let listeners = self.listeners.read();
        for (_, listener) in listeners.iter() {
            listener(event);
        }
    }

    /// Get the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
