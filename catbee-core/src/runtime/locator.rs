//! Service Locator
//!
//! A string-keyed registry of process-wide services. The render
//! orchestrator resolves its collaborators (event bus, config, component
//! registry, state factory, stream factory) from here at construction
//! time.
//!
//! # Contract
//!
//! Resolution is total: an unknown name or a registration of a different
//! type yields `None`, never a panic. Callers decide whether an absent
//! service is fatal or degradable.
//!
//! # Thread Safety
//!
//! The backing store is a concurrent map; registration typically happens
//! once at startup, resolution can happen from any task.

use std::any::Any;

use dashmap::DashMap;

/// Locator key for the process-wide [`EventBus`](super::EventBus).
pub const EVENT_BUS: &str = "eventBus";
/// Locator key for the process-wide [`Config`](super::Config).
pub const CONFIG: &str = "config";
/// Locator key for the [`ComponentRegistry`](crate::component::ComponentRegistry).
pub const COMPONENT_REGISTRY: &str = "componentRegistry";
/// Locator key for the [`StateFactory`](super::StateFactory).
pub const STATE_FACTORY: &str = "stateFactory";
/// Locator key for the
/// [`ComponentStreamFactory`](crate::render::ComponentStreamFactory).
pub const COMPONENT_STREAM_FACTORY: &str = "componentStreamFactory";

/// String-keyed registry of `Any`-erased services.
///
/// Services are registered under a name and resolved back by name plus
/// type. Shared services are registered as `Arc<T>` (or `Arc<dyn Trait>`)
/// so that resolution hands out cheap clones.
///
/// # Example
///
/// ```rust,ignore
/// let locator = ServiceLocator::new();
/// locator.register(locator::EVENT_BUS, Arc::new(EventBus::new()));
///
/// let bus: Arc<EventBus> = locator.resolve(locator::EVENT_BUS).unwrap();
/// ```
pub struct ServiceLocator {
    services: DashMap<String, Box<dyn Any + Send + Sync>>,
}

impl ServiceLocator {
    /// Create an empty locator.
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Register a service under the given name, replacing any previous
    /// registration for that name.
    pub fn register<T>(&self, name: &str, service: T)
    where
        T: Send + Sync + 'static,
    {
        self.services.insert(name.to_string(), Box::new(service));
    }

    /// Resolve a service by name.
    ///
    /// Returns `None` when nothing is registered under `name` or when the
    /// registration is of a different type.
    pub fn resolve<T>(&self, name: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let entry = self.services.get(name)?;
        entry.value().downcast_ref::<T>().cloned()
    }

    /// Check whether anything is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Remove a registration. Unknown names are ignored.
    pub fn unregister(&self, name: &str) {
        self.services.remove(name);
    }
}

impl Default for ServiceLocator {
    fn default() -> Self {
        Self::new()
    }
}
