//! Document Renderer
//!
//! The entry point of the rendering kernel. One renderer instance serves
//! the whole process: collaborators are resolved from the locator once at
//! construction, then every `render()` call spawns an independent
//! pipeline.
//!
//! `render()` is fire-and-forget. It never blocks the caller, never
//! returns a value and never panics; completion and failure are observable
//! only through the event bus.

use std::sync::Arc;

use tracing::error;

use crate::component::{ComponentModule, ComponentRegistry};
use crate::runtime::locator;
use crate::runtime::{Config, EventBus, RenderEvent, RoutingContext, ServiceLocator, StateFactory};

use super::error::RenderError;
use super::pipeline::RenderPipeline;
use super::stream::ComponentStreamFactory;

/// The render orchestrator.
///
/// # Example
///
/// ```rust,ignore
/// let renderer = DocumentRenderer::new(&locator);
///
/// // per request:
/// renderer.render(Arc::new(routing_context));
/// ```
pub struct DocumentRenderer {
    event_bus: Arc<EventBus>,
    config: Arc<Config>,
    document: Option<Arc<dyn ComponentModule>>,
    state_factory: Option<Arc<dyn StateFactory>>,
    stream_factory: Option<Arc<dyn ComponentStreamFactory>>,
}

impl DocumentRenderer {
    /// Resolve collaborators from the locator and build the renderer.
    ///
    /// Construction is total. A missing event bus or config falls back to
    /// process defaults; a missing `document` component is reported once
    /// through the bus and leaves the renderer in a degraded state where
    /// streaming cannot produce a complete page. Missing factories
    /// surface per render as pipeline failures.
    pub fn new(service_locator: &ServiceLocator) -> Self {
        let event_bus = service_locator
            .resolve::<Arc<EventBus>>(locator::EVENT_BUS)
            .unwrap_or_default();
        let config = service_locator
            .resolve::<Arc<Config>>(locator::CONFIG)
            .unwrap_or_default();
        let document = Self::load_document_component(service_locator, &event_bus);

        Self {
            event_bus,
            config,
            document,
            state_factory: service_locator.resolve(locator::STATE_FACTORY),
            stream_factory: service_locator.resolve(locator::COMPONENT_STREAM_FACTORY),
        }
    }

    /// Render one request into its response sink.
    ///
    /// Spawns the pipeline on the current tokio runtime and returns
    /// immediately. Outside a runtime the render is dropped and the
    /// failure reported through the bus.
    pub fn render(&self, routing_context: Arc<RoutingContext>) {
        let pipeline = RenderPipeline::new(
            Arc::clone(&self.event_bus),
            Arc::clone(&self.config),
            self.document.clone(),
            self.state_factory.clone(),
            self.stream_factory.clone(),
            routing_context,
        );

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(pipeline.run());
            }
            Err(_) => {
                error!("render invoked outside an async runtime");
                self.event_bus.emit(&RenderEvent::Failure {
                    reason: "render invoked outside an async runtime".to_string(),
                });
            }
        }
    }

    /// Whether a document component was found at construction.
    pub fn has_document_component(&self) -> bool {
        self.document.is_some()
    }

    fn load_document_component(
        service_locator: &ServiceLocator,
        event_bus: &EventBus,
    ) -> Option<Arc<dyn ComponentModule>> {
        let registry = service_locator.resolve::<Arc<ComponentRegistry>>(locator::COMPONENT_REGISTRY);
        let document = registry.as_ref().and_then(|registry| registry.document());

        match document {
            Some(registration) => Some(Arc::clone(registration.module())),
            None => {
                let reason = RenderError::MissingDocumentComponent.to_string();
                error!(%reason, "document component lookup failed");
                event_bus.emit(&RenderEvent::Failure { reason });
                None
            }
        }
    }
}
