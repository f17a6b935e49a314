//! Render Pipeline
//!
//! One pipeline instance drives one request to one rendered response.
//!
//! # Stages
//!
//! ```text
//! SignalResolving ──→ ContextBuilt ──→ Streaming ──→ Done
//!        │ signal failed: absorbed,                    │
//!        │ continue without branches                   │ emit DocumentRendered
//!        ▼                                             ▼
//!   (any fatal failure) ──────────────────────────→ Failed ── emit Failure
//! ```
//!
//! Signal resolution always completes, success or failure, strictly before
//! the rendering context is built: the hydration script can only reflect a
//! signal outcome available before the first serialized byte.
//!
//! A failed signal is absorbed locally: the failure is reported and the
//! transition to `ContextBuilt` happens with absent branches. Degraded
//! rendering is preferred over a dropped connection. Everything else
//! transitions to `Failed`, which reports and stops; no response is
//! guaranteed on that path.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::component::ComponentModule;
use crate::runtime::locator;
use crate::runtime::{Config, EventBus, RenderEvent, RoutingContext, SignalState, StateFactory};

use super::context::RenderingContext;
use super::error::RenderError;
use super::hydration::{Branches, HydrationScript};
use super::stream::{pipe_into_sink, ComponentStreamFactory};

/// Explicit pipeline stage. Each transition function consumes the current
/// stage's data and produces the next stage.
enum Stage {
    SignalResolving,
    ContextBuilt {
        state: Box<dyn SignalState>,
        branches: Option<Branches>,
    },
    Streaming {
        context: RenderingContext,
    },
    Done,
    Failed(RenderError),
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Self::SignalResolving => "signal-resolving",
            Self::ContextBuilt { .. } => "context-built",
            Self::Streaming { .. } => "streaming",
            Self::Done => "done",
            Self::Failed(_) => "failed",
        }
    }
}

/// The state machine driving one render call.
pub(crate) struct RenderPipeline {
    event_bus: Arc<EventBus>,
    config: Arc<Config>,
    document: Option<Arc<dyn ComponentModule>>,
    state_factory: Option<Arc<dyn StateFactory>>,
    stream_factory: Option<Arc<dyn ComponentStreamFactory>>,
    routing_context: Arc<RoutingContext>,
}

impl RenderPipeline {
    pub(crate) fn new(
        event_bus: Arc<EventBus>,
        config: Arc<Config>,
        document: Option<Arc<dyn ComponentModule>>,
        state_factory: Option<Arc<dyn StateFactory>>,
        stream_factory: Option<Arc<dyn ComponentStreamFactory>>,
        routing_context: Arc<RoutingContext>,
    ) -> Self {
        Self {
            event_bus,
            config,
            document,
            state_factory,
            stream_factory,
            routing_context,
        }
    }

    /// Run the pipeline to completion.
    ///
    /// Never returns an error: terminal outcomes are reported through the
    /// event bus only.
    pub(crate) async fn run(self) {
        let mut stage = Stage::SignalResolving;

        loop {
            debug!(stage = stage.name(), "render pipeline stage");

            stage = match stage {
                Stage::SignalResolving => self.resolve_signal().await,
                Stage::ContextBuilt { state, branches } => self.build_context(state, branches),
                Stage::Streaming { context } => self.stream(context).await,
                Stage::Done => {
                    debug!("document rendered");
                    self.event_bus.emit(&RenderEvent::DocumentRendered {
                        routing_context: Arc::clone(&self.routing_context),
                    });
                    return;
                }
                Stage::Failed(error) => {
                    warn!(%error, "render pipeline failed");
                    self.event_bus.emit(&RenderEvent::Failure {
                        reason: error.to_string(),
                    });
                    return;
                }
            };
        }
    }

    /// `SignalResolving` → `ContextBuilt`, or `Failed` when the state
    /// store itself cannot be created.
    async fn resolve_signal(&self) -> Stage {
        let factory = match &self.state_factory {
            Some(factory) => factory,
            None => return Stage::Failed(RenderError::MissingService(locator::STATE_FACTORY)),
        };
        let state = factory.create_state();

        let signal_name = match &self.routing_context.args.signal {
            Some(name) => name.clone(),
            None => {
                return Stage::ContextBuilt {
                    state,
                    branches: None,
                }
            }
        };

        let resolution = state
            .signal(
                &signal_name,
                Arc::clone(&self.routing_context),
                &self.routing_context.args,
            )
            .await;

        match resolution {
            Ok(branches) => Stage::ContextBuilt { state, branches },
            Err(error) => {
                // The response must still go out; only hydration degrades.
                warn!(signal = %signal_name, %error, "signal resolution failed");
                self.event_bus.emit(&RenderEvent::Failure {
                    reason: error.to_string(),
                });
                Stage::ContextBuilt {
                    state,
                    branches: None,
                }
            }
        }
    }

    /// `ContextBuilt` → `Streaming`.
    fn build_context(&self, state: Box<dyn SignalState>, branches: Option<Branches>) -> Stage {
        let context = RenderingContext::new(
            state,
            Arc::clone(&self.routing_context),
            HydrationScript::new(branches),
            Arc::clone(&self.config),
            Arc::clone(&self.event_bus),
            self.document.clone(),
        );

        Stage::Streaming { context }
    }

    /// `Streaming` → `Done`, or `Failed` on a stream or sink failure.
    async fn stream(&self, context: RenderingContext) -> Stage {
        let factory = match &self.stream_factory {
            Some(factory) => factory,
            None => {
                return Stage::Failed(RenderError::MissingService(
                    locator::COMPONENT_STREAM_FACTORY,
                ))
            }
        };

        let sink = context.routing_context().middleware.response.clone();
        let stream = factory.create(context);

        match pipe_into_sink(stream, &sink).await {
            Ok(()) => Stage::Done,
            Err(error) => Stage::Failed(error),
        }
    }
}
