//! State Facade
//!
//! The interface to the store that owns component state. One state
//! instance is created per render call through a [`StateFactory`] and
//! discarded when the stream finishes; state is never shared across
//! requests.
//!
//! Resolving a signal is the only asynchronous state-preparation step of
//! the pipeline: it may mutate the store and returns the branches to be
//! embedded for client-side hydration. A rejected signal never aborts the
//! response; the pipeline reports it and renders without branches.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::render::Branches;

use super::routing::{RouteArgs, RoutingContext};

/// Failure of a signal resolution.
#[derive(Debug, Error)]
pub enum SignalError {
    /// The requested signal name is not defined in the store.
    #[error("unknown signal `{0}`")]
    UnknownSignal(String),

    /// The signal ran and rejected.
    #[error("signal `{name}` failed: {reason}")]
    Failed {
        /// Name of the rejected signal.
        name: String,
        /// Reason reported by the store.
        reason: String,
    },
}

/// Per-render component state, owned by the rendering context.
pub trait SignalState: Send + Sync {
    /// Resolve the named signal, mutating state and returning the branches
    /// to hydrate client-side.
    ///
    /// `None` branches mean the signal completed without producing a
    /// hydration payload.
    fn signal(
        &self,
        name: &str,
        routing_context: Arc<RoutingContext>,
        args: &RouteArgs,
    ) -> BoxFuture<'static, Result<Option<Branches>, SignalError>>;
}

/// Creates one [`SignalState`] per render call.
pub trait StateFactory: Send + Sync {
    /// Build a fresh state instance scoped to a single render.
    fn create_state(&self) -> Box<dyn SignalState>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_error_display_forms() {
        let unknown = SignalError::UnknownSignal("loadNews".to_string());
        assert_eq!(unknown.to_string(), "unknown signal `loadNews`");

        let failed = SignalError::Failed {
            name: "loadNews".to_string(),
            reason: "store offline".to_string(),
        };
        assert_eq!(failed.to_string(), "signal `loadNews` failed: store offline");
    }
}
