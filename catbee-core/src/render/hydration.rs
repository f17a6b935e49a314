//! Hydration
//!
//! Embedding the signal result into the response so the client can resume
//! from server-computed state without recomputation.
//!
//! The emitted markup is a single script block assigning the JSON form of
//! the branches to a well-known global. The shape is part of the wire
//! contract with the client runtime and must not change.
//!
//! Hydration is best-effort: absent branches or a failing serialization
//! degrade to an empty string. A render is never aborted over its
//! hydration payload.

use std::sync::Arc;

use serde::Serialize;

/// Name of the global the client runtime reads the signal result from.
pub const SIGNAL_CACHE_VARIABLE: &str = "CATBEE_SIGNAL_CACHE";

/// A JSON-serializable hydration payload.
///
/// Blanket-implemented for every `Serialize` type; the signal result is
/// carried through the pipeline behind this object-safe facade.
pub trait HydrationPayload: Send + Sync {
    /// Serialize the payload to its JSON text form.
    fn to_json(&self) -> Result<String, serde_json::Error>;
}

impl<T> HydrationPayload for T
where
    T: Serialize + Send + Sync,
{
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The opaque signal result embedded into the response for client reuse.
pub type Branches = Arc<dyn HydrationPayload>;

/// The hydration markup for one render, closed over the captured branches.
pub struct HydrationScript {
    branches: Option<Branches>,
}

impl HydrationScript {
    /// Close over the branches captured by signal resolution.
    pub fn new(branches: Option<Branches>) -> Self {
        Self { branches }
    }

    /// A script with no branches; renders as the empty string.
    pub fn empty() -> Self {
        Self { branches: None }
    }

    /// Check whether branches were captured.
    pub fn has_branches(&self) -> bool {
        self.branches.is_some()
    }

    /// Produce the hydration markup.
    ///
    /// Returns `<script>var CATBEE_SIGNAL_CACHE = <json>;</script>` when
    /// branches are present and serializable, the empty string otherwise.
    pub fn render(&self) -> String {
        let branches = match &self.branches {
            Some(branches) => branches,
            None => return String::new(),
        };

        match branches.to_json() {
            Ok(json) => format!(
                "<script>var {} = {};</script>",
                SIGNAL_CACHE_VARIABLE, json
            ),
            Err(_) => String::new(),
        }
    }
}
