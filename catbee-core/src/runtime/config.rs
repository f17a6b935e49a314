//! Application Config
//!
//! Process-wide configuration, initialized once at startup and shared
//! read-only with every render. The core itself only distinguishes
//! release mode; everything else is an opaque bag of options forwarded to
//! the streaming renderer and component modules.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Process-wide configuration.
///
/// Deserializable from a single JSON object: the `isRelease` key is typed,
/// all remaining keys are collected into [`Config::options`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Whether the application runs in release mode. Renderers may use
    /// this to toggle minification or debug markup.
    pub is_release: bool,

    /// Renderer- and component-specific options, forwarded verbatim.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl Config {
    /// Build a config from a JSON value.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Look up an untyped option by name.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }
}
