//! Component Modules
//!
//! A component module is a named unit of UI logic registered under a
//! component name. Modules do not implement a fixed lifecycle interface;
//! they expose zero or more methods discoverable by name only, and the
//! dispatch layer decides which one to invoke for a given lifecycle or
//! event name.
//!
//! Every method call produces an asynchronous result; synchronous modules
//! return ready futures. This keeps one uniform contract at every call
//! site.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::Value;
use thiserror::Error;

/// Failure of a component module method.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// The invoked method rejected.
    #[error("component method `{method}` failed: {reason}")]
    MethodFailed {
        /// Name of the rejected method.
        method: String,
        /// Reason reported by the module.
        reason: String,
    },
}

impl ComponentError {
    /// Build a method failure.
    pub fn method_failed(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MethodFailed {
            method: method.into(),
            reason: reason.into(),
        }
    }
}

/// Result future of a module method invocation.
pub type MethodFuture = BoxFuture<'static, Result<Value, ComponentError>>;

/// A callable discovered on a component module.
///
/// The optional argument is the entity name pre-applied by the
/// generic-prefix dispatch path; methods resolved by their full name are
/// invoked with `None`.
pub type ModuleMethod = Arc<dyn Fn(Option<String>) -> MethodFuture + Send + Sync>;

/// A named, capability-polymorphic unit of UI logic.
///
/// Implementations expose their callables through [`find_method`]; the
/// dispatch layer never assumes any method exists.
///
/// [`find_method`]: ComponentModule::find_method
pub trait ComponentModule: Send + Sync {
    /// The registry name of this component.
    fn name(&self) -> &str;

    /// Look up a callable by its exact method name.
    fn find_method(&self, method_name: &str) -> Option<ModuleMethod>;
}

/// Name-keyed method storage for component implementations.
///
/// A convenience for modules that declare their methods as a map; the
/// registered closures are adapted into [`ModuleMethod`] callables.
///
/// # Example
///
/// ```rust,ignore
/// let mut methods = MethodMap::new();
/// methods.insert("render", |_| async { Ok(json!({ "title": "news" })) });
/// methods.insert("handle", |name| async move {
///     Ok(json!({ "handled": name }))
/// });
/// ```
#[derive(Clone, Default)]
pub struct MethodMap {
    methods: HashMap<String, ModuleMethod>,
}

impl MethodMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Register a method under the given name, replacing any previous one.
    pub fn insert<F, Fut>(&mut self, name: impl Into<String>, method: F)
    where
        F: Fn(Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ComponentError>> + Send + 'static,
    {
        self.methods
            .insert(name.into(), Arc::new(move |arg| method(arg).boxed()));
    }

    /// Look up a method by name.
    pub fn get(&self, name: &str) -> Option<ModuleMethod> {
        self.methods.get(name).cloned()
    }

    /// Get the number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn method_map_stores_and_invokes() {
        let mut methods = MethodMap::new();
        methods.insert("render", |_| async { Ok(json!({ "ok": true })) });

        let method = methods.get("render").unwrap();
        let result = method(None).await.unwrap();
        assert_eq!(result, json!({ "ok": true }));

        assert!(methods.get("bind").is_none());
        assert_eq!(methods.len(), 1);
    }

    #[tokio::test]
    async fn methods_receive_pre_applied_name() {
        let mut methods = MethodMap::new();
        methods.insert("handle", |name| async move {
            Ok(Value::String(name.unwrap_or_default()))
        });

        let method = methods.get("handle").unwrap();
        let result = method(Some("click".to_string())).await.unwrap();
        assert_eq!(result, Value::String("click".to_string()));
    }

    #[test]
    fn component_error_display_form() {
        let error = ComponentError::method_failed("render", "template missing");
        assert_eq!(
            error.to_string(),
            "component method `render` failed: template missing"
        );
    }
}
