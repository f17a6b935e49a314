//! Dynamic Method Dispatch
//!
//! Locates the callable to invoke on a component module for a given
//! lifecycle or event name, without requiring modules to implement a fixed
//! interface.
//!
//! # Resolution
//!
//! For a prefix and an entity name, resolution follows this precedence:
//!
//! 1. A method named by camel-casing `prefix + name` (e.g. `handle` +
//!    `click` resolves `handleClick`), invoked with no argument.
//!
//! 2. A method named exactly `prefix`, invoked with the entity name
//!    pre-applied as its argument (e.g. `handle("click")`).
//!
//! 3. An explicit no-op that resolves to a completed, value-less result.
//!
//! Every dispatch site therefore has a callable target; there are no
//! null-checks at call sites.
//!
//! Per-instance resolution happens once, at registration time, through
//! [`DispatchTable`]; ad-hoc resolution is available through
//! [`get_method_to_invoke`].

use std::collections::HashMap;
use std::fmt;

use futures_util::future;
use futures_util::FutureExt;
use serde_json::Value;

use super::module::{ComponentError, ComponentModule, MethodFuture, ModuleMethod};

static NOOP_METHOD: BoundMethod = BoundMethod::Noop;

/// Gets the camel-cased method name for a prefix and an entity name.
///
/// The name is split on runs of non-alphanumeric characters; the first
/// emitted character is lower-cased when there is no prefix, every later
/// segment starts upper-cased. An empty name yields an empty string.
pub fn get_camel_case_name(prefix: &str, name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let mut camel_case_name = String::from(prefix);

    for part in name.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = part.chars();
        let first = match chars.next() {
            Some(first) => first,
            None => continue,
        };

        // first character in a method name must be in lowercase
        if camel_case_name.is_empty() {
            camel_case_name.push(first.to_ascii_lowercase());
        } else {
            camel_case_name.push(first.to_ascii_uppercase());
        }
        camel_case_name.push_str(chars.as_str());
    }

    camel_case_name
}

/// A dispatch target resolved against a component module.
#[derive(Clone)]
pub enum BoundMethod {
    /// A method resolved by its full camel-cased name; invoked with no
    /// argument.
    Named(ModuleMethod),

    /// The generic prefix method, with the entity name pre-applied.
    Fallback {
        /// The generic method.
        method: ModuleMethod,
        /// Entity name passed as the method's argument.
        name: String,
    },

    /// No matching method; resolves to a completed, value-less result.
    Noop,
}

impl BoundMethod {
    /// Invoke the target.
    pub fn invoke(&self) -> MethodFuture {
        match self {
            Self::Named(method) => method(None),
            Self::Fallback { method, name } => method(Some(name.clone())),
            Self::Noop => future::ready(Ok(Value::Null)).boxed(),
        }
    }

    /// Check whether this target is the no-op.
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }
}

impl fmt::Debug for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(_) => f.write_str("BoundMethod::Named"),
            Self::Fallback { name, .. } => {
                f.debug_struct("BoundMethod::Fallback").field("name", name).finish()
            }
            Self::Noop => f.write_str("BoundMethod::Noop"),
        }
    }
}

/// Gets the method of the module that can be invoked for the given prefix
/// and entity name, following the resolution precedence.
pub fn get_method_to_invoke(
    module: &dyn ComponentModule,
    prefix: &str,
    name: &str,
) -> BoundMethod {
    let method_name = get_camel_case_name(prefix, name);
    if !method_name.is_empty() {
        if let Some(method) = module.find_method(&method_name) {
            return BoundMethod::Named(method);
        }
    }
    if let Some(method) = module.find_method(prefix) {
        return BoundMethod::Fallback {
            method,
            name: name.to_string(),
        };
    }

    BoundMethod::Noop
}

/// Per-instance dispatch table, resolved once at registration time.
///
/// Maps event or lifecycle names to their [`BoundMethod`] so dispatch
/// sites never re-derive method names per call. Unknown names yield the
/// no-op target.
pub struct DispatchTable {
    methods: HashMap<String, BoundMethod>,
}

impl DispatchTable {
    /// Resolve `names` against the module with the given prefix.
    pub fn new(module: &dyn ComponentModule, prefix: &str, names: &[&str]) -> Self {
        let methods = names
            .iter()
            .map(|name| {
                (
                    name.to_string(),
                    get_method_to_invoke(module, prefix, name),
                )
            })
            .collect();

        Self { methods }
    }

    /// Get the dispatch target for a name.
    pub fn get(&self, name: &str) -> &BoundMethod {
        self.methods.get(name).unwrap_or(&NOOP_METHOD)
    }

    /// Get the number of resolved names.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Gets a uniformly asynchronous result from a possibly-failing synchronous
/// action.
///
/// The action runs immediately; an early error becomes an already-failed
/// future instead of propagating synchronously, so sync-failing and
/// async-returning call sites share one contract.
pub fn safe_future<F>(action: F) -> MethodFuture
where
    F: FnOnce() -> Result<MethodFuture, ComponentError>,
{
    match action() {
        Ok(fut) => fut,
        Err(error) => future::ready(Err(error)).boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::module::MethodMap;
    use serde_json::json;

    struct TestModule {
        methods: MethodMap,
    }

    impl TestModule {
        fn new(methods: MethodMap) -> Self {
            Self { methods }
        }
    }

    impl ComponentModule for TestModule {
        fn name(&self) -> &str {
            "test"
        }

        fn find_method(&self, method_name: &str) -> Option<ModuleMethod> {
            self.methods.get(method_name)
        }
    }

    #[test]
    fn camel_case_joins_prefix_and_name() {
        assert_eq!(get_camel_case_name("handle", "on-click"), "handleOnClick");
        assert_eq!(get_camel_case_name("handle", "click"), "handleClick");
        assert_eq!(get_camel_case_name("render", "user_panel"), "renderUserPanel");
    }

    #[test]
    fn camel_case_without_prefix_lower_cases_first_segment() {
        assert_eq!(get_camel_case_name("", "On-Click"), "onClick");
        assert_eq!(get_camel_case_name("", "render"), "render");
    }

    #[test]
    fn camel_case_of_empty_name_is_empty() {
        assert_eq!(get_camel_case_name("handle", ""), "");
    }

    #[test]
    fn camel_case_skips_separator_runs() {
        assert_eq!(get_camel_case_name("handle", "--on--click--"), "handleOnClick");
    }

    #[tokio::test]
    async fn named_method_wins_over_generic() {
        let mut methods = MethodMap::new();
        methods.insert("handleClick", |_| async { Ok(json!("named")) });
        methods.insert("handle", |_| async { Ok(json!("generic")) });
        let module = TestModule::new(methods);

        let method = get_method_to_invoke(&module, "handle", "click");
        assert_eq!(method.invoke().await.unwrap(), json!("named"));
    }

    #[tokio::test]
    async fn generic_method_receives_name() {
        let mut methods = MethodMap::new();
        methods.insert("handle", |name| async move {
            Ok(Value::String(name.unwrap_or_default()))
        });
        let module = TestModule::new(methods);

        let method = get_method_to_invoke(&module, "handle", "click");
        match &method {
            BoundMethod::Fallback { name, .. } => assert_eq!(name, "click"),
            other => panic!("expected fallback, got {:?}", other),
        }
        assert_eq!(method.invoke().await.unwrap(), json!("click"));
    }

    #[tokio::test]
    async fn missing_methods_resolve_to_noop() {
        let module = TestModule::new(MethodMap::new());

        let method = get_method_to_invoke(&module, "handle", "click");
        assert!(method.is_noop());
        assert_eq!(method.invoke().await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn dispatch_table_resolves_once_and_falls_back_to_noop() {
        let mut methods = MethodMap::new();
        methods.insert("render", |_| async { Ok(json!("rendered")) });
        let module = TestModule::new(methods);

        let table = DispatchTable::new(&module, "", &["render", "bind"]);
        assert_eq!(table.len(), 2);

        assert_eq!(table.get("render").invoke().await.unwrap(), json!("rendered"));
        assert!(table.get("bind").is_noop());
        assert!(table.get("unknown").is_noop());
    }

    #[tokio::test]
    async fn safe_future_converts_early_error() {
        let result = safe_future(|| Err(ComponentError::method_failed("render", "sync failure")))
            .await;

        match result {
            Err(ComponentError::MethodFailed { method, .. }) => assert_eq!(method, "render"),
            other => panic!("expected method failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn safe_future_passes_through_success() {
        let result = safe_future(|| Ok(future::ready(Ok(json!(1))).boxed())).await;
        assert_eq!(result.unwrap(), json!(1));
    }
}
