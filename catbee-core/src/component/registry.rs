//! Component Registry
//!
//! Name-indexed store of component modules. Registration derives the
//! component's DOM tag name and resolves its lifecycle dispatch table
//! once, so rendering never probes modules per call.
//!
//! Names are case-insensitive; the registry stores and reports them
//! lower-cased. Registration order is preserved for deterministic
//! iteration.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use super::dispatch::DispatchTable;
use super::module::ComponentModule;
use super::naming;

/// Lifecycle hook names resolved into every registration's dispatch table.
pub const LIFECYCLE_HOOKS: [&str; 3] = ["render", "bind", "unbind"];

/// A registered component: its module plus everything derived from the
/// name at registration time.
#[derive(Clone)]
pub struct ComponentRegistration {
    name: String,
    tag_name: String,
    module: Arc<dyn ComponentModule>,
    lifecycle: Arc<DispatchTable>,
}

impl ComponentRegistration {
    /// The normalized (lower-cased) registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The DOM tag name this component renders as.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// The component module.
    pub fn module(&self) -> &Arc<dyn ComponentModule> {
        &self.module
    }

    /// The lifecycle dispatch table resolved at registration.
    pub fn lifecycle(&self) -> &DispatchTable {
        &self.lifecycle
    }
}

/// Registry of component modules, indexed by normalized name.
pub struct ComponentRegistry {
    components: RwLock<IndexMap<String, ComponentRegistration>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            components: RwLock::new(IndexMap::new()),
        }
    }

    /// Register a module under its own name.
    ///
    /// Returns `false` when the module's name is empty or already taken.
    pub fn register(&self, module: Arc<dyn ComponentModule>) -> bool {
        let name = module.name().to_ascii_lowercase();
        if name.is_empty() {
            return false;
        }

        let mut components = self.components.write();
        if components.contains_key(&name) {
            return false;
        }

        let registration = ComponentRegistration {
            tag_name: naming::get_tag_name_for_component_name(&name),
            lifecycle: Arc::new(DispatchTable::new(module.as_ref(), "", &LIFECYCLE_HOOKS)),
            module,
            name: name.clone(),
        };
        components.insert(name, registration);
        true
    }

    /// Look up a registration by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<ComponentRegistration> {
        self.components
            .read()
            .get(&name.to_ascii_lowercase())
            .cloned()
    }

    /// Look up the reserved document component.
    pub fn document(&self) -> Option<ComponentRegistration> {
        self.get(naming::DOCUMENT_COMPONENT_NAME)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.components.read().keys().cloned().collect()
    }

    /// Get the number of registered components.
    pub fn len(&self) -> usize {
        self.components.read().len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.read().is_empty()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::module::{MethodMap, ModuleMethod};
    use serde_json::json;

    struct TestComponent {
        name: &'static str,
        methods: MethodMap,
    }

    impl TestComponent {
        fn new(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                methods: MethodMap::new(),
            })
        }

        fn with_render(name: &'static str) -> Arc<Self> {
            let mut methods = MethodMap::new();
            methods.insert("render", |_| async { Ok(json!("markup")) });
            Arc::new(Self { name, methods })
        }
    }

    impl ComponentModule for TestComponent {
        fn name(&self) -> &str {
            self.name
        }

        fn find_method(&self, method_name: &str) -> Option<ModuleMethod> {
            self.methods.get(method_name)
        }
    }

    #[test]
    fn register_derives_tag_name() {
        let registry = ComponentRegistry::new();
        assert!(registry.register(TestComponent::new("News")));

        let registration = registry.get("news").unwrap();
        assert_eq!(registration.name(), "news");
        assert_eq!(registration.tag_name(), "CAT-NEWS");
    }

    #[test]
    fn register_rejects_duplicates_and_empty_names() {
        let registry = ComponentRegistry::new();
        assert!(registry.register(TestComponent::new("news")));
        assert!(!registry.register(TestComponent::new("NEWS")));
        assert!(!registry.register(TestComponent::new("")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = ComponentRegistry::new();
        registry.register(TestComponent::new("news"));

        assert!(registry.get("NEWS").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn document_lookup_uses_reserved_name() {
        let registry = ComponentRegistry::new();
        assert!(registry.document().is_none());

        registry.register(TestComponent::new("document"));
        let document = registry.document().unwrap();
        assert_eq!(document.tag_name(), "HTML");
    }

    #[tokio::test]
    async fn lifecycle_table_is_resolved_at_registration() {
        let registry = ComponentRegistry::new();
        registry.register(TestComponent::with_render("news"));

        let registration = registry.get("news").unwrap();
        let render = registration.lifecycle().get("render");
        assert_eq!(render.invoke().await.unwrap(), json!("markup"));

        // Hooks the module does not implement resolve to the no-op.
        assert!(registration.lifecycle().get("bind").is_noop());
        assert!(registration.lifecycle().get("unbind").is_noop());
    }

    #[test]
    fn names_preserve_registration_order() {
        let registry = ComponentRegistry::new();
        registry.register(TestComponent::new("document"));
        registry.register(TestComponent::new("head"));
        registry.register(TestComponent::new("news"));

        assert_eq!(registry.names(), ["document", "head", "news"]);
    }
}
