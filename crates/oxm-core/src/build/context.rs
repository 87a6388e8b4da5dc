use indexmap::IndexMap;

use crate::ids::IdentifierAllocator;
use crate::model::UmlClass;

/// Shared mutable state for one build invocation: the identifier
/// allocator, the class registry, and the growing namespace container.
/// Confined to a single build and passed by `&mut` through the walk.
pub struct BuilderContext {
    pub ids: IdentifierAllocator,
    /// Class display name → class identifier, in creation order. Inline
    /// classes register under their dotted name so later name-based
    /// lookups succeed.
    pub registry: IndexMap<String, String>,
    pub package_id: String,
    pub timestamp: String,
    /// The namespace container.
    pub classes: Vec<UmlClass>,
}

impl BuilderContext {
    pub fn new() -> Self {
        let ids = IdentifierAllocator::new();
        let package_id = ids.package_id();
        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            ids,
            registry: IndexMap::new(),
            package_id,
            timestamp,
            classes: Vec::new(),
        }
    }

    /// Create a class, register it, and append it to the namespace.
    /// Returns its index in the container.
    pub fn new_class(&mut self, name: &str, documentation: &str) -> usize {
        let id = self.ids.element_id();
        let local_id = self.ids.next_local();
        let guid = self.ids.guid();
        self.registry.insert(name.to_string(), id.clone());
        self.classes.push(UmlClass {
            id,
            name: name.to_string(),
            package: self.package_id.clone(),
            documentation: documentation.to_string(),
            guid,
            local_id,
            alias: None,
            attributes: Vec::new(),
        });
        self.classes.len() - 1
    }
}

impl Default for BuilderContext {
    fn default() -> Self {
        Self::new()
    }
}
