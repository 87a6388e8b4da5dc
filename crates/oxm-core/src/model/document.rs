use super::class::UmlClass;

/// The root marker class, a sibling of the package under the model.
#[derive(Debug, Clone)]
pub struct RootClass {
    pub id: String,
    pub name: String,
}

/// The package owning every derived class.
#[derive(Debug, Clone)]
pub struct Package {
    pub id: String,
    pub name: String,
}

/// A complete builder-produced model document. `classes` is the namespace
/// container: one ordered collection holding top-level and inline classes
/// alike, in creation order.
#[derive(Debug, Clone)]
pub struct ModelDocument {
    pub model_id: String,
    pub timestamp: String,
    pub root_class: RootClass,
    pub package: Package,
    pub classes: Vec<UmlClass>,
}
