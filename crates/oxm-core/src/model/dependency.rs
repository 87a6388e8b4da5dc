use super::style::CompositionKind;

/// The semantic kind of an inferred edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    /// Plain object reference; the edge carries no display name.
    Reference,
    /// Composition membership; the edge is named after the keyword.
    Composition(CompositionKind),
    /// Array element reference; the edge is named `array` and carries the
    /// `1` → `0..*` cardinality pair.
    Array,
}

impl DependencyKind {
    pub fn label(self) -> Option<&'static str> {
        match self {
            DependencyKind::Reference => None,
            DependencyKind::Composition(kind) => Some(kind.keyword()),
            DependencyKind::Array => Some("array"),
        }
    }

    pub fn has_cardinality(self) -> bool {
        matches!(self, DependencyKind::Array)
    }
}

/// A directed client → supplier edge between two classes, created only by
/// the dependency pass. Duplicates are permitted.
#[derive(Debug, Clone)]
pub struct Dependency {
    pub id: String,
    pub kind: DependencyKind,
    pub client_id: String,
    pub client_name: String,
    pub supplier_id: String,
    pub supplier_name: String,
    /// GUID (without braces) of the attribute the edge was derived from;
    /// absent for class-level alias edges.
    pub source_attribute: Option<String>,
}
