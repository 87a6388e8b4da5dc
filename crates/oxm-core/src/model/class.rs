use serde_json::Value;

use super::style::AttributeStyle;

/// A UML class derived from a named top-level schema or synthesized from a
/// titled inline composition member. Inline classes carry a dotted name
/// (`Parent.ChildTitle`) but live in the same namespace container as every
/// other class.
#[derive(Debug, Clone)]
pub struct UmlClass {
    pub id: String,
    pub name: String,
    /// Owning package identifier.
    pub package: String,
    pub documentation: String,
    pub guid: String,
    pub local_id: u64,
    /// Set only when the schema itself is a root-level composition; always
    /// the `Composition` style variant, rendered with the same grammar as
    /// attribute styles.
    pub alias: Option<AttributeStyle>,
    /// Insertion order is schema property order.
    pub attributes: Vec<UmlAttribute>,
}

/// A class property.
#[derive(Debug, Clone)]
pub struct UmlAttribute {
    pub id: String,
    pub name: String,
    /// Declared base type: `string`, `number`, `object`, `array`, …
    pub declared_type: String,
    pub style: AttributeStyle,
    /// Becomes the attribute's initial value when present.
    pub example: Option<Value>,
    pub description: String,
    pub guid: String,
    pub local_id: u64,
}
