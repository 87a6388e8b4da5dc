use indexmap::IndexMap;

use crate::ids::IdentifierAllocator;
use crate::model::{AttributeStyle, Dependency, DependencyKind};
use crate::xmi::reader::{LoadedClass, LoadedDocument};

/// Re-derive semantic edges from the encoded style strings and class
/// aliases of a loaded document. Works from document state alone; no
/// builder context survives to this pass.
///
/// Emission order is fixed for a given input: classes in namespace order,
/// attributes in document order within each class, member names in
/// token-list order, and a class's alias edges after its attribute edges.
/// Style names with no matching class are skipped; enrichment is
/// best-effort, never validation.
pub fn infer_dependencies(doc: &LoadedDocument, ids: &IdentifierAllocator) -> Vec<Dependency> {
    let registry: IndexMap<&str, &LoadedClass> = doc
        .classes
        .iter()
        .map(|class| (class.name.as_str(), class))
        .collect();

    let mut dependencies = Vec::new();
    for class in &doc.classes {
        for attribute in &class.attributes {
            match AttributeStyle::parse(&attribute.style) {
                AttributeStyle::Plain(name) | AttributeStyle::Reference(name) => {
                    if attribute.declared_type == "object" {
                        if let Some(supplier) = registry.get(name.as_str()) {
                            dependencies.push(edge(
                                ids,
                                DependencyKind::Reference,
                                class,
                                supplier,
                                Some(&attribute.guid),
                            ));
                        }
                    }
                }
                AttributeStyle::Composition(kind, names) => {
                    for name in &names {
                        if let Some(supplier) = registry.get(name.as_str()) {
                            dependencies.push(edge(
                                ids,
                                DependencyKind::Composition(kind),
                                class,
                                supplier,
                                Some(&attribute.guid),
                            ));
                        }
                    }
                }
                AttributeStyle::ArrayOf(name) => {
                    if attribute.declared_type == "array" {
                        if let Some(supplier) = registry.get(name.as_str()) {
                            dependencies.push(edge(
                                ids,
                                DependencyKind::Array,
                                class,
                                supplier,
                                Some(&attribute.guid),
                            ));
                        }
                    }
                }
                AttributeStyle::BoundedString(_) => {}
            }
        }

        if let Some(alias) = &class.alias {
            if let AttributeStyle::Composition(kind, names) = AttributeStyle::parse(alias) {
                for name in &names {
                    if let Some(supplier) = registry.get(name.as_str()) {
                        dependencies.push(edge(
                            ids,
                            DependencyKind::Composition(kind),
                            class,
                            supplier,
                            None,
                        ));
                    }
                }
            }
        }
    }
    dependencies
}

fn edge(
    ids: &IdentifierAllocator,
    kind: DependencyKind,
    client: &LoadedClass,
    supplier: &LoadedClass,
    source_attribute: Option<&str>,
) -> Dependency {
    Dependency {
        id: ids.element_id(),
        kind,
        client_id: client.id.clone(),
        client_name: client.name.clone(),
        supplier_id: supplier.id.clone(),
        supplier_name: supplier.name.clone(),
        source_attribute: source_attribute.map(str::to_string),
    }
}
