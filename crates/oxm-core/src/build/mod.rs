pub mod composition;
pub mod context;
pub mod walker;

use crate::model::{AttributeStyle, ModelDocument, Package, RootClass};
use crate::parse::document::OpenApiDocument;
use crate::parse::schema::SchemaOrRef;

use composition::{composition_of, resolve_composition};
use context::BuilderContext;
use walker::walk_properties;

/// Build the complete model document for a validated OpenAPI document.
/// `stem` is the input file stem; it names the package (`OAS_<stem>`) and
/// the root marker class (`EARootClass_<stem>`).
pub fn build_document(doc: &OpenApiDocument, stem: &str) -> ModelDocument {
    let mut ctx = BuilderContext::new();

    // Pass 1: one class per named top-level schema, properties walked in
    // declaration order. Titled inline members land in the namespace right
    // after the class whose walk synthesized them.
    for (schema_name, entry) in &doc.components.schemas {
        match entry {
            SchemaOrRef::Schema(schema) => {
                let idx = ctx.new_class(schema_name, schema.description.as_deref().unwrap_or(""));
                walk_properties(&mut ctx, schema, idx, schema_name);
            }
            // A bare $ref at the top level still names a class; it just has
            // nothing to walk.
            SchemaOrRef::Ref { .. } => {
                ctx.new_class(schema_name, "");
            }
        }
    }

    // Pass 2: root-level compositions become class aliases, synthesizing
    // inline classes for titled members (appended after all pass-1
    // classes).
    for (schema_name, entry) in &doc.components.schemas {
        let SchemaOrRef::Schema(schema) = entry else {
            continue;
        };
        let Some((kind, members)) = composition_of(schema) else {
            continue;
        };
        let names = resolve_composition(&mut ctx, members, Some(schema_name));
        if let Some(class) = ctx.classes.iter_mut().find(|c| c.name == *schema_name) {
            class.alias = Some(AttributeStyle::Composition(kind, names));
        }
    }

    ModelDocument {
        model_id: ctx.ids.model_id(),
        timestamp: ctx.timestamp.clone(),
        root_class: RootClass {
            id: ctx.ids.element_id(),
            name: format!("EARootClass_{stem}"),
        },
        package: Package {
            id: ctx.package_id.clone(),
            name: format!("OAS_{stem}"),
        },
        classes: ctx.classes,
    }
}
