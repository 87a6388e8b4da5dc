use crate::model::{AttributeStyle, UmlAttribute};
use crate::parse::schema::{Schema, SchemaOrRef};

use super::composition::{composition_of, resolve_composition};
use super::context::BuilderContext;

/// Walk the properties of `schema` in declaration order, appending one
/// attribute per property to the class at `class_idx`. Not read-only:
/// titled composition branches synthesize further classes into the shared
/// registry and namespace as a side effect of the walk.
pub fn walk_properties(
    ctx: &mut BuilderContext,
    schema: &Schema,
    class_idx: usize,
    containing: &str,
) {
    for (name, property) in &schema.properties {
        let attribute = walk_property(ctx, name, property, containing);
        ctx.classes[class_idx].attributes.push(attribute);
    }
}

fn walk_property(
    ctx: &mut BuilderContext,
    name: &str,
    property: &SchemaOrRef,
    containing: &str,
) -> UmlAttribute {
    let id = ctx.ids.attribute_id();

    let (declared_type, style, example, description) = match property {
        SchemaOrRef::Ref { ref_path } => {
            let target = SchemaOrRef::ref_name(ref_path).to_string();
            (
                "object".to_string(),
                AttributeStyle::Reference(target),
                None,
                String::new(),
            )
        }
        SchemaOrRef::Schema(schema) => {
            let (declared_type, style) = property_type(ctx, schema, containing);
            (
                declared_type,
                style,
                schema.example.clone(),
                schema.description.clone().unwrap_or_default(),
            )
        }
    };

    let guid = ctx.ids.guid();
    let local_id = ctx.ids.next_local();
    UmlAttribute {
        id,
        name: name.to_string(),
        declared_type,
        style,
        example,
        description,
        guid,
        local_id,
    }
}

/// Determine the declared type and style of an inline property schema,
/// resolving any composition it declares.
fn property_type(
    ctx: &mut BuilderContext,
    schema: &Schema,
    containing: &str,
) -> (String, AttributeStyle) {
    let mut declared_type = schema
        .schema_type
        .clone()
        .unwrap_or_else(|| "string".to_string());
    let mut style = match &schema.format {
        Some(format) => AttributeStyle::Plain(format.clone()),
        None => AttributeStyle::empty(),
    };

    if let Some((kind, members)) = composition_of(schema) {
        let names = resolve_composition(ctx, members, Some(containing));
        declared_type = "object".to_string();
        style = AttributeStyle::Composition(kind, names);
    }

    if declared_type == "array" {
        style = match schema.items.as_deref() {
            Some(SchemaOrRef::Ref { ref_path }) => {
                AttributeStyle::ArrayOf(SchemaOrRef::ref_name(ref_path).to_string())
            }
            Some(SchemaOrRef::Schema(items)) => AttributeStyle::ArrayOf(
                items
                    .schema_type
                    .clone()
                    .unwrap_or_else(|| "string".to_string()),
            ),
            // items missing: degrade to the bare type name
            None => AttributeStyle::Plain(declared_type.clone()),
        };
    }

    if declared_type == "string" && style.is_empty() {
        if let Some(max) = schema.max_length {
            style = AttributeStyle::BoundedString(max);
        }
    }

    (declared_type, style)
}
