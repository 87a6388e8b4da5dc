use crate::model::CompositionKind;
use crate::parse::schema::{Schema, SchemaOrRef};

use super::context::BuilderContext;
use super::walker::walk_properties;

/// The composition a schema declares, if any. The keywords are checked in
/// a fixed order and the first non-empty list wins.
pub fn composition_of(schema: &Schema) -> Option<(CompositionKind, &[SchemaOrRef])> {
    if !schema.one_of.is_empty() {
        return Some((CompositionKind::OneOf, &schema.one_of));
    }
    if !schema.all_of.is_empty() {
        return Some((CompositionKind::AllOf, &schema.all_of));
    }
    if !schema.any_of.is_empty() {
        return Some((CompositionKind::AnyOf, &schema.any_of));
    }
    None
}

/// Resolve the ordered member list of a composition keyword, synthesizing
/// a class for each titled inline member. The returned names match input
/// order; duplicates are preserved.
pub fn resolve_composition(
    ctx: &mut BuilderContext,
    members: &[SchemaOrRef],
    containing: Option<&str>,
) -> Vec<String> {
    let mut names = Vec::new();
    for member in members {
        match member {
            SchemaOrRef::Ref { ref_path } => {
                names.push(SchemaOrRef::ref_name(ref_path).to_string());
            }
            SchemaOrRef::Schema(schema) => match &schema.title {
                Some(title) => {
                    let name = match containing {
                        Some(containing) => format!("{containing}.{title}"),
                        None => title.clone(),
                    };
                    let idx = ctx.new_class(&name, schema.description.as_deref().unwrap_or(""));
                    // Nested compositions recurse with the synthesized
                    // class as the containing context.
                    walk_properties(ctx, schema, idx, &name);
                    names.push(name);
                }
                None => {
                    log::warn!(
                        "skipping composition member with neither $ref nor title in {}",
                        containing.unwrap_or("<top level>")
                    );
                }
            },
        }
    }
    names
}
