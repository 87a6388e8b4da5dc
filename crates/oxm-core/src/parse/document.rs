use indexmap::IndexMap;
use serde::Deserialize;

use super::schema::SchemaOrRef;

/// Info object describing the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The `components` section; only `schemas` feeds the model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrRef>,
}

/// Top-level OpenAPI 3.x document, reduced to the parts the builder
/// consumes. Unknown keys (paths, servers, …) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: Info,
    #[serde(default)]
    pub components: Components,
}
