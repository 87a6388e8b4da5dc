use indexmap::IndexMap;
use serde::Deserialize;

/// A reference or inline schema. A map carrying `$ref` resolves to the
/// `Ref` variant regardless of sibling keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// Tail segment of a `$ref` path, i.e. the referenced schema name.
    pub fn ref_name(ref_path: &str) -> &str {
        ref_path.rsplit('/').next().unwrap_or(ref_path)
    }
}

/// A JSON-Schema-like object, reduced to the keys the walk consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    pub format: Option<String>,

    pub title: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrRef>,

    pub items: Option<Box<SchemaOrRef>>,

    #[serde(rename = "oneOf", default)]
    pub one_of: Vec<SchemaOrRef>,

    #[serde(rename = "allOf", default)]
    pub all_of: Vec<SchemaOrRef>,

    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<SchemaOrRef>,

    #[serde(rename = "maxLength")]
    pub max_length: Option<u64>,

    pub example: Option<serde_json::Value>,
}
