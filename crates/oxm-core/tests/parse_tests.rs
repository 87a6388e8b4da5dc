use oxm_core::parse;
use oxm_core::parse::schema::SchemaOrRef;

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const COMPOSITIONS: &str = include_str!("fixtures/compositions.yaml");

#[test]
fn parse_petstore_yaml() {
    let doc = parse::from_yaml(PETSTORE).expect("should parse petstore");
    assert_eq!(doc.openapi, "3.0.3");
    assert_eq!(doc.info.title, "Petstore");
    assert_eq!(doc.components.schemas.len(), 3);
}

#[test]
fn parse_preserves_property_order() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let pet = match doc.components.schemas.get("Pet").unwrap() {
        SchemaOrRef::Schema(s) => s,
        _ => panic!("Pet should be an inline schema"),
    };
    let names: Vec<&str> = pet.properties.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        [
            "id", "name", "status", "weight", "owner", "tags", "orders", "misc", "nickname"
        ]
    );
}

#[test]
fn parse_ref_property() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let pet = match doc.components.schemas.get("Pet").unwrap() {
        SchemaOrRef::Schema(s) => s,
        _ => panic!("Pet should be an inline schema"),
    };
    match pet.properties.get("owner").unwrap() {
        SchemaOrRef::Ref { ref_path } => {
            assert_eq!(ref_path, "#/components/schemas/Owner");
            assert_eq!(SchemaOrRef::ref_name(ref_path), "Owner");
        }
        _ => panic!("owner should be a $ref"),
    }
}

#[test]
fn parse_composition_lists() {
    let doc = parse::from_yaml(COMPOSITIONS).unwrap();
    let pet = match doc.components.schemas.get("Pet").unwrap() {
        SchemaOrRef::Schema(s) => s,
        _ => panic!("Pet should be an inline schema"),
    };
    assert_eq!(pet.one_of.len(), 2);
    assert!(pet.all_of.is_empty());

    let zoo = match doc.components.schemas.get("Zoo").unwrap() {
        SchemaOrRef::Schema(s) => s,
        _ => panic!("Zoo should be an inline schema"),
    };
    let star = match zoo.properties.get("star").unwrap() {
        SchemaOrRef::Schema(s) => s,
        _ => panic!("star should be an inline schema"),
    };
    assert_eq!(star.any_of.len(), 3);
}

#[test]
fn parse_from_json() {
    let json = r#"{
        "openapi": "3.1.0",
        "info": {"title": "Minimal", "version": "0.1"},
        "components": {"schemas": {"Thing": {"type": "object"}}}
    }"#;
    let doc = parse::from_json(json).expect("should parse JSON");
    assert_eq!(doc.components.schemas.len(), 1);
}

#[test]
fn parse_rejects_unsupported_version() {
    let yaml = r#"
openapi: "2.0"
info:
  title: Old
  version: "1.0"
"#;
    assert!(parse::from_yaml(yaml).is_err());
}

#[test]
fn parse_rejects_malformed_input() {
    assert!(parse::from_yaml("openapi: [").is_err());
    assert!(parse::from_json("{").is_err());
}

#[test]
fn parse_ignores_unknown_sections() {
    let yaml = r#"
openapi: "3.0.0"
info:
  title: WithPaths
  version: "1.0"
paths:
  /pets:
    get:
      responses:
        "200":
          description: ok
components:
  schemas:
    Pet:
      type: object
"#;
    let doc = parse::from_yaml(yaml).expect("unknown sections are ignored");
    assert_eq!(doc.components.schemas.len(), 1);
}
