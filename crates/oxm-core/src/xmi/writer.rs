use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::XmiError;
use crate::model::{Dependency, ModelDocument, UmlAttribute, UmlClass};

use super::reader::LoadedDocument;

/// UML 1.3 namespace bound on the document root.
pub const UML_NAMESPACE: &str = "omg.org/UML1.3";

type XmlWriter = Writer<Vec<u8>>;

/// Serialize a builder-produced model document, envelope included.
pub fn write_document(doc: &ModelDocument) -> Result<String, XmiError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("XMI");
    root.push_attribute(("xmi.version", "1.1"));
    root.push_attribute(("xmlns:UML", UML_NAMESPACE));
    root.push_attribute(("timestamp", doc.timestamp.as_str()));
    writer.write_event(Event::Start(root))?;

    write_header(&mut writer)?;

    writer.write_event(Event::Start(BytesStart::new("XMI.content")))?;

    let mut model = BytesStart::new("UML:Model");
    model.push_attribute(("name", "EA Model"));
    model.push_attribute(("xmi.id", doc.model_id.as_str()));
    writer.write_event(Event::Start(model))?;
    writer.write_event(Event::Start(BytesStart::new("UML:Namespace.ownedElement")))?;

    let mut root_class = BytesStart::new("UML:Class");
    root_class.push_attribute(("name", doc.root_class.name.as_str()));
    root_class.push_attribute(("xmi.id", doc.root_class.id.as_str()));
    root_class.push_attribute(("isRoot", "true"));
    root_class.push_attribute(("isLeaf", "false"));
    root_class.push_attribute(("isAbstract", "false"));
    writer.write_event(Event::Empty(root_class))?;

    let mut package = BytesStart::new("UML:Package");
    package.push_attribute(("name", doc.package.name.as_str()));
    package.push_attribute(("xmi.id", doc.package.id.as_str()));
    package.push_attribute(("isRoot", "false"));
    package.push_attribute(("isLeaf", "false"));
    package.push_attribute(("isAbstract", "false"));
    package.push_attribute(("visibility", "public"));
    writer.write_event(Event::Start(package))?;

    write_tagged_values(
        &mut writer,
        &[
            ("parent", doc.package.id.as_str()),
            ("modified", doc.timestamp.as_str()),
            ("version", "1.0"),
            ("batchsave", "0"),
            ("batchload", "0"),
            ("phase", "1.0"),
            ("status", "Proposed"),
            ("complexity", "1"),
            ("ea_stype", "Public"),
        ],
    )?;

    // The namespace container: every derived class, inline ones included.
    writer.write_event(Event::Start(BytesStart::new("UML:Namespace.ownedElement")))?;
    for class in &doc.classes {
        write_class(&mut writer, class, &doc.package.name, &doc.timestamp)?;
    }
    writer.write_event(Event::End(BytesEnd::new("UML:Namespace.ownedElement")))?;

    writer.write_event(Event::End(BytesEnd::new("UML:Package")))?;
    writer.write_event(Event::End(BytesEnd::new("UML:Namespace.ownedElement")))?;
    writer.write_event(Event::End(BytesEnd::new("UML:Model")))?;
    writer.write_event(Event::End(BytesEnd::new("XMI.content")))?;

    writer.write_event(Event::Empty(BytesStart::new("XMI.difference")))?;
    let mut extensions = BytesStart::new("XMI.extensions");
    extensions.push_attribute(("xmi.extender", "Enterprise Architect 2.5"));
    writer.write_event(Event::Empty(extensions))?;

    writer.write_event(Event::End(BytesEnd::new("XMI")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Replay a loaded document's event stream unchanged, splicing the given
/// dependency elements in front of the closing tag of the package's
/// namespace container. Purely additive: every prior event is written
/// verbatim.
pub fn write_enriched(doc: &LoadedDocument, deps: &[Dependency]) -> Result<String, XmiError> {
    let mut writer = Writer::new(Vec::new());
    for (index, event) in doc.events().iter().enumerate() {
        if index == doc.splice_index() {
            for dep in deps {
                write_dependency(&mut writer, dep)?;
            }
        }
        writer.write_event(event.clone())?;
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_header(writer: &mut XmlWriter) -> Result<(), XmiError> {
    writer.write_event(Event::Start(BytesStart::new("XMI.header")))?;
    writer.write_event(Event::Start(BytesStart::new("XMI.documentation")))?;
    write_text_element(writer, "XMI.exporter", "Enterprise Architect")?;
    write_text_element(writer, "XMI.exporterVersion", "2.5")?;
    write_text_element(writer, "XMI.exporterID", "1628")?;
    writer.write_event(Event::End(BytesEnd::new("XMI.documentation")))?;
    writer.write_event(Event::End(BytesEnd::new("XMI.header")))?;
    Ok(())
}

fn write_class(
    writer: &mut XmlWriter,
    class: &UmlClass,
    package_name: &str,
    timestamp: &str,
) -> Result<(), XmiError> {
    let mut start = BytesStart::new("UML:Class");
    start.push_attribute(("name", class.name.as_str()));
    start.push_attribute(("xmi.id", class.id.as_str()));
    start.push_attribute(("visibility", "public"));
    start.push_attribute(("namespace", class.package.as_str()));
    start.push_attribute(("isRoot", "false"));
    start.push_attribute(("isLeaf", "false"));
    start.push_attribute(("isAbstract", "false"));
    start.push_attribute(("isActive", "false"));
    writer.write_event(Event::Start(start))?;

    let local_id = class.local_id.to_string();
    let alias = class.alias.as_ref().map(|alias| alias.render());
    let mut tags: Vec<(&str, &str)> = vec![
        ("isSpecification", "false"),
        ("ea_stype", "Class"),
        ("ea_ntype", "0"),
        ("version", "1.0"),
        ("package", class.package.as_str()),
        ("date_created", timestamp),
        ("date_modified", timestamp),
        ("gentype", "Java"),
        ("tagged", "0"),
        ("package_name", package_name),
        ("phase", "1.0"),
        ("complexity", "1"),
        ("status", "Proposed"),
        ("tpos", "0"),
        ("ea_localid", local_id.as_str()),
        ("ea_eleType", "element"),
        ("ea_guid", class.guid.as_str()),
        ("documentation", class.documentation.as_str()),
    ];
    if let Some(alias) = alias.as_deref() {
        tags.push(("alias", alias));
    }
    write_tagged_values(writer, &tags)?;

    writer.write_event(Event::Start(BytesStart::new("UML:Classifier.feature")))?;
    for attribute in &class.attributes {
        write_attribute(writer, attribute)?;
    }
    writer.write_event(Event::End(BytesEnd::new("UML:Classifier.feature")))?;

    writer.write_event(Event::End(BytesEnd::new("UML:Class")))?;
    Ok(())
}

fn write_attribute(writer: &mut XmlWriter, attribute: &UmlAttribute) -> Result<(), XmiError> {
    let mut start = BytesStart::new("UML:Attribute");
    start.push_attribute(("name", attribute.name.as_str()));
    start.push_attribute(("xmi.id", attribute.id.as_str()));
    start.push_attribute(("visibility", "private"));
    start.push_attribute(("changeable", "none"));
    start.push_attribute(("ownerScope", "instance"));
    start.push_attribute(("targetScope", "instance"));
    writer.write_event(Event::Start(start))?;

    if let Some(example) = &attribute.example {
        writer.write_event(Event::Start(BytesStart::new("UML:Attribute.initialValue")))?;
        let mut expression = BytesStart::new("UML:Expression");
        let body = example_text(example);
        expression.push_attribute(("body", body.as_str()));
        writer.write_event(Event::Empty(expression))?;
        writer.write_event(Event::End(BytesEnd::new("UML:Attribute.initialValue")))?;
    }

    // Placeholder classifier reference; the semantic type lives in the
    // tagged values below.
    writer.write_event(Event::Start(BytesStart::new("UML:StructuralFeature.type")))?;
    let mut classifier = BytesStart::new("UML:Classifier");
    classifier.push_attribute(("xmi.idref", "eaxmiid0"));
    writer.write_event(Event::Empty(classifier))?;
    writer.write_event(Event::End(BytesEnd::new("UML:StructuralFeature.type")))?;

    let style = attribute.style.render();
    let local_id = attribute.local_id.to_string();
    write_tagged_values(
        writer,
        &[
            ("type", attribute.declared_type.as_str()),
            ("style", style.as_str()),
            ("ea_guid", attribute.guid.as_str()),
            ("ea_localid", local_id.as_str()),
            ("styleex", "volatile=0;"),
            ("description", attribute.description.as_str()),
        ],
    )?;

    writer.write_event(Event::End(BytesEnd::new("UML:Attribute")))?;
    Ok(())
}

fn write_dependency(writer: &mut XmlWriter, dep: &Dependency) -> Result<(), XmiError> {
    let mut start = BytesStart::new("UML:Dependency");
    start.push_attribute(("xmi.id", dep.id.as_str()));
    start.push_attribute(("client", dep.client_id.as_str()));
    start.push_attribute(("supplier", dep.supplier_id.as_str()));
    if let Some(label) = dep.kind.label() {
        start.push_attribute(("name", label));
    }
    writer.write_event(Event::Start(start))?;

    writer.write_event(Event::Start(BytesStart::new("UML:ModelElement.taggedValue")))?;
    for (tag, value) in [
        ("style", "3"),
        ("ea_type", "Dependency"),
        ("direction", "Source -> Destination"),
        ("linemode", "3"),
        ("linecolor", "-1"),
        ("linewidth", "0"),
        ("seqno", "0"),
        ("headStyle", "0"),
        ("lineStyle", "0"),
        ("ea_sourceName", dep.client_name.as_str()),
        ("ea_targetName", dep.supplier_name.as_str()),
        ("ea_sourceType", "Class"),
        ("ea_targetType", "Class"),
        ("src_visibility", "Public"),
        ("src_aggregation", "0"),
        ("src_isOrdered", "false"),
        ("src_targetScope", "instance"),
        ("src_changeable", "none"),
        ("src_isNavigable", "false"),
        ("src_containment", "Unspecified"),
        ("dst_visibility", "Public"),
        ("dst_aggregation", "0"),
        ("dst_isOrdered", "false"),
        ("dst_targetScope", "instance"),
        ("dst_changeable", "none"),
        ("dst_isNavigable", "true"),
        ("dst_containment", "Unspecified"),
        ("virtualInheritance", "0"),
    ] {
        write_tagged_value(writer, tag, value)?;
    }
    if dep.kind.has_cardinality() {
        write_tagged_value(writer, "src_multiplicity", "1")?;
        write_tagged_value(writer, "dst_multiplicity", "0..*")?;
        write_tagged_value(writer, "lb", "1")?;
        write_tagged_value(writer, "rb", "0..*")?;
    }
    if let Some(guid) = &dep.source_attribute {
        let styleex = format!("LFSP={{{guid}}}L;");
        write_tagged_value(writer, "styleex", styleex.as_str())?;
    }
    if let Some(label) = dep.kind.label() {
        write_tagged_value(writer, "mt", label)?;
    }
    writer.write_event(Event::End(BytesEnd::new("UML:ModelElement.taggedValue")))?;
    writer.write_event(Event::End(BytesEnd::new("UML:Dependency")))?;
    Ok(())
}

fn write_tagged_values(writer: &mut XmlWriter, values: &[(&str, &str)]) -> Result<(), XmiError> {
    writer.write_event(Event::Start(BytesStart::new("UML:ModelElement.taggedValue")))?;
    for (tag, value) in values {
        write_tagged_value(writer, tag, value)?;
    }
    writer.write_event(Event::End(BytesEnd::new("UML:ModelElement.taggedValue")))?;
    Ok(())
}

fn write_tagged_value(writer: &mut XmlWriter, tag: &str, value: &str) -> Result<(), XmiError> {
    let mut tv = BytesStart::new("UML:TaggedValue");
    tv.push_attribute(("tag", tag));
    tv.push_attribute(("value", value));
    writer.write_event(Event::Empty(tv))?;
    Ok(())
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), XmiError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Expression body text for an example value: strings verbatim, everything
/// else in JSON form.
fn example_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
