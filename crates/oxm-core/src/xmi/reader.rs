use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmiError;

/// One class as re-read from a document, carrying the raw style and alias
/// text. The text is parsed by the dependency pass, not here.
#[derive(Debug, Clone)]
pub struct LoadedClass {
    pub id: String,
    pub name: String,
    pub alias: Option<String>,
    pub attributes: Vec<LoadedAttribute>,
}

#[derive(Debug, Clone)]
pub struct LoadedAttribute {
    pub name: String,
    pub declared_type: String,
    pub style: String,
    /// `ea_guid` with the braces stripped.
    pub guid: String,
}

/// A re-read model document: the classes of the package's namespace
/// container in document order, plus the verbatim event stream used for
/// the additive rewrite.
pub struct LoadedDocument {
    events: Vec<Event<'static>>,
    /// Index of the container's closing tag in `events`; new dependency
    /// elements splice in right before it.
    splice_at: usize,
    pub classes: Vec<LoadedClass>,
}

impl LoadedDocument {
    pub(crate) fn events(&self) -> &[Event<'static>] {
        &self.events
    }

    pub(crate) fn splice_index(&self) -> usize {
        self.splice_at
    }
}

/// Load a model document, keeping its event stream intact. Accepts any
/// compliant document with a single top-level package whose namespace
/// container holds the Class elements.
pub fn read_document(input: &str) -> Result<LoadedDocument, XmiError> {
    let mut reader = Reader::from_str(input);

    let mut events: Vec<Event<'static>> = Vec::new();
    let mut classes: Vec<LoadedClass> = Vec::new();
    let mut splice_at: Option<usize> = None;

    let mut depth = 0usize;
    let mut package_depth: Option<usize> = None;
    let mut container_depth: Option<usize> = None;
    let mut current_class: Option<LoadedClass> = None;
    let mut current_attribute: Option<LoadedAttribute> = None;

    loop {
        let event = reader.read_event()?;
        if matches!(event, Event::Eof) {
            break;
        }
        match &event {
            Event::Start(e) => {
                match e.local_name().as_ref() {
                    b"Package" if package_depth.is_none() => {
                        package_depth = Some(depth);
                    }
                    b"Namespace.ownedElement"
                        if package_depth.is_some()
                            && container_depth.is_none()
                            && splice_at.is_none() =>
                    {
                        container_depth = Some(depth);
                    }
                    b"Class" if container_depth.is_some() && current_class.is_none() => {
                        current_class = Some(class_from_start(e)?);
                    }
                    b"Attribute" if current_class.is_some() && current_attribute.is_none() => {
                        current_attribute = Some(attribute_from_start(e)?);
                    }
                    b"TaggedValue" => {
                        record_tagged_value(e, &mut current_class, &mut current_attribute)?;
                    }
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(e) => match e.local_name().as_ref() {
                b"Class" if container_depth.is_some() && current_class.is_none() => {
                    classes.push(class_from_start(e)?);
                }
                b"TaggedValue" => {
                    record_tagged_value(e, &mut current_class, &mut current_attribute)?;
                }
                _ => {}
            },
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                match e.local_name().as_ref() {
                    b"Namespace.ownedElement" if container_depth == Some(depth) => {
                        splice_at = Some(events.len());
                        container_depth = None;
                    }
                    b"Attribute" => {
                        if let (Some(class), Some(attribute)) =
                            (current_class.as_mut(), current_attribute.take())
                        {
                            class.attributes.push(attribute);
                        }
                    }
                    b"Class" => {
                        if let Some(class) = current_class.take() {
                            classes.push(class);
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        events.push(event.into_owned());
    }

    let splice_at = splice_at.ok_or(XmiError::MissingContainer)?;
    Ok(LoadedDocument {
        events,
        splice_at,
        classes,
    })
}

fn class_from_start(e: &BytesStart) -> Result<LoadedClass, XmiError> {
    Ok(LoadedClass {
        id: attr_value(e, b"xmi.id")?.unwrap_or_default(),
        name: attr_value(e, b"name")?.unwrap_or_default(),
        alias: None,
        attributes: Vec::new(),
    })
}

fn attribute_from_start(e: &BytesStart) -> Result<LoadedAttribute, XmiError> {
    Ok(LoadedAttribute {
        name: attr_value(e, b"name")?.unwrap_or_default(),
        declared_type: String::new(),
        style: String::new(),
        guid: String::new(),
    })
}

fn record_tagged_value(
    e: &BytesStart,
    current_class: &mut Option<LoadedClass>,
    current_attribute: &mut Option<LoadedAttribute>,
) -> Result<(), XmiError> {
    // Tagged values outside a class (package metadata, dependency
    // templates) carry nothing the loader needs.
    let Some(class) = current_class.as_mut() else {
        return Ok(());
    };
    let tag = attr_value(e, b"tag")?.unwrap_or_default();
    let value = attr_value(e, b"value")?.unwrap_or_default();
    match current_attribute.as_mut() {
        Some(attribute) => match tag.as_str() {
            "type" => attribute.declared_type = value,
            "style" => attribute.style = value,
            "ea_guid" => attribute.guid = value.trim_matches(['{', '}']).to_string(),
            _ => {}
        },
        None => {
            if tag == "alias" {
                class.alias = Some(value);
            }
        }
    }
    Ok(())
}

fn attr_value(e: &BytesStart, name: &[u8]) -> Result<Option<String>, XmiError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
