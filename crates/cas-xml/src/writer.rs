//! Canonical serialization.
//!
//! Writes an element tree back to XML with no inter-element whitespace and
//! no XML declaration. Namespace declarations are emitted on the first
//! element that introduces a binding; descendants reuse bindings in scope.

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::element::{Element, Node};
use crate::error::XmlError;

/// Serializes an element tree to its canonical string form.
///
/// # Errors
///
/// Returns [`XmlError::Write`] if the underlying writer fails.
pub fn write(root: &Element) -> Result<String, XmlError> {
    let mut writer = Writer::new(Vec::new());
    let mut scope: Vec<(Option<String>, String)> = Vec::new();
    write_element(&mut writer, root, &mut scope)?;
    String::from_utf8(writer.into_inner()).map_err(|e| XmlError::Write(e.to_string()))
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
    scope: &mut Vec<(Option<String>, String)>,
) -> Result<(), XmlError> {
    let qualified_name = element.qualified_name();
    let mut start = BytesStart::new(qualified_name.as_str());

    // Declare the element's namespace binding unless an identical binding
    // for the same prefix is already in scope.
    let mut declared = false;
    if let Some(namespace) = &element.namespace {
        let bound = scope
            .iter()
            .rev()
            .find(|(prefix, _)| *prefix == element.prefix)
            .map(|(_, uri)| uri.as_str());
        if bound != Some(namespace.as_str()) {
            match &element.prefix {
                Some(prefix) => {
                    start.push_attribute((format!("xmlns:{prefix}").as_str(), namespace.as_str()));
                }
                None => start.push_attribute(("xmlns", namespace.as_str())),
            }
            scope.push((element.prefix.clone(), namespace.clone()));
            declared = true;
        }
    }

    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| XmlError::Write(e.to_string()))?;
    } else {
        writer
            .write_event(Event::Start(start))
            .map_err(|e| XmlError::Write(e.to_string()))?;
        for child in &element.children {
            match child {
                Node::Element(child) => write_element(writer, child, scope)?,
                Node::Text(text) => {
                    writer
                        .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
                        .map_err(|e| XmlError::Write(e.to_string()))?;
                }
            }
        }
        writer
            .write_event(Event::End(BytesEnd::new(qualified_name.as_str())))
            .map_err(|e| XmlError::Write(e.to_string()))?;
    }

    if declared {
        scope.pop();
    }
    Ok(())
}
