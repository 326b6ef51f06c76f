//! Document parsing.
//!
//! Uses quick-xml, which is safe against XXE by default (doesn't expand
//! entities). DOCTYPE declarations are rejected outright.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::element::{Element, Node};
use crate::error::XmlError;

/// Parses a serialized document into an element tree.
///
/// Namespace declarations are resolved and folded into each element's
/// identity; inter-element whitespace is trimmed. The XML declaration,
/// comments and processing instructions are discarded.
///
/// # Errors
///
/// Returns [`XmlError`] if the input is not well-formed, contains a DOCTYPE,
/// has no root element, or has content after the root element.
pub fn parse(xml: &str) -> Result<Element, XmlError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_resolved_event() {
            Ok((resolution, Event::Start(start))) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlError::TrailingContent);
                }
                stack.push(element_from_start(&resolution, &start)?);
            }
            Ok((resolution, Event::Empty(start))) => {
                if root.is_some() && stack.is_empty() {
                    return Err(XmlError::TrailingContent);
                }
                let element = element_from_start(&resolution, &start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok((_, Event::End(_))) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| XmlError::Parse("unbalanced closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok((_, Event::Text(text))) => {
                let text = text
                    .unescape()
                    .map_err(|e| XmlError::Parse(e.to_string()))?;
                if let Some(parent) = stack.last_mut() {
                    if !text.is_empty() {
                        parent.children.push(Node::Text(text.into_owned()));
                    }
                }
            }
            Ok((_, Event::CData(data))) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(Node::Text(String::from_utf8_lossy(&data).into_owned()));
                }
            }
            Ok((_, Event::DocType(_))) => {
                return Err(XmlError::Parse(
                    "DOCTYPE declarations are not allowed".to_string(),
                ));
            }
            Ok((_, Event::Eof)) => break,
            Ok(_) => {}
            Err(e) => return Err(XmlError::Parse(e.to_string())),
        }
    }

    root.ok_or(XmlError::NoRoot)
}

/// Builds an element from a start tag, resolving its namespace and
/// collecting attributes (namespace declarations excluded).
fn element_from_start(
    resolution: &ResolveResult,
    start: &BytesStart<'_>,
) -> Result<Element, XmlError> {
    let name = start.name();
    let local_name = String::from_utf8_lossy(name.local_name().as_ref()).into_owned();
    let prefix = name
        .prefix()
        .map(|p| String::from_utf8_lossy(p.as_ref()).into_owned());

    let namespace = match resolution {
        ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(XmlError::Parse(format!(
                "undeclared namespace prefix '{}'",
                String::from_utf8_lossy(prefix)
            )));
        }
    };

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| XmlError::Parse(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attribute
            .unescape_value()
            .map_err(|e| XmlError::Parse(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        prefix,
        namespace,
        local_name,
        attributes,
        children: Vec::new(),
    })
}

/// Attaches a completed element to its parent, or installs it as the root.
fn attach(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => {
            if root.is_some() {
                return Err(XmlError::TrailingContent);
            }
            *root = Some(element);
        }
    }
    Ok(())
}
