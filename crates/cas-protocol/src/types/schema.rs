//! Shared decode/encode plumbing: identity checks, cardinality guards and
//! lexical value handling.

use cas_xml::Element;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{CasError, CasResult};

use super::constants::{NS_CAS, PREFIX_CAS};

/// Verifies that a node has the expected CAS element identity.
pub(crate) fn expect_identity(xml: &Element, local_name: &str) -> CasResult<()> {
    if xml.is_named(NS_CAS, local_name) {
        return Ok(());
    }
    Err(CasError::SchemaMismatch {
        expected: format!("{{{NS_CAS}}}{local_name}"),
        found: format!(
            "{{{}}}{}",
            xml.namespace.as_deref().unwrap_or(""),
            xml.local_name
        ),
    })
}

/// Direct children of `xml` with the given CAS-namespace local name,
/// in document order.
pub(crate) fn base_children<'a>(
    xml: &'a Element,
    local_name: &'a str,
) -> impl Iterator<Item = &'a Element> {
    xml.child_elements()
        .filter(move |child| child.is_named(NS_CAS, local_name))
}

/// The single matching child; zero or several is a cardinality error.
pub(crate) fn exactly_one<'a>(
    xml: &'a Element,
    parent: &'static str,
    local_name: &'static str,
) -> CasResult<&'a Element> {
    let matches: Vec<_> = base_children(xml, local_name).collect();
    match matches.as_slice() {
        [only] => Ok(*only),
        _ => Err(CasError::Cardinality {
            parent,
            element: local_name,
            count: matches.len(),
        }),
    }
}

/// The matching child if present; several is a cardinality error.
pub(crate) fn at_most_one<'a>(
    xml: &'a Element,
    parent: &'static str,
    local_name: &'static str,
) -> CasResult<Option<&'a Element>> {
    let matches: Vec<_> = base_children(xml, local_name).collect();
    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        _ => Err(CasError::Cardinality {
            parent,
            element: local_name,
            count: matches.len(),
        }),
    }
}

/// Whitespace-trimmed text content of an element.
pub(crate) fn trimmed_text(xml: &Element) -> String {
    xml.text().trim().to_string()
}

/// Parses an `xs:boolean` lexical form.
pub(crate) fn parse_xs_boolean(xml: &Element, local_name: &'static str) -> CasResult<bool> {
    match trimmed_text(xml).as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(CasError::InvalidValue {
            element: local_name,
            reason: format!("'{other}' is not a valid boolean"),
        }),
    }
}

/// Parses an `xs:dateTime` lexical form into a UTC timestamp.
pub(crate) fn parse_xs_date_time(
    xml: &Element,
    local_name: &'static str,
) -> CasResult<DateTime<Utc>> {
    let text = trimmed_text(xml);
    DateTime::parse_from_rfc3339(&text)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| CasError::InvalidValue {
            element: local_name,
            reason: format!("'{text}' is not a valid dateTime: {e}"),
        })
}

/// Canonical `xs:dateTime` form: UTC, `Z` designator, fractional seconds
/// only when non-zero.
pub(crate) fn format_xs_date_time(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Builds a CAS-namespace element holding only text.
pub(crate) fn text_element(local_name: &str, text: &str) -> Element {
    Element::qualified(PREFIX_CAS, NS_CAS, local_name).with_text(text)
}

/// Builds an empty CAS-namespace element.
pub(crate) fn cas_element(local_name: &str) -> Element {
    Element::qualified(PREFIX_CAS, NS_CAS, local_name)
}
