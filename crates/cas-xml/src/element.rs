//! The element tree.
//!
//! An [`Element`] owns its name, namespace binding, attributes and children.
//! Namespace declarations (`xmlns`/`xmlns:*`) are not stored as attributes;
//! each element carries its resolved namespace URI and preferred prefix, and
//! the writer re-emits declarations where bindings enter scope.

use serde::{Deserialize, Serialize};

/// A child of an element: either a nested element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A nested child element.
    Element(Element),
    /// Character data, stored unescaped.
    Text(String),
}

/// An XML element with a resolved namespace identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Preferred namespace prefix, as parsed or as chosen by the builder.
    pub prefix: Option<String>,

    /// Resolved namespace URI, if the element is in a namespace.
    pub namespace: Option<String>,

    /// Local (unprefixed) element name.
    pub local_name: String,

    /// Attributes in document order, excluding namespace declarations.
    /// Keys are stored raw (including any prefix), values unescaped.
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no namespace.
    #[must_use]
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            prefix: None,
            namespace: None,
            local_name: local_name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element bound to a namespace under the given prefix.
    #[must_use]
    pub fn qualified(
        prefix: impl Into<String>,
        namespace: impl Into<String>,
        local_name: impl Into<String>,
    ) -> Self {
        Self {
            prefix: Some(prefix.into()),
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Adds a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Adds a text child.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Appends a text child.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Returns the qualified tag name (`prefix:local` or bare local name).
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.local_name),
            None => self.local_name.clone(),
        }
    }

    /// Returns true if the element has the given namespace URI and local name.
    #[must_use]
    pub fn is_named(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_name == local_name
    }

    /// Looks up an attribute value by its raw name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over direct child elements in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated direct text content of this element.
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Returns true if the element carries no information at all:
    /// no attributes, no child elements and no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }
}
