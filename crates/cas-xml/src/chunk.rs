//! Opaque passthrough subtrees.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// An opaque subtree carried through decode/encode untouched.
///
/// A chunk is identified by its `(namespace, local name)` pair; the payload
/// below the root is never inspected. Chunks are how foreign content such as
/// vendor extension elements survives a round trip through a typed codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    namespace: Option<String>,
    local_name: String,
    element: Element,
}

impl Chunk {
    /// Wraps an element, capturing its identity once.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self {
            namespace: element.namespace.clone(),
            local_name: element.local_name.clone(),
            element,
        }
    }

    /// Namespace URI of the wrapped element, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local name of the wrapped element.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// The wrapped subtree.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Unwraps into the underlying subtree.
    #[must_use]
    pub fn into_element(self) -> Element {
        self.element
    }

    /// Returns true if the subtree carries no information: no attributes,
    /// no children and no text. Encoders may omit such chunks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.element.is_empty()
    }
}
