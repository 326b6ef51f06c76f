//! Extension element filtering.
//!
//! The attributes block admits arbitrary extension children next to its
//! typed fields. The filter computes the ordered set-difference between a
//! node's children and a table of excluded element identities, so a typed
//! identity can never leak into the extension list — not even a duplicate
//! that already failed a cardinality check upstream.
//!
//! Namespace is the sole scoping mechanism: a foreign-namespace element
//! sharing a local name with an excluded identity is never excluded.

use cas_xml::{Chunk, Element};

use super::constants::{
    ELT_AUTHENTICATION_DATE, ELT_IS_FROM_NEW_LOGIN, ELT_LONG_TERM_TOKEN_USED, NS_CAS,
};

/// The `(namespace, local name)` identity of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementId {
    /// Namespace URI.
    pub namespace: &'static str,
    /// Local element name.
    pub local_name: &'static str,
}

impl ElementId {
    /// Returns true if `element` has exactly this identity.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        element.is_named(self.namespace, self.local_name)
    }
}

/// Identities excluded from the `<cas:attributes>` extension area: the
/// three typed optional fields of the block.
pub const ATTRIBUTE_EXCLUSIONS: &[ElementId] = &[
    ElementId {
        namespace: NS_CAS,
        local_name: ELT_AUTHENTICATION_DATE,
    },
    ElementId {
        namespace: NS_CAS,
        local_name: ELT_LONG_TERM_TOKEN_USED,
    },
    ElementId {
        namespace: NS_CAS,
        local_name: ELT_IS_FROM_NEW_LOGIN,
    },
];

/// Returns, in original document order, every child whose identity is not
/// in `excluded`, wrapped as opaque passthrough chunks.
///
/// Total over any input; no error conditions and no side effects.
pub fn filter_extensions<'a>(
    children: impl Iterator<Item = &'a Element>,
    excluded: &[ElementId],
) -> Vec<Chunk> {
    children
        .filter(|child| !excluded.iter().any(|id| id.matches(child)))
        .cloned()
        .map(Chunk::new)
        .collect()
}
