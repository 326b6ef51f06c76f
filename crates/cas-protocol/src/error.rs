//! CAS protocol error types.
//!
//! Decode errors are deterministic structural validations of already-received
//! input; there is nothing transient here and no recovery path. Any nested
//! failure aborts the whole decode with no partial entity returned.

use thiserror::Error;

/// Result type for CAS protocol operations.
pub type CasResult<T> = Result<T, CasError>;

/// CAS protocol decode errors.
#[derive(Debug, Error)]
pub enum CasError {
    /// A node's namespace or local name does not match the element expected
    /// at a decode entry point.
    #[error("unexpected element <{found}>, expected <{expected}>")]
    SchemaMismatch {
        /// The expected `{namespace}local-name` identity.
        expected: String,
        /// The identity actually found.
        found: String,
    },

    /// An exactly-one or at-most-one child constraint was violated.
    /// Missing and duplicate children are the same kind of failure.
    #[error("invalid count for <{element}> in <{parent}>: found {count}")]
    Cardinality {
        /// Local name of the parent element.
        parent: &'static str,
        /// Local name of the constrained child.
        element: &'static str,
        /// The number of matching children actually found.
        count: usize,
    },

    /// The envelope contains no recognized response variant.
    #[error("<serviceResponse> contains no recognized response variant")]
    MissingResponse,

    /// The envelope contains more than one response variant.
    #[error("<serviceResponse> contains {count} response variants, expected exactly one")]
    AmbiguousResponse {
        /// The number of variant children found.
        count: usize,
    },

    /// A required XML attribute is absent.
    #[error("missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        /// Local name of the element missing the attribute.
        element: &'static str,
        /// Name of the missing attribute.
        attribute: &'static str,
    },

    /// A typed value has an unparseable lexical form.
    #[error("invalid value in <{element}>: {reason}")]
    InvalidValue {
        /// Local name of the element holding the value.
        element: &'static str,
        /// Why the value failed to parse.
        reason: String,
    },

    /// The document layer failed to produce or serialize an element tree.
    #[error("XML document error: {0}")]
    Xml(#[from] cas_xml::XmlError),
}

impl CasError {
    /// Returns the CAS protocol failure code for this error.
    ///
    /// Callers that surface decode failures as protocol-level
    /// `<cas:authenticationFailure>` responses use this code verbatim.
    #[must_use]
    pub const fn failure_code(&self) -> &'static str {
        match self {
            Self::SchemaMismatch { .. }
            | Self::Cardinality { .. }
            | Self::MissingResponse
            | Self::AmbiguousResponse { .. }
            | Self::MissingAttribute { .. }
            | Self::InvalidValue { .. } => "INVALID_REQUEST",
            Self::Xml(_) => "INTERNAL_ERROR",
        }
    }
}
