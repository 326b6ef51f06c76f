//! CAS protocol response messages for Rust.
//!
//! This crate models the `<cas:serviceResponse>` document an identity
//! provider returns during ticket validation, including:
//!
//! - **Typed entities** - immutable value types for the response variants
//!   and their sub-structures
//! - **Decoding** - strict, all-or-nothing validation of element identity
//!   and child cardinality
//! - **Encoding** - canonical child ordering on serialization
//! - **Vendor passthrough** - lossless round-tripping of extension elements
//!   injected by a third-party identity provider (Technolutions Slate),
//!   kept strictly apart from the typed base-schema fields
//!
//! # Architecture
//!
//! - [`types`] - entities, codecs and the envelope dispatcher
//! - [`error`] - error taxonomy for decode operations
//!
//! The document layer (element trees, parsing, serialization) lives in the
//! `cas-xml` crate; this crate consumes opaque [`cas_xml::Element`] handles
//! and never touches raw markup.
//!
//! # Example
//!
//! ```rust
//! use cas_protocol::ServiceResponse;
//!
//! let response = ServiceResponse::from_xml_str(
//!     r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas">
//!          <cas:authenticationFailure code="INVALID_TICKET">Ticket not recognized</cas:authenticationFailure>
//!        </cas:serviceResponse>"#,
//! )?;
//! assert!(!response.is_success());
//! # Ok::<(), cas_protocol::CasError>(())
//! ```
//!
//! # Protocol references
//!
//! - [CAS Protocol 3.0 Specification](https://apereo.github.io/cas/development/protocol/CAS-Protocol-Specification.html)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{CasError, CasResult};
pub use types::*;
