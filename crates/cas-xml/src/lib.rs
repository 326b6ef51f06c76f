//! Namespace-aware XML element trees for CAS protocol codecs.
//!
//! This crate provides the document layer the protocol crates build on:
//!
//! - **Element tree** - a minimal, owned, namespace-aware DOM
//! - **Parsing** - building an element tree from a serialized document
//! - **Serialization** - writing an element tree back to its canonical form
//! - **Chunks** - opaque subtree handles for passthrough of foreign content
//!
//! The tree is deliberately small: elements, attributes and text. Namespace
//! declarations are resolved at parse time and re-emitted at write time, so
//! consumers only ever deal in `(namespace URI, local name)` identities.
//!
//! # Example
//!
//! ```rust
//! use cas_xml::{parse, write, Element};
//!
//! let doc = parse(r#"<cas:user xmlns:cas="http://www.yale.edu/tp/cas">jdoe</cas:user>"#)?;
//! assert!(doc.is_named("http://www.yale.edu/tp/cas", "user"));
//! assert_eq!(doc.text(), "jdoe");
//!
//! let built = Element::qualified("cas", "http://www.yale.edu/tp/cas", "user")
//!     .with_text("jdoe");
//! assert_eq!(write(&built)?, r#"<cas:user xmlns:cas="http://www.yale.edu/tp/cas">jdoe</cas:user>"#);
//! # Ok::<(), cas_xml::XmlError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chunk;
pub mod element;
pub mod error;
pub mod parser;
pub mod writer;

pub use chunk::Chunk;
pub use element::{Element, Node};
pub use error::XmlError;
pub use parser::parse;
pub use writer::write;
