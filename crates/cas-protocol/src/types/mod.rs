//! CAS response types and codecs.
//!
//! Entities are immutable once constructed, either directly through their
//! builder-style API or by decoding an element tree. Decoding is strict:
//! element identity and child cardinality are validated all-or-nothing.

mod attributes;
mod authentication_success;
mod constants;
mod extensions;
mod failure;
mod proxy_success;
mod schema;
mod service_response;

pub use attributes::*;
pub use authentication_success::*;
pub use constants::*;
pub use extensions::*;
pub use failure::*;
pub use proxy_success::*;
pub use service_response::*;
