//! CAS wire-document conformance suite.
//!
//! Exercises the codec against full serialized documents: canonical
//! round-trips at the byte level, decode/encode idempotence, envelope
//! dispatch and vendor extension passthrough.
//!
//! Run with:
//! ```bash
//! cargo test -p cas-conformance-tests
//! ```

mod fixtures;

mod envelope;
mod roundtrip;
