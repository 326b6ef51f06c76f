//! The failure response variants.
//!
//! `<cas:authenticationFailure>` and `<cas:proxyFailure>` share one wire
//! shape: a machine-readable `code` attribute and a human-readable message
//! as text content.

use cas_xml::Element;
use serde::{Deserialize, Serialize};

use crate::error::{CasError, CasResult};

use super::constants::{ATTR_CODE, ELT_AUTHENTICATION_FAILURE, ELT_PROXY_FAILURE};
use super::schema;

/// A failed ticket validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationFailure {
    /// Machine-readable failure code, e.g. `INVALID_TICKET`.
    pub code: String,

    /// Human-readable failure description.
    pub message: String,
}

impl AuthenticationFailure {
    /// Creates a failure response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Builds the failure response for a decode error, using its protocol
    /// failure code and display message.
    #[must_use]
    pub fn from_error(error: &CasError) -> Self {
        Self::new(error.failure_code(), error.to_string())
    }

    /// Decodes a `<cas:authenticationFailure>` element.
    ///
    /// # Errors
    ///
    /// [`CasError::SchemaMismatch`] on a wrong element identity;
    /// [`CasError::MissingAttribute`] if the `code` attribute is absent.
    pub fn from_xml(xml: &Element) -> CasResult<Self> {
        let (code, message) = decode_failure(xml, ELT_AUTHENTICATION_FAILURE)?;
        Ok(Self { code, message })
    }

    /// Encodes this failure as a `<cas:authenticationFailure>` element.
    #[must_use]
    pub fn to_xml(&self) -> Element {
        encode_failure(ELT_AUTHENTICATION_FAILURE, &self.code, &self.message)
    }
}

/// A failed proxy-ticket request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyFailure {
    /// Machine-readable failure code.
    pub code: String,

    /// Human-readable failure description.
    pub message: String,
}

impl ProxyFailure {
    /// Creates a proxy failure response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Decodes a `<cas:proxyFailure>` element.
    ///
    /// # Errors
    ///
    /// [`CasError::SchemaMismatch`] on a wrong element identity;
    /// [`CasError::MissingAttribute`] if the `code` attribute is absent.
    pub fn from_xml(xml: &Element) -> CasResult<Self> {
        let (code, message) = decode_failure(xml, ELT_PROXY_FAILURE)?;
        Ok(Self { code, message })
    }

    /// Encodes this failure as a `<cas:proxyFailure>` element.
    #[must_use]
    pub fn to_xml(&self) -> Element {
        encode_failure(ELT_PROXY_FAILURE, &self.code, &self.message)
    }
}

fn decode_failure(xml: &Element, local_name: &'static str) -> CasResult<(String, String)> {
    schema::expect_identity(xml, local_name)?;
    let code = xml
        .attribute(ATTR_CODE)
        .ok_or(CasError::MissingAttribute {
            element: local_name,
            attribute: "code",
        })?
        .to_string();
    Ok((code, schema::trimmed_text(xml)))
}

fn encode_failure(local_name: &str, code: &str, message: &str) -> Element {
    schema::cas_element(local_name)
        .with_attribute(ATTR_CODE, code)
        .with_text(message)
}
