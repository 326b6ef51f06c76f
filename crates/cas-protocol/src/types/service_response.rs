//! The `<cas:serviceResponse>` envelope.

use cas_xml::Element;
use serde::{Deserialize, Serialize};

use crate::error::{CasError, CasResult};

use super::authentication_success::AuthenticationSuccess;
use super::constants::{
    ELT_AUTHENTICATION_FAILURE, ELT_AUTHENTICATION_SUCCESS, ELT_PROXY_FAILURE, ELT_PROXY_SUCCESS,
    ELT_SERVICE_RESPONSE, NS_CAS,
};
use super::failure::{AuthenticationFailure, ProxyFailure};
use super::proxy_success::ProxySuccess;
use super::schema;

/// A CAS validation response: exactly one of four variants.
///
/// The variants are not mutually exclusive at the document level — a
/// malformed response could carry several — so decoding collects every
/// candidate first and rejects anything other than exactly one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceResponse {
    /// Successful ticket validation.
    AuthenticationSuccess(AuthenticationSuccess),
    /// Failed ticket validation.
    AuthenticationFailure(AuthenticationFailure),
    /// Successful proxy-ticket request.
    ProxySuccess(ProxySuccess),
    /// Failed proxy-ticket request.
    ProxyFailure(ProxyFailure),
}

impl ServiceResponse {
    /// Decodes a `<cas:serviceResponse>` element.
    ///
    /// # Errors
    ///
    /// [`CasError::SchemaMismatch`] on a wrong element identity;
    /// [`CasError::MissingResponse`] if no variant child is present;
    /// [`CasError::AmbiguousResponse`] if more than one variant child is
    /// present; any error from decoding the single variant.
    pub fn from_xml(xml: &Element) -> CasResult<Self> {
        schema::expect_identity(xml, ELT_SERVICE_RESPONSE)?;

        let candidates: Vec<&Element> = xml
            .child_elements()
            .filter(|child| {
                child.namespace.as_deref() == Some(NS_CAS) && is_variant(&child.local_name)
            })
            .collect();

        let variant = match candidates.as_slice() {
            [] => return Err(CasError::MissingResponse),
            [only] => *only,
            several => {
                return Err(CasError::AmbiguousResponse {
                    count: several.len(),
                })
            }
        };

        match variant.local_name.as_str() {
            ELT_AUTHENTICATION_SUCCESS => Ok(Self::AuthenticationSuccess(
                AuthenticationSuccess::from_xml(variant)?,
            )),
            ELT_AUTHENTICATION_FAILURE => Ok(Self::AuthenticationFailure(
                AuthenticationFailure::from_xml(variant)?,
            )),
            ELT_PROXY_SUCCESS => Ok(Self::ProxySuccess(ProxySuccess::from_xml(variant)?)),
            ELT_PROXY_FAILURE => Ok(Self::ProxyFailure(ProxyFailure::from_xml(variant)?)),
            _ => Err(CasError::MissingResponse),
        }
    }

    /// Parses and decodes a serialized response document.
    ///
    /// # Errors
    ///
    /// [`CasError::Xml`] if the document is not well-formed, plus every
    /// error [`Self::from_xml`] can return.
    pub fn from_xml_str(xml: &str) -> CasResult<Self> {
        let document = cas_xml::parse(xml)?;
        Self::from_xml(&document)
    }

    /// Encodes this response as a `<cas:serviceResponse>` element wrapping
    /// the active variant.
    #[must_use]
    pub fn to_xml(&self) -> Element {
        let variant = match self {
            Self::AuthenticationSuccess(success) => success.to_xml(),
            Self::AuthenticationFailure(failure) => failure.to_xml(),
            Self::ProxySuccess(success) => success.to_xml(),
            Self::ProxyFailure(failure) => failure.to_xml(),
        };
        schema::cas_element(ELT_SERVICE_RESPONSE).with_child(variant)
    }

    /// Serializes this response to its canonical document form.
    ///
    /// # Errors
    ///
    /// [`CasError::Xml`] if the document layer fails to serialize.
    pub fn to_xml_string(&self) -> CasResult<String> {
        Ok(cas_xml::write(&self.to_xml())?)
    }

    /// Returns true for the success variants.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::AuthenticationSuccess(_) | Self::ProxySuccess(_))
    }
}

fn is_variant(local_name: &str) -> bool {
    matches!(
        local_name,
        ELT_AUTHENTICATION_SUCCESS | ELT_AUTHENTICATION_FAILURE | ELT_PROXY_SUCCESS
            | ELT_PROXY_FAILURE
    )
}
