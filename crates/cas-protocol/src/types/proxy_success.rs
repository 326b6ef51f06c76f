//! The `<cas:proxySuccess>` response variant.

use cas_xml::Element;
use serde::{Deserialize, Serialize};

use crate::error::CasResult;

use super::constants::{ELT_PROXY_SUCCESS, ELT_PROXY_TICKET};
use super::schema;

/// A successful proxy-ticket request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySuccess {
    /// The issued proxy ticket.
    pub proxy_ticket: String,
}

impl ProxySuccess {
    /// Creates a proxy success response.
    #[must_use]
    pub fn new(proxy_ticket: impl Into<String>) -> Self {
        Self {
            proxy_ticket: proxy_ticket.into(),
        }
    }

    /// Decodes a `<cas:proxySuccess>` element.
    ///
    /// # Errors
    ///
    /// [`CasError::SchemaMismatch`](crate::CasError::SchemaMismatch) on a
    /// wrong element identity;
    /// [`CasError::Cardinality`](crate::CasError::Cardinality) unless there
    /// is exactly one `<cas:proxyTicket>` child.
    pub fn from_xml(xml: &Element) -> CasResult<Self> {
        schema::expect_identity(xml, ELT_PROXY_SUCCESS)?;
        let ticket = schema::exactly_one(xml, ELT_PROXY_SUCCESS, ELT_PROXY_TICKET)?;
        Ok(Self {
            proxy_ticket: schema::trimmed_text(ticket),
        })
    }

    /// Encodes this response as a `<cas:proxySuccess>` element.
    #[must_use]
    pub fn to_xml(&self) -> Element {
        schema::cas_element(ELT_PROXY_SUCCESS)
            .with_child(schema::text_element(ELT_PROXY_TICKET, &self.proxy_ticket))
    }
}
