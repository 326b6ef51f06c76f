//! The `<cas:authenticationSuccess>` response variant.

use cas_xml::{Chunk, Element};
use serde::{Deserialize, Serialize};

use crate::error::CasResult;

use super::attributes::Attributes;
use super::constants::{
    ELT_ATTRIBUTES, ELT_AUTHENTICATION_SUCCESS, ELT_PROXIES, ELT_PROXY,
    ELT_PROXY_GRANTING_TICKET, ELT_USER, NS_CAS,
};
use super::schema;

/// A successful ticket validation.
///
/// Alongside the typed base-schema children, the element tolerates vendor
/// extension elements in foreign namespaces. Those are carried losslessly in
/// [`vendor_extensions`](Self::vendor_extensions), while unknown children in
/// the base namespace are dropped to keep base-schema strictness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationSuccess {
    /// The authenticated user identifier.
    pub user: String,

    /// The attributes block.
    pub attributes: Attributes,

    /// Proxy-granting ticket IOU, when proxying was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_granting_ticket: Option<String>,

    /// Proxy URLs the ticket travelled through, outermost first. An empty
    /// list is distinct from an absent one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxies: Option<Vec<String>>,

    /// Vendor extension elements in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vendor_extensions: Vec<Chunk>,
}

impl AuthenticationSuccess {
    /// Creates a success response for a user.
    #[must_use]
    pub fn new(user: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            user: user.into(),
            attributes,
            proxy_granting_ticket: None,
            proxies: None,
            vendor_extensions: Vec::new(),
        }
    }

    /// Sets the proxy-granting ticket IOU.
    #[must_use]
    pub fn with_proxy_granting_ticket(mut self, ticket: impl Into<String>) -> Self {
        self.proxy_granting_ticket = Some(ticket.into());
        self
    }

    /// Sets the proxy list.
    #[must_use]
    pub fn with_proxies(mut self, proxies: Vec<String>) -> Self {
        self.proxies = Some(proxies);
        self
    }

    /// Appends a vendor extension element.
    #[must_use]
    pub fn with_vendor_extension(mut self, extension: Chunk) -> Self {
        self.vendor_extensions.push(extension);
        self
    }

    /// Decodes a `<cas:authenticationSuccess>` element.
    ///
    /// Decode order is insensitive to the input document order; only the
    /// relative order of vendor extensions is preserved.
    ///
    /// # Errors
    ///
    /// [`CasError::SchemaMismatch`](crate::CasError::SchemaMismatch) on a
    /// wrong element identity;
    /// [`CasError::Cardinality`](crate::CasError::Cardinality) if `user` or
    /// `attributes` is missing or duplicated, or an optional child is
    /// duplicated; any error from decoding the attributes block.
    pub fn from_xml(xml: &Element) -> CasResult<Self> {
        schema::expect_identity(xml, ELT_AUTHENTICATION_SUCCESS)?;

        let user = schema::trimmed_text(schema::exactly_one(
            xml,
            ELT_AUTHENTICATION_SUCCESS,
            ELT_USER,
        )?);
        let attributes = Attributes::from_xml(schema::exactly_one(
            xml,
            ELT_AUTHENTICATION_SUCCESS,
            ELT_ATTRIBUTES,
        )?)?;
        let proxy_granting_ticket =
            schema::at_most_one(xml, ELT_AUTHENTICATION_SUCCESS, ELT_PROXY_GRANTING_TICKET)?
                .map(schema::trimmed_text);
        let proxies = schema::at_most_one(xml, ELT_AUTHENTICATION_SUCCESS, ELT_PROXIES)?
            .map(decode_proxies);
        let vendor_extensions = collect_vendor_extensions(xml);

        Ok(Self {
            user,
            attributes,
            proxy_granting_ticket,
            proxies,
            vendor_extensions,
        })
    }

    /// Encodes this response as a `<cas:authenticationSuccess>` element.
    ///
    /// Canonical child order: `user`, vendor extensions as one contiguous
    /// block (structurally-empty ones omitted), `attributes`,
    /// `proxyGrantingTicket`, `proxies`.
    #[must_use]
    pub fn to_xml(&self) -> Element {
        let mut element = schema::cas_element(ELT_AUTHENTICATION_SUCCESS);
        element.push_child(schema::text_element(ELT_USER, &self.user));
        for extension in &self.vendor_extensions {
            if !extension.is_empty() {
                element.push_child(extension.element().clone());
            }
        }
        element.push_child(self.attributes.to_xml());
        if let Some(ticket) = &self.proxy_granting_ticket {
            element.push_child(schema::text_element(ELT_PROXY_GRANTING_TICKET, ticket));
        }
        if let Some(proxies) = &self.proxies {
            let mut list = schema::cas_element(ELT_PROXIES);
            for proxy in proxies {
                list.push_child(schema::text_element(ELT_PROXY, proxy));
            }
            element.push_child(list);
        }
        element
    }
}

/// Proxy URLs in document order.
fn decode_proxies(list: &Element) -> Vec<String> {
    let mut proxies = Vec::new();
    for child in list.child_elements() {
        if child.is_named(NS_CAS, ELT_PROXY) {
            proxies.push(schema::trimmed_text(child));
        } else {
            tracing::debug!(
                "dropping unexpected <{}> inside <{ELT_PROXIES}>",
                child.local_name
            );
        }
    }
    proxies
}

/// Walks direct children once, retaining foreign-namespace elements in
/// document order. Base-namespace children are either already consumed by
/// the typed fields or dropped for base-schema strictness; children without
/// a namespace are skipped.
fn collect_vendor_extensions(xml: &Element) -> Vec<Chunk> {
    let mut extensions = Vec::new();
    for child in xml.child_elements() {
        match child.namespace.as_deref() {
            Some(NS_CAS) => {
                if !is_typed_child(&child.local_name) {
                    tracing::debug!(
                        "dropping unknown base-namespace element <{}> from <{ELT_AUTHENTICATION_SUCCESS}>",
                        child.local_name
                    );
                }
            }
            Some(_) => extensions.push(Chunk::new(child.clone())),
            None => {
                tracing::debug!(
                    "skipping un-namespaced element <{}> in <{ELT_AUTHENTICATION_SUCCESS}>",
                    child.local_name
                );
            }
        }
    }
    extensions
}

fn is_typed_child(local_name: &str) -> bool {
    matches!(
        local_name,
        ELT_USER | ELT_ATTRIBUTES | ELT_PROXY_GRANTING_TICKET | ELT_PROXIES
    )
}
