//! The `<cas:attributes>` block.

use cas_xml::{Chunk, Element};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CasResult;

use super::constants::{
    ELT_ATTRIBUTES, ELT_AUTHENTICATION_DATE, ELT_IS_FROM_NEW_LOGIN, ELT_LONG_TERM_TOKEN_USED,
};
use super::extensions::{filter_extensions, ATTRIBUTE_EXCLUSIONS};
use super::schema;

/// The attributes block of a successful authentication.
///
/// Three typed optional fields plus an open-ended, ordered extension area.
/// Each typed field allows at most one source element; a duplicate is a hard
/// cardinality error, never a silent collapse. The extension area holds any
/// remaining child elements in document order, typed identities excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// When the authentication took place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_date: Option<DateTime<Utc>>,

    /// Whether a long-term ("remember me") token was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term_token_used: Option<bool>,

    /// Whether the authentication came from a fresh login rather than an
    /// existing single sign-on session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_from_new_login: Option<bool>,

    /// Extension elements in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<Chunk>,
}

impl Attributes {
    /// Creates an empty attributes block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the authentication timestamp.
    #[must_use]
    pub const fn with_authentication_date(mut self, date: DateTime<Utc>) -> Self {
        self.authentication_date = Some(date);
        self
    }

    /// Sets the long-term token flag.
    #[must_use]
    pub const fn with_long_term_token_used(mut self, used: bool) -> Self {
        self.long_term_token_used = Some(used);
        self
    }

    /// Sets the new-login flag.
    #[must_use]
    pub const fn with_is_from_new_login(mut self, fresh: bool) -> Self {
        self.is_from_new_login = Some(fresh);
        self
    }

    /// Appends an extension element.
    #[must_use]
    pub fn with_extension(mut self, extension: Chunk) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Replaces the extension list.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<Chunk>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Decodes a `<cas:attributes>` element.
    ///
    /// # Errors
    ///
    /// [`CasError::SchemaMismatch`](crate::CasError::SchemaMismatch) if the
    /// node is not a CAS `attributes` element;
    /// [`CasError::Cardinality`](crate::CasError::Cardinality) if a typed
    /// field occurs more than once;
    /// [`CasError::InvalidValue`](crate::CasError::InvalidValue) if a typed
    /// value has a bad lexical form.
    pub fn from_xml(xml: &Element) -> CasResult<Self> {
        schema::expect_identity(xml, ELT_ATTRIBUTES)?;

        let authentication_date = schema::at_most_one(xml, ELT_ATTRIBUTES, ELT_AUTHENTICATION_DATE)?
            .map(|child| schema::parse_xs_date_time(child, ELT_AUTHENTICATION_DATE))
            .transpose()?;
        let long_term_token_used =
            schema::at_most_one(xml, ELT_ATTRIBUTES, ELT_LONG_TERM_TOKEN_USED)?
                .map(|child| schema::parse_xs_boolean(child, ELT_LONG_TERM_TOKEN_USED))
                .transpose()?;
        let is_from_new_login = schema::at_most_one(xml, ELT_ATTRIBUTES, ELT_IS_FROM_NEW_LOGIN)?
            .map(|child| schema::parse_xs_boolean(child, ELT_IS_FROM_NEW_LOGIN))
            .transpose()?;

        // The exclusion table runs over every child, so a duplicate typed
        // element can never survive into the extension list.
        let extensions = filter_extensions(xml.child_elements(), ATTRIBUTE_EXCLUSIONS);

        Ok(Self {
            authentication_date,
            long_term_token_used,
            is_from_new_login,
            extensions,
        })
    }

    /// Encodes this block as a `<cas:attributes>` element.
    ///
    /// Canonical child order: `authenticationDate`,
    /// `longTermAuthenticationRequestTokenUsed`, `isFromNewLogin`, then the
    /// stored extensions. Structurally-empty extensions are omitted.
    #[must_use]
    pub fn to_xml(&self) -> Element {
        let mut element = schema::cas_element(ELT_ATTRIBUTES);
        if let Some(date) = self.authentication_date {
            element.push_child(schema::text_element(
                ELT_AUTHENTICATION_DATE,
                &schema::format_xs_date_time(date),
            ));
        }
        if let Some(used) = self.long_term_token_used {
            element.push_child(schema::text_element(
                ELT_LONG_TERM_TOKEN_USED,
                bool_lexical(used),
            ));
        }
        if let Some(fresh) = self.is_from_new_login {
            element.push_child(schema::text_element(ELT_IS_FROM_NEW_LOGIN, bool_lexical(fresh)));
        }
        for extension in &self.extensions {
            if !extension.is_empty() {
                element.push_child(extension.element().clone());
            }
        }
        element
    }
}

const fn bool_lexical(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
