//! CAS protocol constants.
//!
//! Namespace URIs and the base element vocabulary of the validation
//! response schema.

/// The CAS protocol namespace URI.
pub const NS_CAS: &str = "http://www.yale.edu/tp/cas";

/// Conventional prefix for the CAS namespace.
pub const PREFIX_CAS: &str = "cas";

/// The Technolutions Slate vendor extension namespace URI.
pub const NS_SLATE: &str = "http://technolutions.com/slate";

/// Conventional prefix for the Slate namespace.
pub const PREFIX_SLATE: &str = "slate";

// ============================================================================
// Element local names
// ============================================================================

/// Local name of the response envelope element.
pub const ELT_SERVICE_RESPONSE: &str = "serviceResponse";

/// Local name of the successful authentication variant.
pub const ELT_AUTHENTICATION_SUCCESS: &str = "authenticationSuccess";

/// Local name of the failed authentication variant.
pub const ELT_AUTHENTICATION_FAILURE: &str = "authenticationFailure";

/// Local name of the successful proxy-ticket variant.
pub const ELT_PROXY_SUCCESS: &str = "proxySuccess";

/// Local name of the failed proxy-ticket variant.
pub const ELT_PROXY_FAILURE: &str = "proxyFailure";

/// Local name of the authenticated user element.
pub const ELT_USER: &str = "user";

/// Local name of the attributes block.
pub const ELT_ATTRIBUTES: &str = "attributes";

/// Local name of the authentication timestamp attribute element.
pub const ELT_AUTHENTICATION_DATE: &str = "authenticationDate";

/// Local name of the long-term token flag element.
pub const ELT_LONG_TERM_TOKEN_USED: &str = "longTermAuthenticationRequestTokenUsed";

/// Local name of the new-login flag element.
pub const ELT_IS_FROM_NEW_LOGIN: &str = "isFromNewLogin";

/// Local name of the proxy-granting ticket element.
pub const ELT_PROXY_GRANTING_TICKET: &str = "proxyGrantingTicket";

/// Local name of the proxy list element.
pub const ELT_PROXIES: &str = "proxies";

/// Local name of a single proxy URL entry.
pub const ELT_PROXY: &str = "proxy";

/// Local name of the proxy ticket element.
pub const ELT_PROXY_TICKET: &str = "proxyTicket";

/// Name of the failure code attribute.
pub const ATTR_CODE: &str = "code";
