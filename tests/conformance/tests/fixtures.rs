//! Shared wire-document fixtures.
//!
//! The canonical strings here match the serializer's output form exactly:
//! no inter-element whitespace, `cas` declared on the outermost element,
//! foreign namespaces declared where they enter scope.

/// Canonical success envelope with a contiguous vendor block after `user`.
pub const CANONICAL_SUCCESS: &str = "\
<cas:serviceResponse xmlns:cas=\"http://www.yale.edu/tp/cas\">\
<cas:authenticationSuccess>\
<cas:user>jdoe</cas:user>\
<slate:person xmlns:slate=\"http://technolutions.com/slate\">P-1</slate:person>\
<slate:round xmlns:slate=\"http://technolutions.com/slate\">EA</slate:round>\
<slate:ref xmlns:slate=\"http://technolutions.com/slate\">R-7</slate:ref>\
<cas:attributes>\
<cas:authenticationDate>2015-11-12T09:30:10Z</cas:authenticationDate>\
<cas:longTermAuthenticationRequestTokenUsed>true</cas:longTermAuthenticationRequestTokenUsed>\
<cas:isFromNewLogin>true</cas:isFromNewLogin>\
</cas:attributes>\
<cas:proxyGrantingTicket>PGTIOU-84678-8a9d...</cas:proxyGrantingTicket>\
<cas:proxies>\
<cas:proxy>https://proxy2/pgtUrl</cas:proxy>\
<cas:proxy>https://proxy1/pgtUrl</cas:proxy>\
</cas:proxies>\
</cas:authenticationSuccess>\
</cas:serviceResponse>";

/// The same response with pretty-printed whitespace, reordered children and
/// a single envelope-level `slate` declaration - decodes to the same entity
/// as [`CANONICAL_SUCCESS`].
pub const DISORDERED_SUCCESS: &str = r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas" xmlns:slate="http://technolutions.com/slate">
  <cas:authenticationSuccess>
    <cas:proxies>
      <cas:proxy>https://proxy2/pgtUrl</cas:proxy>
      <cas:proxy>https://proxy1/pgtUrl</cas:proxy>
    </cas:proxies>
    <slate:person>P-1</slate:person>
    <cas:attributes>
      <cas:isFromNewLogin>true</cas:isFromNewLogin>
      <cas:authenticationDate>2015-11-12T09:30:10Z</cas:authenticationDate>
      <cas:longTermAuthenticationRequestTokenUsed>true</cas:longTermAuthenticationRequestTokenUsed>
    </cas:attributes>
    <slate:round>EA</slate:round>
    <cas:user>jdoe</cas:user>
    <slate:ref>R-7</slate:ref>
    <cas:proxyGrantingTicket>PGTIOU-84678-8a9d...</cas:proxyGrantingTicket>
  </cas:authenticationSuccess>
</cas:serviceResponse>"#;

/// Canonical attributes block with no typed fields and four extensions.
pub const CANONICAL_BARE_ATTRIBUTES: &str = "\
<cas:attributes xmlns:cas=\"http://www.yale.edu/tp/cas\">\
<cas:firstname>Example</cas:firstname>\
<cas:lastname>User</cas:lastname>\
<cas:email>example-user@technolutions.com</cas:email>\
<slate:custom xmlns:slate=\"http://technolutions.com/slate\">customAttribute</slate:custom>\
</cas:attributes>";

/// Canonical failure envelope.
pub const CANONICAL_FAILURE: &str = "\
<cas:serviceResponse xmlns:cas=\"http://www.yale.edu/tp/cas\">\
<cas:authenticationFailure code=\"INVALID_TICKET\">Ticket ST-1856339 not recognized</cas:authenticationFailure>\
</cas:serviceResponse>";

/// Envelope carrying two response variants at once.
pub const AMBIGUOUS_ENVELOPE: &str = r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas">
  <cas:authenticationSuccess>
    <cas:user>jdoe</cas:user>
    <cas:attributes/>
  </cas:authenticationSuccess>
  <cas:proxySuccess>
    <cas:proxyTicket>PT-1856392-b98xZrQN4p90ASrw96c8</cas:proxyTicket>
  </cas:proxySuccess>
</cas:serviceResponse>"#;
