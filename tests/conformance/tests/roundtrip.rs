//! Round-trip and idempotence properties.

use cas_protocol::{Attributes, AuthenticationSuccess, ServiceResponse};
use cas_xml::{parse, Chunk, Element};
use chrono::{TimeZone, Utc};

use crate::fixtures::{CANONICAL_SUCCESS, DISORDERED_SUCCESS};

const CAS_NS: &str = "http://www.yale.edu/tp/cas";
const SLATE_NS: &str = "http://technolutions.com/slate";

/// decode(encode(x)) == x for an API-constructed entity.
#[test]
fn api_constructed_entity_round_trips() {
    let attributes = Attributes::new()
        .with_authentication_date(Utc.with_ymd_and_hms(2015, 11, 12, 9, 30, 10).unwrap())
        .with_long_term_token_used(true)
        .with_is_from_new_login(true)
        .with_extension(Chunk::new(
            Element::qualified("cas", CAS_NS, "firstname").with_text("John"),
        ))
        .with_extension(Chunk::new(
            Element::qualified("slate", SLATE_NS, "custom").with_text("customAttribute"),
        ));
    let success = AuthenticationSuccess::new("jdoe", attributes)
        .with_vendor_extension(Chunk::new(
            Element::qualified("slate", SLATE_NS, "person").with_text("P-1"),
        ))
        .with_proxy_granting_ticket("PGTIOU-84678-8a9d...")
        .with_proxies(vec![
            "https://proxy2/pgtUrl".to_string(),
            "https://proxy1/pgtUrl".to_string(),
        ]);

    let decoded = AuthenticationSuccess::from_xml(&success.to_xml()).unwrap();
    assert_eq!(decoded, success);
}

/// Decode is insensitive to input child order: a pretty-printed, reordered
/// document decodes to the same entity as the canonical form and re-encodes
/// to the canonical bytes.
#[test]
fn decode_normalizes_child_order() {
    let canonical = ServiceResponse::from_xml_str(CANONICAL_SUCCESS).unwrap();
    let disordered = ServiceResponse::from_xml_str(DISORDERED_SUCCESS).unwrap();
    assert_eq!(disordered, canonical);
    assert_eq!(disordered.to_xml_string().unwrap(), CANONICAL_SUCCESS);
}

/// decode(encode(decode(d))) == decode(d) for a document with
/// non-canonical lexical forms (offset timestamps, fractional seconds).
#[test]
fn re_encode_is_idempotent() {
    let document = r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas">
      <cas:authenticationSuccess>
        <cas:user>jdoe</cas:user>
        <cas:attributes>
          <cas:authenticationDate>2015-11-12T10:30:10.500+01:00</cas:authenticationDate>
        </cas:attributes>
      </cas:authenticationSuccess>
    </cas:serviceResponse>"#;

    let first = ServiceResponse::from_xml_str(document).unwrap();
    let re_encoded = first.to_xml_string().unwrap();
    let second = ServiceResponse::from_xml_str(&re_encoded).unwrap();
    assert_eq!(second, first);
    assert_eq!(second.to_xml_string().unwrap(), re_encoded);
}

/// An empty proxies list survives a round trip as empty, never as absent.
#[test]
fn empty_proxies_list_stays_distinct_from_absent() {
    let success = AuthenticationSuccess::new("jdoe", Attributes::new()).with_proxies(Vec::new());
    let decoded = AuthenticationSuccess::from_xml(&success.to_xml()).unwrap();
    assert_eq!(decoded.proxies, Some(Vec::new()));

    let absent = AuthenticationSuccess::new("jdoe", Attributes::new());
    let decoded = AuthenticationSuccess::from_xml(&absent.to_xml()).unwrap();
    assert_eq!(decoded.proxies, None);
}

/// Attribute values and text in vendor payloads keep their escaping through
/// a byte-level round trip.
#[test]
fn escaped_content_round_trips() {
    let canonical = "<cas:attributes xmlns:cas=\"http://www.yale.edu/tp/cas\">\
                     <slate:note xmlns:slate=\"http://technolutions.com/slate\" hint=\"a &amp; b\">1 &lt; 2</slate:note>\
                     </cas:attributes>";
    let block = Attributes::from_xml(&parse(canonical).unwrap()).unwrap();
    assert_eq!(block.extensions[0].element().attribute("hint"), Some("a & b"));
    assert_eq!(block.extensions[0].element().text(), "1 < 2");
    assert_eq!(cas_xml::write(&block.to_xml()).unwrap(), canonical);
}
